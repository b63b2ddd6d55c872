//! Form domain layer
//!
//! Field identifiers plus the registration form engine. Rendering is a
//! separate collaborator: everything in here is pure, synchronous state.

mod field;
mod registration;

pub use field::{FieldId, FieldKind, UnknownField, FIELD_COUNT};
pub use registration::{FormData, RegistrationForm, ViewState};

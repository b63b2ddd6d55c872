//! Form field identifiers and metadata

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of fields in the registration record.
pub const FIELD_COUNT: usize = 10;

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-typed text
    Text,
    /// Free-typed text rendered masked
    Secret,
    /// Value chosen from a finite option list
    Select,
}

/// One of the ten registration fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    PhoneNumber,
    Country,
    City,
    PanNumber,
    AadharNumber,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; FIELD_COUNT] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Username,
        FieldId::Email,
        FieldId::Password,
        FieldId::PhoneNumber,
        FieldId::Country,
        FieldId::City,
        FieldId::PanNumber,
        FieldId::AadharNumber,
    ];

    /// Wire name used for serialization and lookup by name
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::PhoneNumber => "phoneNumber",
            Self::Country => "country",
            Self::City => "city",
            Self::PanNumber => "panNumber",
            Self::AadharNumber => "aadharNumber",
        }
    }

    /// Human-readable label for rendering
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::PhoneNumber => "Phone Number",
            Self::Country => "Country",
            Self::City => "City",
            Self::PanNumber => "PAN Number",
            Self::AadharNumber => "Aadhar Number",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "Enter first name",
            Self::LastName => "Enter last name",
            Self::Username => "Enter username",
            Self::Email => "Enter email address",
            Self::Password => "Enter password",
            Self::PhoneNumber => "Enter phone number",
            Self::Country => "Select country",
            Self::City => "Select city",
            Self::PanNumber => "ABCDE1234F",
            Self::AadharNumber => "123456789012",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Password => FieldKind::Secret,
            Self::Country | Self::City => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }

    pub fn is_select(self) -> bool {
        self.kind() == FieldKind::Select
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a wire name does not match any field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_display_order() {
        assert_eq!(FieldId::ALL.len(), FIELD_COUNT);
        assert_eq!(FieldId::ALL[0], FieldId::FirstName);
        assert_eq!(FieldId::ALL[FIELD_COUNT - 1], FieldId::AadharNumber);
    }

    #[test]
    fn test_wire_names_round_trip() {
        for field in FieldId::ALL {
            assert_eq!(field.name().parse::<FieldId>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_wire_name_is_an_error() {
        let err = "middleName".parse::<FieldId>().unwrap_err();
        assert_eq!(err, UnknownField("middleName".to_string()));
        assert_eq!(err.to_string(), "unknown form field: middleName");
    }

    #[test]
    fn test_wire_names_are_unique() {
        let mut names: Vec<_> = FieldId::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FIELD_COUNT);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(FieldId::Password.kind(), FieldKind::Secret);
        assert_eq!(FieldId::Country.kind(), FieldKind::Select);
        assert_eq!(FieldId::City.kind(), FieldKind::Select);
        assert_eq!(FieldId::Email.kind(), FieldKind::Text);
        assert!(FieldId::Country.is_select());
        assert!(!FieldId::PanNumber.is_select());
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(FieldId::PhoneNumber.to_string(), "phoneNumber");
    }
}

//! Registration form engine
//!
//! Owns the record values, per-field errors, touched flags, and the
//! editing/submitted view state. The UI layer only reads state from here
//! and forwards events; it never computes validity itself.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::field::FieldId;
use crate::data::countries;
use crate::state::validation::validate;

/// Whether the form is accepting input or showing a completed submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Editing,
    Submitted,
}

/// The raw registration record, exactly as typed
///
/// Absence is always the empty string. Serialized with wire names for the
/// clipboard export; the password never leaves the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub pan_number: String,
    pub aadhar_number: String,
}

impl FormData {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Username => &self.username,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::PhoneNumber => &self.phone_number,
            FieldId::Country => &self.country,
            FieldId::City => &self.city,
            FieldId::PanNumber => &self.pan_number,
            FieldId::AadharNumber => &self.aadhar_number,
        }
    }

    fn set(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::FirstName => self.first_name = value,
            FieldId::LastName => self.last_name = value,
            FieldId::Username => self.username = value,
            FieldId::Email => self.email = value,
            FieldId::Password => self.password = value,
            FieldId::PhoneNumber => self.phone_number = value,
            FieldId::Country => self.country = value,
            FieldId::City => self.city = value,
            FieldId::PanNumber => self.pan_number = value,
            FieldId::AadharNumber => self.aadhar_number = value,
        }
    }
}

/// Form engine for the registration record
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    data: FormData,
    /// Error per validated field; `""` means the field passed. A field
    /// absent here has never been validated.
    errors: HashMap<FieldId, &'static str>,
    touched: HashSet<FieldId>,
    view: ViewState,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.data.get(field)
    }

    /// Stored error for a field, `""` when it passed or was never validated
    pub fn error(&self, field: FieldId) -> &'static str {
        self.errors.get(&field).copied().unwrap_or("")
    }

    /// Error to surface in the UI: present only once the field is touched
    pub fn visible_error(&self, field: FieldId) -> Option<&'static str> {
        if !self.is_touched(field) {
            return None;
        }
        match self.error(field) {
            "" => None,
            msg => Some(msg),
        }
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    /// Store a raw value.
    ///
    /// Changing the country always clears the city, even when the new
    /// country lists a city of the same name. A field that is already
    /// touched is revalidated immediately.
    pub fn set_field(&mut self, field: FieldId, value: String) {
        self.data.set(field, value);
        if field == FieldId::Country {
            self.data.set(FieldId::City, String::new());
        }
        if self.is_touched(field) {
            let msg = validate(field, self.data.get(field));
            self.errors.insert(field, msg);
        }
    }

    /// Append one character to a field, with `set_field` semantics
    pub fn push_char(&mut self, field: FieldId, c: char) {
        let mut value = self.data.get(field).to_string();
        value.push(c);
        self.set_field(field, value);
    }

    /// Remove the last character from a field, with `set_field` semantics
    pub fn pop_char(&mut self, field: FieldId) {
        let mut value = self.data.get(field).to_string();
        value.pop();
        self.set_field(field, value);
    }

    /// Mark a field touched and validate its stored value
    pub fn blur_field(&mut self, field: FieldId) {
        self.touched.insert(field);
        let msg = validate(field, self.data.get(field));
        self.errors.insert(field, msg);
    }

    /// True iff every field is non-blank and passes validation
    pub fn is_form_valid(&self) -> bool {
        FieldId::ALL.into_iter().all(|field| {
            let value = self.data.get(field);
            !value.trim().is_empty() && validate(field, value).is_empty()
        })
    }

    /// Attempt submission: touch and validate every field, then switch to
    /// the submitted view iff all of them pass. Returns whether it did.
    pub fn submit(&mut self) -> bool {
        for field in FieldId::ALL {
            self.touched.insert(field);
            let msg = validate(field, self.data.get(field));
            self.errors.insert(field, msg);
        }
        if self.is_form_valid() {
            self.view = ViewState::Submitted;
            true
        } else {
            false
        }
    }

    /// Back to the initial empty editing state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// City options for the currently selected country
    pub fn city_options(&self) -> &'static [&'static str] {
        countries::cities(self.data.get(FieldId::Country))
    }

    /// Phone number prefixed with the selected country's dialing code.
    ///
    /// Raw digits alone when no known country is selected.
    pub fn phone_display(&self) -> String {
        let digits = self.data.get(FieldId::PhoneNumber);
        match countries::dialing_code(self.data.get(FieldId::Country)) {
            "" => digits.to_string(),
            code => format!("{code} {digits}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fill_valid(form: &mut RegistrationForm) {
        form.set_field(FieldId::FirstName, "Asha".to_string());
        form.set_field(FieldId::LastName, "Verma".to_string());
        form.set_field(FieldId::Username, "asha_v".to_string());
        form.set_field(FieldId::Email, "asha@example.com".to_string());
        form.set_field(FieldId::Password, "Passw0rd".to_string());
        form.set_field(FieldId::PhoneNumber, "9876543210".to_string());
        form.set_field(FieldId::Country, "India".to_string());
        form.set_field(FieldId::City, "Mumbai".to_string());
        form.set_field(FieldId::PanNumber, "ABCDE1234F".to_string());
        form.set_field(FieldId::AadharNumber, "123456789012".to_string());
    }

    mod initial_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_empty_and_editing() {
            let form = RegistrationForm::new();
            assert_eq!(form.view(), ViewState::Editing);
            for field in FieldId::ALL {
                assert_eq!(form.value(field), "");
                assert_eq!(form.error(field), "");
                assert!(!form.is_touched(field));
            }
        }

        #[test]
        fn test_empty_form_is_not_valid() {
            assert!(!RegistrationForm::new().is_form_valid());
        }
    }

    mod set_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_stores_raw_value() {
            let mut form = RegistrationForm::new();
            form.set_field(FieldId::Email, "abc".to_string());
            assert_eq!(form.value(FieldId::Email), "abc");
        }

        #[test]
        fn test_untouched_field_has_no_visible_error() {
            let mut form = RegistrationForm::new();
            form.set_field(FieldId::Email, "abc".to_string());
            assert_eq!(form.visible_error(FieldId::Email), None);
        }

        #[test]
        fn test_touched_field_revalidates_on_change() {
            let mut form = RegistrationForm::new();
            form.blur_field(FieldId::Email);
            assert_eq!(form.visible_error(FieldId::Email), Some("Invalid email format"));

            form.set_field(FieldId::Email, "a@b.com".to_string());
            assert_eq!(form.visible_error(FieldId::Email), None);
        }

        #[test]
        fn test_country_change_clears_city() {
            let mut form = RegistrationForm::new();
            form.set_field(FieldId::Country, "India".to_string());
            form.set_field(FieldId::City, "Mumbai".to_string());

            form.set_field(FieldId::Country, "Canada".to_string());
            assert_eq!(form.value(FieldId::City), "");
            assert_eq!(form.value(FieldId::Country), "Canada");
        }

        #[test]
        fn test_city_cleared_even_when_country_set_to_same_value() {
            let mut form = RegistrationForm::new();
            form.set_field(FieldId::Country, "India".to_string());
            form.set_field(FieldId::City, "Delhi".to_string());

            form.set_field(FieldId::Country, "India".to_string());
            assert_eq!(form.value(FieldId::City), "");
        }

        #[test]
        fn test_push_and_pop_char() {
            let mut form = RegistrationForm::new();
            form.push_char(FieldId::Username, 'a');
            form.push_char(FieldId::Username, 'b');
            assert_eq!(form.value(FieldId::Username), "ab");
            form.pop_char(FieldId::Username);
            assert_eq!(form.value(FieldId::Username), "a");
        }
    }

    mod blur {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_marks_touched_and_validates() {
            let mut form = RegistrationForm::new();
            form.blur_field(FieldId::FirstName);
            assert!(form.is_touched(FieldId::FirstName));
            assert_eq!(form.error(FieldId::FirstName), "Must be at least 2 characters");
        }

        #[test]
        fn test_revalidates_already_touched_field() {
            let mut form = RegistrationForm::new();
            form.blur_field(FieldId::FirstName);
            form.set_field(FieldId::FirstName, "Asha".to_string());
            form.blur_field(FieldId::FirstName);
            assert_eq!(form.error(FieldId::FirstName), "");
        }
    }

    mod validity {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_filled_form_is_valid() {
            let mut form = RegistrationForm::new();
            fill_valid(&mut form);
            assert!(form.is_form_valid());
        }

        #[test]
        fn test_blank_field_invalidates() {
            let mut form = RegistrationForm::new();
            fill_valid(&mut form);
            form.set_field(FieldId::City, String::new());
            assert!(!form.is_form_valid());
        }

        #[test]
        fn test_failing_rule_invalidates() {
            let mut form = RegistrationForm::new();
            fill_valid(&mut form);
            form.set_field(FieldId::PanNumber, "abcde1234f".to_string());
            assert!(!form.is_form_valid());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submission_switches_view() {
            let mut form = RegistrationForm::new();
            fill_valid(&mut form);
            assert!(form.submit());
            assert_eq!(form.view(), ViewState::Submitted);
        }

        #[test]
        fn test_invalid_submission_stays_editing() {
            let mut form = RegistrationForm::new();
            assert!(!form.submit());
            assert_eq!(form.view(), ViewState::Editing);
        }

        #[test]
        fn test_invalid_submission_surfaces_every_error() {
            let mut form = RegistrationForm::new();
            form.submit();
            for field in FieldId::ALL {
                assert!(form.is_touched(field));
                assert!(form.visible_error(field).is_some(), "{field} has no error");
            }
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_after_submit_restores_initial_state() {
            let mut form = RegistrationForm::new();
            fill_valid(&mut form);
            assert!(form.submit());

            form.reset();
            assert_eq!(form.view(), ViewState::Editing);
            for field in FieldId::ALL {
                assert_eq!(form.value(field), "");
                assert_eq!(form.error(field), "");
                assert!(!form.is_touched(field));
            }
        }

        #[test]
        fn test_reset_clears_partial_input() {
            let mut form = RegistrationForm::new();
            form.set_field(FieldId::Email, "abc".to_string());
            form.blur_field(FieldId::Email);

            form.reset();
            assert_eq!(form.value(FieldId::Email), "");
            assert_eq!(form.visible_error(FieldId::Email), None);
        }
    }

    mod lookups {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_city_options_follow_country() {
            let mut form = RegistrationForm::new();
            assert!(form.city_options().is_empty());

            form.set_field(FieldId::Country, "Australia".to_string());
            assert_eq!(form.city_options()[0], "Sydney");
        }

        #[test]
        fn test_phone_display_with_country() {
            let mut form = RegistrationForm::new();
            form.set_field(FieldId::Country, "India".to_string());
            form.set_field(FieldId::PhoneNumber, "9876543210".to_string());
            assert_eq!(form.phone_display(), "+91 9876543210");
        }

        #[test]
        fn test_phone_display_without_country() {
            let mut form = RegistrationForm::new();
            form.set_field(FieldId::PhoneNumber, "9876543210".to_string());
            assert_eq!(form.phone_display(), "9876543210");
        }
    }

    mod export {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_serializes_with_wire_names() {
            let mut form = RegistrationForm::new();
            fill_valid(&mut form);
            let json = serde_json::to_value(form.data()).unwrap();
            assert_eq!(json["firstName"], "Asha");
            assert_eq!(json["aadharNumber"], "123456789012");
        }

        #[test]
        fn test_password_is_never_serialized() {
            let mut form = RegistrationForm::new();
            fill_valid(&mut form);
            let json = serde_json::to_value(form.data()).unwrap();
            assert!(json.get("password").is_none());
        }
    }
}

// =============================================================================
// Contact Form Engine
// =============================================================================
//
// One instance per `.contact-form`. Holds the current field values and runs
// the shared contact validator on submit:
//
//   - set_field(name, value)  copy a value in (the DOM layer does this from
//                             FormData at submit time)
//   - submit()                validate everything; true means show the success
//                             banner and reset the form
//   - reset()                 clear values after a successful submit
//
// The page only ever shows a single generic failure banner. The first failing
// rule is kept in `last_error` for logging, never shown to the user.
//
// =============================================================================

use std::collections::HashMap;

use seoblog_shared::validation::validate_contact;
use seoblog_shared::CONTACT_FIELDS;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ContactFormEngine {
    /// Current value for each field seen so far.
    values: HashMap<String, String>,

    /// First validation failure from the last submit, "" if it passed.
    last_error: String,

    submit_count: u32,
    data_version: u32,
}

#[wasm_bindgen]
impl ContactFormEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ContactFormEngine {
        ContactFormEngine {
            values: HashMap::new(),
            last_error: String::new(),
            submit_count: 0,
            data_version: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Field mutation
    // -------------------------------------------------------------------------

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
        self.data_version += 1;
    }

    /// Forget a field, so it counts as missing on the next submit.
    pub fn clear_field(&mut self, name: &str) {
        if self.values.remove(name).is_some() {
            self.data_version += 1;
        }
    }

    pub fn field_value(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Submit / Reset
    // -------------------------------------------------------------------------

    /// Validate the whole form. Returns true if it may be submitted.
    pub fn submit(&mut self) -> bool {
        self.submit_count += 1;
        self.data_version += 1;
        match validate_contact(&self.values) {
            Ok(()) => {
                self.last_error.clear();
                true
            }
            Err(msg) => {
                self.last_error = msg;
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.last_error.clear();
        self.data_version += 1;
    }

    pub fn last_error(&self) -> String {
        self.last_error.clone()
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn data_version(&self) -> u32 {
        self.data_version
    }
}

impl ContactFormEngine {
    /// Names of the fields the form requires, in validation order.
    pub fn required_fields() -> &'static [&'static str] {
        &CONTACT_FIELDS
    }
}

impl Default for ContactFormEngine {
    fn default() -> Self {
        ContactFormEngine::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormEngine {
        let mut form = ContactFormEngine::new();
        form.set_field("name", "A");
        form.set_field("email", "a@b.com");
        form.set_field("message", "hi");
        form
    }

    #[test]
    fn test_submit_valid() {
        let mut form = filled();
        assert!(form.submit());
        assert_eq!(form.last_error(), "");
        assert_eq!(form.submit_count(), 1);
    }

    #[test]
    fn test_submit_bad_email_keeps_reason() {
        let mut form = filled();
        form.set_field("email", "bad");
        assert!(!form.submit());
        assert!(form.last_error().starts_with("email:"));
    }

    #[test]
    fn test_missing_field_fails() {
        let mut form = filled();
        form.clear_field("message");
        assert!(!form.submit());
        assert!(form.last_error().starts_with("message:"));
    }

    #[test]
    fn test_reset_clears_values() {
        let mut form = filled();
        assert!(form.submit());
        form.reset();
        assert_eq!(form.field_value("name"), "");
        assert!(!form.submit());
    }

    #[test]
    fn test_failed_then_fixed() {
        let mut form = filled();
        form.set_field("name", "   ");
        assert!(!form.submit());
        form.set_field("name", "Alice");
        assert!(form.submit());
        assert_eq!(form.last_error(), "");
        assert_eq!(form.submit_count(), 2);
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(ContactFormEngine::required_fields(), &["name", "email", "message"]);
    }
}

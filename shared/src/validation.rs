// =============================================================================
// Contact Form Validation: Chainable Validator Builder
// =============================================================================
//
// Two ways to validate a field value:
//
//   1. CHAINABLE BUILDER:
//
//        let result = validate(value).required().email().finish();
//
//      Once any rule in the chain fails, later rules are skipped. `.finish()`
//      returns Ok(()) or Err(msg) with the first failure.
//
//   2. STANDALONE FUNCTIONS: `required(value)?; email(value)?;`
//
// `validate_contact` applies the site's contact form rules to a whole
// submission: name, email and message are required, and email must look like
// `local@domain.tld`. The UI only needs pass/fail; the message is for logs.
//
// =============================================================================

use std::collections::HashMap;

use crate::CONTACT_FIELDS;

// -----------------------------------------------------------------------------
// Chainable Validator
// -----------------------------------------------------------------------------

/// A chainable validator that keeps the first error encountered.
pub struct Validator<'a> {
    value: &'a str,
    result: Result<(), String>,
}

/// Start a validation chain for the given value.
///
/// # Example
///
/// ```
/// use seoblog_shared::validation::validate;
///
/// let result = validate("hello@example.com")
///     .required()
///     .email()
///     .finish();
/// assert!(result.is_ok());
/// ```
pub fn validate(value: &str) -> Validator<'_> {
    Validator {
        value,
        result: Ok(()),
    }
}

impl<'a> Validator<'a> {
    /// Fails if the value is empty after trimming.
    pub fn required(self) -> Self {
        if self.result.is_err() {
            return self;
        }
        match required(self.value) {
            Ok(()) => self,
            Err(msg) => self.fail(msg),
        }
    }

    /// Fails unless the value looks like `local@domain.tld`.
    pub fn email(self) -> Self {
        if self.result.is_err() {
            return self;
        }
        match email(self.value) {
            Ok(()) => self,
            Err(msg) => self.fail(msg),
        }
    }

    /// Consume the validator and return the accumulated result.
    pub fn finish(self) -> Result<(), String> {
        self.result
    }

    fn fail(self, msg: String) -> Self {
        Validator {
            value: self.value,
            result: Err(msg),
        }
    }
}

// =============================================================================
// Standalone functions
// =============================================================================

/// Fails if the value is empty after trimming.
pub fn required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("This field is required".to_string());
    }
    Ok(())
}

/// Email shape check: no whitespace, exactly one '@' with a non-empty local
/// part, and a '.' inside the domain with characters on both sides.
pub fn email(value: &str) -> Result<(), String> {
    if !is_email(value) {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

/// Whitespace as a browser regex `\s` sees it: Unicode White_Space minus
/// NEL, plus the BOM.
fn is_regex_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn is_email(value: &str) -> bool {
    if value.chars().any(is_regex_space) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate a contact form submission. A missing field counts as blank.
pub fn validate_contact(fields: &HashMap<String, String>) -> Result<(), String> {
    for name in CONTACT_FIELDS {
        let value = fields.get(name).map(String::as_str).unwrap_or("");
        validate(value)
            .required()
            .finish()
            .map_err(|msg| format!("{name}: {msg}"))?;
    }

    let address = fields.get("email").map(String::as_str).unwrap_or("");
    validate(address)
        .email()
        .finish()
        .map_err(|msg| format!("email: {msg}"))
}

/// Boolean form of [`validate_contact`].
pub fn is_valid_contact(fields: &HashMap<String, String>) -> bool {
    validate_contact(fields).is_ok()
}

// =============================================================================
// Tests
// =============================================================================

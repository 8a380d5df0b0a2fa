//! Built-in validators and error messages shared by the preset field kinds.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::FieldConfigError;

/// Ten digits, the first one between 6 and 9.
pub const PHONE_VALIDATION_REGEX: &str = "[6-9]{1}\\d{9}$";

/// `\d` only covers ASCII digits here.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    build_full_match(PHONE_VALIDATION_REGEX, false).expect("phone pattern is a valid regex")
});

/// Compiles `pattern` so that it must match the whole input.
pub fn compile_full_match(pattern: &str) -> Result<Regex, FieldConfigError> {
    build_full_match(pattern, true)
}

fn build_full_match(pattern: &str, unicode: bool) -> Result<Regex, FieldConfigError> {
    RegexBuilder::new(&format!("^(?:{pattern})$"))
        .unicode(unicode)
        .build()
        .map_err(|err| FieldConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })
}

pub fn is_phone_valid(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

pub fn field_valid(value: &str) -> bool {
    !value.is_empty()
}

/// Default `(text, pattern)` matcher; an uncompilable pattern never matches.
pub fn regex_matches(text: &str, pattern: &str) -> bool {
    compile_full_match(pattern)
        .map(|regex| regex.is_match(text))
        .unwrap_or(false)
}

pub fn common_error_message(label: Option<&str>) -> String {
    match label {
        Some(label) => format!("Please enter valid {}", label.to_lowercase()),
        None => "Please enter valid Input".to_string(),
    }
}

use std::fmt;

/// Raised while building a field from code or from a form definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldConfigError {
    InvalidPattern { pattern: String, message: String },
    MissingPattern { field: String },
    DuplicateField { field: String },
}

impl fmt::Display for FieldConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldConfigError::InvalidPattern { pattern, message } => {
                write!(f, "invalid pattern '{pattern}': {message}")
            }
            FieldConfigError::MissingPattern { field } => {
                write!(f, "field '{field}' is a regex field but has no pattern")
            }
            FieldConfigError::DuplicateField { field } => {
                write!(f, "field '{field}' is defined more than once")
            }
        }
    }
}

impl std::error::Error for FieldConfigError {}

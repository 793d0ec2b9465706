use serde::Serialize;

/// A validation message attached to a single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Checks that a field is non-empty and its length (in chars) lies in `[min, max]`
///
/// An empty value only reports the required message.
pub fn check_length(field: &'static str, value: &str, min: usize, max: usize) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::new(field, REQUIRED_MESSAGE));
    }

    let len = value.chars().count();
    if len < min || len > max {
        return Some(FieldError::new(
            field,
            format!("Field must be between {min} and {max} characters long."),
        ));
    }

    None
}

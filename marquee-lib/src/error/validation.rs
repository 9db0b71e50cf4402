//! Validation error types

/// A single field that failed dialog validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    /// The field that failed validation.
    pub field: String,
    /// Human-readable validation message.
    pub message: String,
}

impl FieldValidationError {
    /// Creates a new field validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field failure collected while validating a dialog draft.
///
/// Submission is blocked while any failure is present; the messages are
/// meant to be shown to the user as a transient notification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", summary(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldValidationError>,
}

impl ValidationError {
    /// Returns the failure for a field, if that field failed.
    pub fn field(&self, field: &str) -> Option<&FieldValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Returns `true` if the given field failed.
    pub fn has_field(&self, field: &str) -> bool {
        self.field(field).is_some()
    }
}

fn summary(errors: &[FieldValidationError]) -> String {
    let parts: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!("validation failed: {}", parts.join("; "))
}

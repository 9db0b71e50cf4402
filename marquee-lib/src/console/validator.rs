//! Fluent validation for edit dialogs.

use email_address::EmailAddress;

use crate::error::FieldValidationError;
use crate::error::ValidationError;

/// Collects field failures for a dialog draft.
///
/// Each field reports only its first failing rule.
///
/// # Example
///
/// ```
/// use marquee_lib::console::Validator;
///
/// let result = Validator::new()
///     .field("company", "")
///         .required("Company is required")
///     .field("contact_email", "ops@example.com")
///         .required("Contact email is required")
///         .email("Enter a valid email address")
///     .validate();
///
/// let err = result.unwrap_err();
/// assert!(err.has_field("company"));
/// assert!(!err.has_field("contact_email"));
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldValidationError>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start validating a field.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            name: name.into(),
            value: value.into(),
            error: None,
        }
    }

    /// Finish validation.
    pub fn validate(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

/// Rules for one field.
#[derive(Debug)]
pub struct FieldBuilder {
    validator: Validator,
    name: String,
    value: String,
    error: Option<String>,
}

impl FieldBuilder {
    /// Add a custom rule; `check` returns `true` when the value is valid.
    pub fn rule(mut self, check: impl FnOnce(&str) -> bool, msg: impl Into<String>) -> Self {
        if self.error.is_none() && !check(&self.value) {
            self.error = Some(msg.into());
        }
        self
    }

    /// The value must contain something other than whitespace.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// The value must not exceed `max` characters.
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(|v| v.chars().count() <= max, msg)
    }

    /// A non-blank value must be an email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(|v| v.trim().is_empty() || EmailAddress::is_valid(v.trim()), msg)
    }

    /// A non-blank value must parse as a whole number of at least `min`.
    pub fn min_number(self, min: i64, msg: impl Into<String>) -> Self {
        self.rule(
            |v| v.trim().is_empty() || v.trim().parse::<i64>().is_ok_and(|n| n >= min),
            msg,
        )
    }

    /// Move on to the next field.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        self.finalize().field(name, value)
    }

    /// Finish validation.
    pub fn validate(self) -> Result<(), ValidationError> {
        self.finalize().validate()
    }

    fn finalize(self) -> Validator {
        let mut validator = self.validator;
        if let Some(message) = self.error {
            validator
                .errors
                .push(FieldValidationError::new(self.name, message));
        }
        validator
    }
}

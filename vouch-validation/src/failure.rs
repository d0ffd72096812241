// Boundary escalation

use crate::errors::ValidationErrors;
use crate::validator::Validator;
use thiserror::Error;

/// Raised when an invalid validator crosses a trust boundary.
///
/// Carries the originating validator, so a handler can report every
/// accumulated error rather than only the first.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ValidationFailure {
    message: String,
    validator: Option<Validator>,
}

impl ValidationFailure {
    /// A failure with a message but no validator attached.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            validator: None,
        }
    }

    pub fn with_validator(validator: Validator, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            validator: Some(validator),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    /// Errors of the attached validator; empty when none is attached.
    pub fn errors(&self) -> &ValidationErrors {
        static EMPTY: ValidationErrors = ValidationErrors::new();
        self.validator.as_ref().map_or(&EMPTY, Validator::errors)
    }

    pub fn into_validator(self) -> Option<Validator> {
        self.validator
    }

    /// JSON body with the message and every error.
    pub fn to_json(&self) -> serde_json::Value {
        let mut body = self.errors().to_json();
        body["message"] = serde_json::Value::String(self.message.clone());
        body
    }
}

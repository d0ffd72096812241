// Validator engine

use crate::errors::{ValidationError, ValidationErrors};
use crate::failure::ValidationFailure;
use crate::messages::{MessageContainer, kinds};
use once_cell::sync::Lazy;
use std::sync::Arc;
use vouch_log::{debug, trace};

static DEFAULT_MESSAGES: Lazy<Arc<MessageContainer>> =
    Lazy::new(|| Arc::new(MessageContainer::default()));

/// Accumulating, chainable validator.
///
/// Every check returns `&mut Self`, so a whole set of rules reads as one
/// chain. A failing check never short-circuits the chain; it appends a
/// [`ValidationError`] and the next check runs as usual. Use one validator per
/// validation session: errors are never removed.
///
/// ```
/// use vouch_validation::Validator;
///
/// let name = "bob";
/// let mut validator = Validator::new();
/// validator
///     .is_named("name", || name.len() >= 5)
///     .with_message("Name must be at least 5 characters long")
///     .is_not_named("name", || name.contains("bob"))
///     .with_message("Name cannot contain bob");
///
/// assert!(!validator.is_valid());
/// assert_eq!(validator.errors()[1].message(), "Name cannot contain bob");
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    errors: ValidationErrors,
    messages: Arc<MessageContainer>,
    // whether the most recent check appended an error
    last_failed: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Validator using the default message catalog.
    pub fn new() -> Self {
        Self::with_messages(Arc::clone(&DEFAULT_MESSAGES))
    }

    /// Validator using an injected catalog, e.g. a localized one.
    pub fn with_messages(messages: impl Into<Arc<MessageContainer>>) -> Self {
        Self {
            errors: ValidationErrors::new(),
            messages: messages.into(),
            last_failed: false,
        }
    }

    /// All errors recorded so far, in the order they were added.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// True when no check has failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The catalog used for default messages.
    pub fn messages(&self) -> &MessageContainer {
        &self.messages
    }

    /// Errors recorded under `name`, in insertion order.
    pub fn errors_by_name(&self, name: &str) -> Vec<&ValidationError> {
        self.errors.by_name(name)
    }

    /// First error per distinct name, in first-seen order.
    pub fn unique_errors(&self) -> Vec<&ValidationError> {
        self.errors.unique()
    }

    /// Consume the validator, keeping only its errors.
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    /// Append an error unconditionally.
    ///
    /// Every failing check ends up here; custom rules may call it directly.
    pub fn add_error(&mut self, name: impl Into<String>, message: impl Into<String>) -> &mut Self {
        let error = ValidationError::new(name, message);
        trace!(
            target: "vouch::validator",
            "error #{} appended: name={:?} message={:?}",
            self.errors.len(),
            error.name(),
            error.message()
        );
        self.errors.push(error);
        self.last_failed = true;
        self
    }

    /// Replace the message of the most recently appended error.
    ///
    /// Applies to the check right before it: when that check passed there is
    /// nothing to rewrite and earlier errors keep their messages. With no
    /// errors at all it does nothing.
    pub fn with_message(&mut self, message: impl Into<String>) -> &mut Self {
        if !self.last_failed {
            return self;
        }
        if let Some(last) = self.errors.last_mut() {
            let message = message.into();
            trace!(
                target: "vouch::validator",
                "message overridden for {:?}: {:?}",
                last.name(),
                message
            );
            last.set_message(message);
        }
        self
    }

    /// Format the catalog template for `kind` with the field name and `bounds`.
    pub fn default_message(&self, kind: &str, name: &str, bounds: &[&dyn std::fmt::Display]) -> String {
        let mut args: Vec<&dyn std::fmt::Display> = Vec::with_capacity(bounds.len() + 1);
        args.push(&name);
        args.extend_from_slice(bounds);
        self.messages.format(kind, &args)
    }

    /// Record a failure under `name` when `passed` is false, using the
    /// catalog template for `kind`.
    ///
    /// The building block for rules: the template is only formatted when the
    /// check fails.
    pub fn check(
        &mut self,
        kind: &str,
        name: &str,
        passed: bool,
        bounds: &[&dyn std::fmt::Display],
    ) -> &mut Self {
        self.outcome(passed, name, |v| v.default_message(kind, name, bounds))
    }

    fn outcome<M>(&mut self, passed: bool, name: &str, message: M) -> &mut Self
    where
        M: FnOnce(&Self) -> String,
    {
        if passed {
            self.last_failed = false;
            self
        } else {
            let message = message(&*self);
            self.add_error(name, message)
        }
    }

    // ------------------------------------------------------------------
    // is
    // ------------------------------------------------------------------

    /// Fail when `condition` returns false.
    pub fn is<F>(&mut self, condition: F) -> &mut Self
    where
        F: FnOnce() -> bool,
    {
        self.is_named("", condition)
    }

    /// Like [`is`](Self::is), recording the failure under `name`.
    pub fn is_named<F>(&mut self, name: &str, condition: F) -> &mut Self
    where
        F: FnOnce() -> bool,
    {
        let passed = condition();
        self.check(kinds::IS, name, passed, &[])
    }

    /// Like [`is_named`](Self::is_named) with an explicit message.
    pub fn is_with_message<F>(
        &mut self,
        name: &str,
        condition: F,
        message: impl Into<String>,
    ) -> &mut Self
    where
        F: FnOnce() -> bool,
    {
        let passed = condition();
        self.outcome(passed, name, |_| message.into())
    }

    // ------------------------------------------------------------------
    // is_not
    // ------------------------------------------------------------------

    /// Fail when `condition` returns true.
    pub fn is_not<F>(&mut self, condition: F) -> &mut Self
    where
        F: FnOnce() -> bool,
    {
        self.is_not_named("", condition)
    }

    /// Like [`is_not`](Self::is_not), recording the failure under `name`.
    pub fn is_not_named<F>(&mut self, name: &str, condition: F) -> &mut Self
    where
        F: FnOnce() -> bool,
    {
        let passed = !condition();
        self.check(kinds::IS_NOT, name, passed, &[])
    }

    /// Like [`is_not_named`](Self::is_not_named) with an explicit message.
    pub fn is_not_with_message<F>(
        &mut self,
        name: &str,
        condition: F,
        message: impl Into<String>,
    ) -> &mut Self
    where
        F: FnOnce() -> bool,
    {
        let passed = !condition();
        self.outcome(passed, name, |_| message.into())
    }

    // ------------------------------------------------------------------
    // is_not_null
    // ------------------------------------------------------------------

    /// Fail when `value` is `None`.
    pub fn is_not_null<T>(&mut self, value: Option<T>) -> &mut Self {
        self.is_not_null_named("", value)
    }

    /// Like [`is_not_null`](Self::is_not_null), recording the failure under `name`.
    pub fn is_not_null_named<T>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        self.check(kinds::IS_NOT_NULL, name, value.is_some(), &[])
    }

    /// Like [`is_not_null_named`](Self::is_not_null_named) with an explicit message.
    pub fn is_not_null_with_message<T>(
        &mut self,
        name: &str,
        value: Option<T>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.outcome(value.is_some(), name, |_| message.into())
    }

    // ------------------------------------------------------------------
    // escalation
    // ------------------------------------------------------------------

    /// Turn an invalid validator into an error at a trust boundary.
    ///
    /// Returns the validator untouched when no check failed.
    pub fn into_result(self, message: impl Into<String>) -> Result<Self, ValidationFailure> {
        if self.is_valid() {
            Ok(self)
        } else {
            let failure = ValidationFailure::with_validator(self, message);
            debug!(
                target: "vouch::validator",
                "validation failed with {} error(s): {}",
                failure.errors().len(),
                failure.message()
            );
            Err(failure)
        }
    }
}

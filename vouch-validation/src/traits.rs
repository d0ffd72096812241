// Validation traits

use crate::failure::ValidationFailure;
use crate::messages::MessageContainer;
use crate::validator::Validator;
use std::sync::Arc;

/// Types that know how to validate themselves.
///
/// Implement [`validate`](Validate::validate) as a chain of checks; the
/// provided methods run it in a fresh validator, one per session.
///
/// ```
/// use vouch_validation::{StringRules, Validate, Validator};
///
/// struct SignUp {
///     email: String,
///     nickname: Option<String>,
/// }
///
/// impl Validate for SignUp {
///     fn validate(&self, validator: &mut Validator) {
///         validator
///             .is_email("email", self.email.as_str())
///             .is_not_null_named("nickname", self.nickname.as_ref());
///     }
/// }
///
/// let form = SignUp { email: "a@b".into(), nickname: None };
/// let failure = form.check().unwrap_err();
/// assert_eq!(failure.errors().len(), 2);
/// ```
pub trait Validate {
    /// Record every check for `self` on `validator`.
    fn validate(&self, validator: &mut Validator);

    /// Run the checks with the default catalog.
    fn validator(&self) -> Validator {
        let mut validator = Validator::new();
        self.validate(&mut validator);
        validator
    }

    /// Run the checks and escalate if any failed.
    fn check(&self) -> Result<(), ValidationFailure> {
        self.validator()
            .into_result(format!("{} failed validation", std::any::type_name::<Self>()))
            .map(|_| ())
    }

    /// Like [`check`](Validate::check), with an injected catalog.
    fn check_with(&self, messages: Arc<MessageContainer>) -> Result<(), ValidationFailure> {
        let mut validator = Validator::with_messages(messages);
        self.validate(&mut validator);
        validator
            .into_result(format!("{} failed validation", std::any::type_name::<Self>()))
            .map(|_| ())
    }
}

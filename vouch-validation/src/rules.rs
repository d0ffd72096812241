// Built-in string rules

use crate::messages::kinds;
use crate::predicates;
use crate::validator::Validator;

/// String rules layered on [`Validator`].
///
/// Each rule evaluates a predicate and, on failure, records an error under
/// `name` with the catalog template for its kind. Values are optional: a
/// `None` value fails every rule here, so nullable inputs need no separate
/// unwrapping. Follow any rule with
/// [`with_message`](Validator::with_message) to override its message.
///
/// Downstream crates add rules the same way: define a trait, implement it
/// for `Validator`, and call [`Validator::check`] with a new kind.
///
/// ```
/// use vouch_validation::{StringRules, Validator};
///
/// let mut validator = Validator::new();
/// validator
///     .is_email("email", "user@example.com")
///     .is_min_length("name", "al", 3)
///     .with_message("Name is too short");
///
/// assert_eq!(validator.errors().len(), 1);
/// assert_eq!(validator.errors()[0].message(), "Name is too short");
/// ```
pub trait StringRules {
    fn is_email<'a>(&mut self, name: &str, value: impl Into<Option<&'a str>>) -> &mut Self;

    /// Fails when `value` does not match the regular expression `pattern`,
    /// or when `pattern` does not compile.
    fn is_regex<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
        pattern: &str,
    ) -> &mut Self;

    /// Fails unless `value` and `expected` are both present and equal.
    fn is_match<'a, 'b>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
        expected: impl Into<Option<&'b str>>,
    ) -> &mut Self;

    fn is_min_length<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
        min: usize,
    ) -> &mut Self;

    fn is_max_length<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
        max: usize,
    ) -> &mut Self;

    fn is_exact_length<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
        length: usize,
    ) -> &mut Self;

    fn is_between_length<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
        min: usize,
        max: usize,
    ) -> &mut Self;

    fn is_password<'a>(&mut self, name: &str, value: impl Into<Option<&'a str>>) -> &mut Self;

    fn is_not_null_or_empty<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
    ) -> &mut Self;

    fn is_not_null_or_whitespace<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
    ) -> &mut Self;
}

impl StringRules for Validator {
    fn is_email<'a>(&mut self, name: &str, value: impl Into<Option<&'a str>>) -> &mut Self {
        let passed = value.into().is_some_and(predicates::is_email);
        self.check(kinds::IS_EMAIL, name, passed, &[])
    }

    fn is_regex<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
        pattern: &str,
    ) -> &mut Self {
        let passed = value
            .into()
            .is_some_and(|v| predicates::is_regex(v, pattern));
        self.check(kinds::IS_REGEX, name, passed, &[&pattern])
    }

    fn is_match<'a, 'b>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
        expected: impl Into<Option<&'b str>>,
    ) -> &mut Self {
        let passed = matches!((value.into(), expected.into()), (Some(v), Some(e)) if v == e);
        self.check(kinds::IS_MATCH, name, passed, &[])
    }

    fn is_min_length<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
        min: usize,
    ) -> &mut Self {
        let passed = value
            .into()
            .is_some_and(|v| predicates::is_min_length(v, min));
        self.check(kinds::IS_MIN_LENGTH, name, passed, &[&min])
    }

    fn is_max_length<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
        max: usize,
    ) -> &mut Self {
        let passed = value
            .into()
            .is_some_and(|v| predicates::is_max_length(v, max));
        self.check(kinds::IS_MAX_LENGTH, name, passed, &[&max])
    }

    fn is_exact_length<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
        length: usize,
    ) -> &mut Self {
        let passed = value
            .into()
            .is_some_and(|v| predicates::is_exact_length(v, length));
        self.check(kinds::IS_EXACT_LENGTH, name, passed, &[&length])
    }

    fn is_between_length<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
        min: usize,
        max: usize,
    ) -> &mut Self {
        let passed = value
            .into()
            .is_some_and(|v| predicates::is_between_length(v, min, max));
        self.check(kinds::IS_BETWEEN_LENGTH, name, passed, &[&min, &max])
    }

    fn is_password<'a>(&mut self, name: &str, value: impl Into<Option<&'a str>>) -> &mut Self {
        let passed = value.into().is_some_and(predicates::is_password);
        self.check(kinds::IS_PASSWORD, name, passed, &[])
    }

    fn is_not_null_or_empty<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
    ) -> &mut Self {
        let passed = value.into().is_some_and(|v| !v.is_empty());
        self.check(kinds::IS_NOT_NULL_OR_EMPTY, name, passed, &[])
    }

    fn is_not_null_or_whitespace<'a>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'a str>>,
    ) -> &mut Self {
        let passed = value.into().is_some_and(|v| !predicates::is_blank(v));
        self.check(kinds::IS_NOT_NULL_OR_WHITESPACE, name, passed, &[])
    }
}

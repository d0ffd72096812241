// Validation errors

use serde::Serialize;
use std::fmt;
use std::ops::Index;

/// A single failed check: the name it was reported under and a readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    name: String,
    message: String,
}

impl ValidationError {
    pub(crate) fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Field or rule name the error was recorded under. May be empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn set_message(&mut self, message: String) {
        self.message = message;
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Ordered collection of validation errors.
///
/// Insertion order is preserved and meaningful; nothing is ever removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationErrors {
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub(crate) fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut ValidationError> {
        self.errors.last_mut()
    }

    pub fn get(&self, index: usize) -> Option<&ValidationError> {
        self.errors.get(index)
    }

    pub fn last(&self) -> Option<&ValidationError> {
        self.errors.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Errors recorded under exactly `name`, in insertion order.
    pub fn by_name(&self, name: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.name == name).collect()
    }

    /// The first error recorded for each distinct name, in first-seen order.
    pub fn unique(&self) -> Vec<&ValidationError> {
        let mut seen = std::collections::HashSet::new();
        self.errors
            .iter()
            .filter(|e| seen.insert(e.name.as_str()))
            .collect()
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// JSON body suitable for an error response.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "name": e.name,
                    "message": e.message,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl Index<usize> for ValidationErrors {
    type Output = ValidationError;

    fn index(&self, index: usize) -> &Self::Output {
        &self.errors[index]
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValidationErrors {
        ValidationErrors::from(vec![
            ValidationError::new("email", "first email"),
            ValidationError::new("name", "first name"),
            ValidationError::new("email", "second email"),
            ValidationError::new("", "anonymous"),
            ValidationError::new("name", "second name"),
        ])
    }

    #[test]
    fn test_new_error_accepts_empty_strings() {
        let error = ValidationError::new("", "");
        assert_eq!(error.name(), "");
        assert_eq!(error.message(), "");
    }

    #[test]
    fn test_new_is_const_and_matches_default() {
        static NONE: ValidationErrors = ValidationErrors::new();
        assert!(NONE.is_empty());
        assert_eq!(ValidationErrors::default(), NONE);
    }

    #[test]
    fn test_by_name_preserves_order() {
        let errors = sample();
        let emails = errors.by_name("email");
        assert_eq!(emails.len(), 2);
        assert_eq!(emails[0].message(), "first email");
        assert_eq!(emails[1].message(), "second email");
        assert!(errors.by_name("missing").is_empty());
        assert!(errors.by_name("Email").is_empty());
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        let errors = sample();
        let unique = errors.unique();
        let messages: Vec<_> = unique.iter().map(|e| e.message()).collect();
        assert_eq!(messages, vec!["first email", "first name", "anonymous"]);
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ValidationError::new("email", "is invalid").to_string(),
            "email: is invalid"
        );
        assert_eq!(ValidationError::new("", "is invalid").to_string(), "is invalid");

        let errors = ValidationErrors::from(vec![
            ValidationError::new("a", "one"),
            ValidationError::new("b", "two"),
        ]);
        assert_eq!(errors.to_string(), "a: one\nb: two\n");
    }

    #[test]
    fn test_to_json() {
        let json = sample().to_json();
        let list = json["errors"].as_array().unwrap();
        assert_eq!(list.len(), 5);
        assert_eq!(list[0]["name"], "email");
        assert_eq!(list[3]["message"], "anonymous");
    }

    #[test]
    fn test_index_and_last() {
        let errors = sample();
        assert_eq!(errors[1].name(), "name");
        assert_eq!(errors.last().map(|e| e.message()), Some("second name"));
        assert!(errors.get(5).is_none());
    }
}

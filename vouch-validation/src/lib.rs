//! Fluent validation engine for vouch
//!
//! A [`Validator`] accumulates errors instead of stopping at the first
//! failure. Checks chain, each one may be followed by
//! [`with_message`](Validator::with_message) to override what it reports, and
//! the caller reads [`is_valid`](Validator::is_valid) and
//! [`errors`](Validator::errors) at the end.
//!
//! # Examples
//!
//! ## Chaining checks
//!
//! ```
//! use vouch_validation::Validator;
//!
//! let name = "hello";
//! let mut validator = Validator::new();
//! validator
//!     .is_not_null_named("name", Some(name))
//!     .is_not(|| name.contains("abc"))
//!     .with_message("Name must not contain abc")
//!     .is(|| name.contains("bob"))
//!     .with_message("Name must contain bob");
//!
//! assert_eq!(validator.errors().len(), 1);
//! assert_eq!(validator.errors()[0].message(), "Name must contain bob");
//! ```
//!
//! ## Built-in rules
//!
//! ```
//! use vouch_validation::{StringRules, Validator};
//!
//! let emails = ["v@v.co", "@v.com", "valid@t.com", "v@.co", "valid@test.com", "v@v"];
//!
//! let mut validator = Validator::new();
//! for (i, email) in emails.iter().enumerate() {
//!     validator.is_email("email", *email).with_message(format!("Message {}", i));
//! }
//!
//! assert_eq!(validator.errors().messages(), vec!["Message 1", "Message 3", "Message 5"]);
//! ```
//!
//! ## Localized messages
//!
//! ```
//! use std::sync::Arc;
//! use vouch_validation::{MessageContainer, Validator, kinds};
//!
//! let french = Arc::new(MessageContainer::new().with(kinds::IS_NOT_NULL, "'{0}' est obligatoire."));
//!
//! let mut validator = Validator::with_messages(Arc::clone(&french));
//! validator.is_not_null_named("nom", None::<&str>);
//! assert_eq!(validator.errors()[0].message(), "'nom' est obligatoire.");
//! ```
//!
//! ## Escalating at a boundary
//!
//! ```
//! use vouch_validation::Validator;
//!
//! let mut validator = Validator::new();
//! validator.is_named("age", || -3 >= 0);
//!
//! let failure = validator.into_result("user payload rejected").unwrap_err();
//! assert_eq!(failure.to_string(), "user payload rejected");
//! assert_eq!(failure.errors().len(), 1);
//! ```

mod errors;
mod failure;
mod messages;
pub mod predicates;
mod rules;
mod traits;
mod validator;

pub use errors::*;
pub use failure::*;
pub use messages::*;
pub use rules::*;
pub use traits::*;
pub use validator::*;

// Vouch - fluent, accumulating validation for Rust
//
// This crate bundles the validation engine with its logging utilities.
// Checks chain on a single validator, every failure is collected, and each
// failure's message can be overridden right where the check is written.

// Re-export the validation engine
pub use vouch_validation::*;

// Re-export logging
pub use vouch_log as log;

/// Read logging configuration from the environment and route the `log`
/// facade through vouch's logger.
///
/// Safe to call more than once; later calls leave the first logger in place.
pub fn init_logging() {
    vouch_log::init();
    if vouch_log::install().is_err() {
        vouch_log::debug!(target: "vouch", "a global logger is already installed");
    }
}

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        MessageContainer,
        StringRules,
        Validate,
        ValidationError,
        ValidationErrors,
        ValidationFailure,
        Validator,
        kinds,
    };
}

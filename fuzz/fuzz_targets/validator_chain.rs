//! Fuzz target for validator chains.
//!
//! Replays arbitrary sequences of checks and message overrides and checks
//! that exactly the failing checks were recorded.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vouch_validation::{StringRules, Validator};

#[derive(Debug, Arbitrary)]
enum Step {
    Is { name: String, pass: bool },
    IsNot { name: String, hit: bool },
    IsNotNull { name: String, value: Option<String> },
    Email { name: String, value: Option<String> },
    MinLength { value: String, min: u8 },
    WithMessage(String),
}

fuzz_target!(|steps: Vec<Step>| {
    let mut validator = Validator::new();
    let mut expected = 0usize;
    let mut last_message: Option<String> = None;
    let mut last_failed = false;

    for step in &steps {
        let before = validator.errors().len();
        match step {
            Step::Is { name, pass } => {
                validator.is_named(name, || *pass);
            }
            Step::IsNot { name, hit } => {
                validator.is_not_named(name, || *hit);
            }
            Step::IsNotNull { name, value } => {
                validator.is_not_null_named(name, value.as_ref());
            }
            Step::Email { name, value } => {
                validator.is_email(name, value.as_deref());
            }
            Step::MinLength { value, min } => {
                validator.is_min_length("value", value.as_str(), usize::from(*min));
            }
            Step::WithMessage(message) => {
                validator.with_message(message.clone());
                if last_failed {
                    last_message = Some(message.clone());
                }
                continue;
            }
        }

        let after = validator.errors().len();
        assert!(after == before || after == before + 1);
        last_failed = after > before;
        if last_failed {
            expected += 1;
            last_message = None;
        }
    }

    assert_eq!(validator.errors().len(), expected);
    assert_eq!(validator.is_valid(), expected == 0);
    if let Some(message) = last_message {
        assert_eq!(validator.errors().last().map(|e| e.message()), Some(message.as_str()));
    }
});

//! Fuzz target for message templates and catalog parsing.
//!
//! Template formatting must never panic, whatever the placeholders look
//! like, and catalog parsing must reject bad input with an error.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vouch_validation::{MessageContainer, format_template};

#[derive(Debug, Arbitrary)]
struct FuzzTemplate {
    template: String,
    args: Vec<String>,
    catalog: String,
}

fuzz_target!(|data: FuzzTemplate| {
    let args: Vec<&dyn std::fmt::Display> = data
        .args
        .iter()
        .take(8)
        .map(|a| a as &dyn std::fmt::Display)
        .collect();

    let formatted = format_template(&data.template, &args);

    // Without placeholders the template comes back as written.
    if !data.template.contains('{') && !data.template.contains('}') {
        assert_eq!(formatted, data.template);
    }

    if let Ok(messages) = MessageContainer::from_json(&data.catalog) {
        let _ = messages.format("is", &args);
    }
    if let Ok(messages) = MessageContainer::from_toml(&data.catalog) {
        let _ = messages.format("is", &args);
    }
});

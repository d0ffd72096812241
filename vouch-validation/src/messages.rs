//! Default message catalog
//!
//! A [`MessageContainer`] maps a rule kind to a message template. Templates use
//! positional placeholders: `{0}` is the field name, `{1}` and `{2}` carry rule
//! bounds such as lengths. `{{` and `}}` produce literal braces.
//!
//! The catalog is open: any string is a valid kind, so new rules bring their
//! own templates without changes here. Catalogs can be loaded from flat JSON
//! or TOML files for localization; loaded entries are laid over the defaults.
//!
//! ```
//! use vouch_validation::{MessageContainer, kinds};
//!
//! let messages = MessageContainer::new()
//!     .with(kinds::IS_NOT_NULL, "'{0}' est obligatoire.");
//! assert_eq!(messages.format(kinds::IS_NOT_NULL, &[&"nom"]), "'nom' est obligatoire.");
//! ```

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use vouch_log::debug;

/// Environment variable naming a catalog file loaded by [`MessageContainer::from_env`].
pub const MESSAGES_ENV: &str = "VOUCH_MESSAGES";

/// Rule kinds known to the built-in rules.
pub mod kinds {
    pub const IS: &str = "is";
    pub const IS_NOT: &str = "is_not";
    pub const IS_NOT_NULL: &str = "is_not_null";
    pub const IS_EMAIL: &str = "is_email";
    pub const IS_REGEX: &str = "is_regex";
    pub const IS_MATCH: &str = "is_match";
    pub const IS_MIN_LENGTH: &str = "is_min_length";
    pub const IS_MAX_LENGTH: &str = "is_max_length";
    pub const IS_EXACT_LENGTH: &str = "is_exact_length";
    pub const IS_BETWEEN_LENGTH: &str = "is_between_length";
    pub const IS_PASSWORD: &str = "is_password";
    pub const IS_NOT_NULL_OR_EMPTY: &str = "is_not_null_or_empty";
    pub const IS_NOT_NULL_OR_WHITESPACE: &str = "is_not_null_or_whitespace";
}

const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    (kinds::IS, "'{0}' does not match the specified criteria."),
    (kinds::IS_NOT, "'{0}' must not match the specified criteria."),
    (kinds::IS_NOT_NULL, "'{0}' cannot be null."),
    (kinds::IS_EMAIL, "'{0}' is not a valid email address."),
    (
        kinds::IS_REGEX,
        "'{0}' does not match the provided regular expression.",
    ),
    (kinds::IS_MATCH, "'{0}' did not match the specified criteria."),
    (kinds::IS_MIN_LENGTH, "'{0}' must be at least {1} characters."),
    (kinds::IS_MAX_LENGTH, "'{0}' must be {1} characters or less."),
    (kinds::IS_EXACT_LENGTH, "'{0}' must be exactly {1} characters."),
    (
        kinds::IS_BETWEEN_LENGTH,
        "'{0}' must be between {1} and {2} characters long.",
    ),
    (
        kinds::IS_PASSWORD,
        "'{0}' is not a valid password. Passwords must be 8 to 30 characters with at least one uppercase letter, one lowercase letter and one number.",
    ),
    (kinds::IS_NOT_NULL_OR_EMPTY, "'{0}' cannot be empty."),
    (kinds::IS_NOT_NULL_OR_WHITESPACE, "'{0}' cannot be blank."),
];

/// Errors raised while loading a message catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read message catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON message catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML message catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported message catalog format: {0}")]
    UnsupportedFormat(String),
}

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(CatalogFormat::Json),
            "toml" => Some(CatalogFormat::Toml),
            _ => None,
        }
    }

    fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        Self::from_extension(ext).ok_or_else(|| {
            CatalogError::UnsupportedFormat(format!("{} (extension {:?})", path.display(), ext))
        })
    }
}

/// Rule kind to message template mapping.
///
/// Read-only while validators use it; share one instance across validators
/// with `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageContainer {
    templates: HashMap<String, String>,
}

impl Default for MessageContainer {
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES
                .iter()
                .map(|(kind, template)| (kind.to_string(), template.to_string()))
                .collect(),
        }
    }
}

impl MessageContainer {
    /// Catalog holding the default English templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace (or add) the template for `kind`.
    pub fn with(mut self, kind: impl Into<String>, template: impl Into<String>) -> Self {
        self.set(kind, template);
        self
    }

    pub fn set(&mut self, kind: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(kind.into(), template.into());
    }

    /// Template registered for `kind`, if any.
    pub fn template(&self, kind: &str) -> Option<&str> {
        self.templates.get(kind).map(String::as_str)
    }

    /// Template for `kind`, falling back to the generic `is` template.
    pub fn get(&self, kind: &str) -> &str {
        self.template(kind)
            .or_else(|| self.template(kinds::IS))
            .unwrap_or(DEFAULT_TEMPLATES[0].1)
    }

    /// Resolve the template for `kind` with positional arguments.
    pub fn format(&self, kind: &str, args: &[&dyn Display]) -> String {
        format_template(self.get(kind), args)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.templates.contains_key(kind)
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Lay `overrides` over the default templates.
    pub fn from_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut container = Self::default();
        for (kind, template) in overrides {
            container.set(kind, template);
        }
        container
    }

    /// Parse a flat JSON object of `kind -> template`.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let overrides: BTreeMap<String, String> = serde_json::from_str(content)?;
        Ok(Self::from_overrides(overrides))
    }

    /// Parse a flat TOML table of `kind = "template"`.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let overrides: BTreeMap<String, String> = toml::from_str(content)?;
        Ok(Self::from_overrides(overrides))
    }

    pub fn parse(content: &str, format: CatalogFormat) -> Result<Self, CatalogError> {
        match format {
            CatalogFormat::Json => Self::from_json(content),
            CatalogFormat::Toml => Self::from_toml(content),
        }
    }

    /// Load a catalog file, picking the format from its extension.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let container = Self::parse(&content, format)?;
        debug!(
            target: "vouch::messages",
            "loaded message catalog {} ({} templates)",
            path.display(),
            container.len()
        );
        Ok(container)
    }

    /// Load the catalog named by `VOUCH_MESSAGES`, or the defaults when unset.
    pub fn from_env() -> Result<Self, CatalogError> {
        match std::env::var_os(MESSAGES_ENV) {
            Some(path) if !path.is_empty() => Self::load_file(PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }
}

/// Substitute `{N}` placeholders in `template` with `args[N]`.
///
/// Placeholders without a matching argument, and malformed ones, are kept
/// verbatim.
pub fn format_template(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let rest = &template[start + 1..];
                let digits = rest.chars().take_while(char::is_ascii_digit).count();
                let closed = digits > 0 && rest[digits..].starts_with('}');
                let arg = if closed {
                    rest[..digits]
                        .parse::<usize>()
                        .ok()
                        .and_then(|index| args.get(index))
                } else {
                    None
                };

                match arg {
                    Some(arg) => {
                        out.push_str(&arg.to_string());
                        // digits are ASCII, so one char per byte
                        for _ in 0..=digits {
                            chars.next();
                        }
                    }
                    None => out.push('{'),
                }
            }
            c => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_cover_builtin_kinds() {
        let messages = MessageContainer::new();
        for (kind, _) in DEFAULT_TEMPLATES {
            assert!(messages.contains(kind), "missing {}", kind);
        }
        assert_eq!(messages.len(), DEFAULT_TEMPLATES.len());
    }

    #[test]
    fn test_format_template() {
        assert_eq!(format_template("'{0}' cannot be null.", &[&"Name"]), "'Name' cannot be null.");
        assert_eq!(
            format_template("'{0}' must be between {1} and {2}.", &[&"name", &5, &20]),
            "'name' must be between 5 and 20."
        );
        assert_eq!(format_template("{1}{0}", &[&"a", &"b"]), "ba");
    }

    #[test]
    fn test_format_template_keeps_unmatched_placeholders() {
        assert_eq!(format_template("{0} and {3}", &[&"x"]), "x and {3}");
        assert_eq!(format_template("{name}", &[&"x"]), "{name}");
        assert_eq!(format_template("open {", &[]), "open {");
        assert_eq!(format_template("{}", &[&"x"]), "{}");
        assert_eq!(format_template("{{0}} {0}", &[&"x"]), "{0} x");
        assert_eq!(format_template("é{0}ü", &[&"ß"]), "éßü");
    }

    #[test]
    fn test_unknown_kind_falls_back_to_is() {
        let messages = MessageContainer::new();
        assert_eq!(messages.get("is_uuid"), messages.get(kinds::IS));
        assert!(messages.template("is_uuid").is_none());
    }

    #[test]
    fn test_with_adds_new_kind() {
        let messages = MessageContainer::new().with("is_uuid", "'{0}' is not a UUID.");
        assert_eq!(messages.format("is_uuid", &[&"id"]), "'id' is not a UUID.");
        assert!(messages.kinds().contains(&"is_uuid"));
    }

    #[test]
    fn test_from_json_overlays_defaults() {
        let messages = MessageContainer::from_json(
            r#"{"is_not_null": "'{0}' ne peut pas être nul.", "is_postcode": "'{0}' invalide"}"#,
        )
        .unwrap();

        assert_eq!(
            messages.format(kinds::IS_NOT_NULL, &[&"nom"]),
            "'nom' ne peut pas être nul."
        );
        assert_eq!(messages.template("is_postcode"), Some("'{0}' invalide"));
        assert_eq!(
            messages.template(kinds::IS_EMAIL),
            MessageContainer::new().template(kinds::IS_EMAIL)
        );
    }

    #[test]
    fn test_from_toml() {
        let messages = MessageContainer::from_toml(
            r#"
                is_min_length = "'{0}' braucht mindestens {1} Zeichen."
            "#,
        )
        .unwrap();
        assert_eq!(
            messages.format(kinds::IS_MIN_LENGTH, &[&"name", &3]),
            "'name' braucht mindestens 3 Zeichen."
        );
    }

    #[test]
    fn test_invalid_catalogs() {
        assert!(matches!(
            MessageContainer::from_json("[1, 2]"),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(
            MessageContainer::from_toml("is = 3"),
            Err(CatalogError::Toml(_))
        ));
    }

    #[test]
    fn test_load_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"is": "bad {{0}}"}}"#).unwrap();

        let messages = MessageContainer::load_file(file.path()).unwrap();
        assert_eq!(messages.get(kinds::IS), "bad {0}");
    }

    #[test]
    fn test_load_file_errors() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(
            MessageContainer::load_file(file.path()),
            Err(CatalogError::UnsupportedFormat(_))
        ));

        assert!(matches!(
            MessageContainer::load_file("/definitely/not/here.toml"),
            Err(CatalogError::Io { .. })
        ));
    }

    // single test: the env var is process-wide
    #[test]
    fn test_from_env() {
        unsafe { std::env::remove_var(MESSAGES_ENV) };
        assert_eq!(MessageContainer::from_env().unwrap(), MessageContainer::default());

        unsafe { std::env::set_var(MESSAGES_ENV, "") };
        assert_eq!(MessageContainer::from_env().unwrap(), MessageContainer::default());

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "is_email = \"'{{0}}' is not an address.\"").unwrap();
        unsafe { std::env::set_var(MESSAGES_ENV, file.path()) };
        let messages = MessageContainer::from_env();
        unsafe { std::env::remove_var(MESSAGES_ENV) };

        let messages = messages.unwrap();
        assert_eq!(messages.get(kinds::IS_EMAIL), "'{0}' is not an address.");
        assert_eq!(messages.get(kinds::IS), MessageContainer::default().get(kinds::IS));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(CatalogFormat::from_extension("JSON"), Some(CatalogFormat::Json));
        assert_eq!(CatalogFormat::from_extension("toml"), Some(CatalogFormat::Toml));
        assert_eq!(CatalogFormat::from_extension("env"), None);
    }
}

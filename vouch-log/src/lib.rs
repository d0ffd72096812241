//! Logging for the vouch validation engine
//!
//! A small, environment-controlled logger used by the vouch crates. Validation
//! itself never fails loudly, so the engine reports what it does (errors
//! appended, messages overridden, catalogs loaded) through these macros at
//! `trace` and `debug` level. Nothing is printed unless a level is enabled.
//!
//! # Usage
//!
//! ```rust
//! use vouch_log::{debug, info, trace};
//!
//! trace!("checking field");
//! debug!(target: "vouch::validator", "appended error for {}", "email");
//! info!("catalog loaded with {} templates", 14);
//! ```
//!
//! # Environment Variables
//!
//! - `VOUCH_DEBUG=1` - Enable debug logging
//! - `VOUCH_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level (default `warn`)
//! - `VOUCH_LOG_FORMAT=pretty|compact|json` - Set output format (default `compact`)
//! - `VOUCH_LOG_COLOR=1|0` - Enable/disable colors
//! - `VOUCH_LOG_TIMESTAMPS=1|0` - Include timestamps
//!
//! Crates that log through the [`log`](https://docs.rs/log) facade can be routed
//! into the same sink with [`install`].

use once_cell::sync::Lazy;
use std::env;
use std::io::{IsTerminal, Write};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

// ============================================================================
// Log Levels
// ============================================================================

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Per-check detail
    Trace = 0,
    /// Catalog loads, escalations
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    /// Nothing is emitted
    Off = 5,
}

impl Level {
    /// Upper-case level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }

    /// Colored level name (if color feature enabled).
    #[cfg(feature = "color")]
    pub fn colored(&self) -> colored::ColoredString {
        use colored::Colorize;
        match self {
            Level::Trace => "TRACE".magenta(),
            Level::Debug => "DEBUG".blue(),
            Level::Info => "INFO".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERROR".red().bold(),
            Level::Off => "OFF".white(),
        }
    }

    /// Matching filter for the `log` facade.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Level::Trace => log::LevelFilter::Trace,
            Level::Debug => log::LevelFilter::Debug,
            Level::Info => log::LevelFilter::Info,
            Level::Warn => log::LevelFilter::Warn,
            Level::Error => log::LevelFilter::Error,
            Level::Off => log::LevelFilter::Off,
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "off" | "none" => Ok(Level::Off),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::Trace,
            log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-column, human oriented
    Pretty,
    /// One short line per record
    Compact,
    /// One JSON object per line
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Format::Pretty),
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

// ============================================================================
// Global Configuration
// ============================================================================

const UNSET: u8 = u8::MAX;

// Runtime overrides; `UNSET` defers to the environment configuration.
static DEBUG_ENABLED: AtomicU8 = AtomicU8::new(UNSET);
static LOG_LEVEL: AtomicU8 = AtomicU8::new(UNSET);

static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

/// Logging configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub debug: bool,
    pub level: Level,
    pub format: Format,
    pub color: bool,
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Warn,
            format: Format::Compact,
            color: false,
            timestamps: true,
        }
    }
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

impl LogConfig {
    /// Build the configuration from `VOUCH_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let debug = env_flag("VOUCH_DEBUG").unwrap_or(defaults.debug);

        let level = env::var("VOUCH_LOG_LEVEL")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { defaults.level });

        let format = env::var("VOUCH_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.format);

        let color = env_flag("VOUCH_LOG_COLOR").unwrap_or_else(|| {
            env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
        });

        let timestamps = env_flag("VOUCH_LOG_TIMESTAMPS").unwrap_or(defaults.timestamps);

        Self {
            debug,
            level,
            format,
            color,
            timestamps,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Force configuration to be read from the environment now rather than on
/// the first record.
pub fn init() {
    Lazy::force(&CONFIG);
}

#[inline]
pub fn is_debug_enabled() -> bool {
    match DEBUG_ENABLED.load(Ordering::Relaxed) {
        UNSET => config().debug,
        raw => raw == 1,
    }
}

/// Check whether records at `level` pass the global filter.
#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    level != Level::Off && level >= current_level()
}

pub fn current_level() -> Level {
    match LOG_LEVEL.load(Ordering::Relaxed) {
        UNSET => config().level,
        raw => Level::from_u8(raw),
    }
}

/// Change the level at runtime. Also updates the `log` facade filter.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
    log::set_max_level(level.to_level_filter());
}

/// Turn debug mode on or off. Enabling it lowers the level to at least `Debug`.
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(u8::from(enabled), Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

pub fn config() -> &'static LogConfig {
    &CONFIG
}

// ============================================================================
// Output
// ============================================================================

/// Write one record to stderr. Used by the macros.
#[doc(hidden)]
pub fn emit(level: Level, target: &str, message: &str) {
    let config = config();
    if !is_level_enabled(level) && !(level == Level::Debug && is_debug_enabled()) {
        return;
    }

    match config.format {
        Format::Pretty => emit_pretty(level, target, message, config),
        Format::Compact => emit_compact(level, target, message, config),
        Format::Json => emit_json(level, target, message),
    }
}

fn emit_pretty(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let now = chrono::Local::now();
        let _ = write!(stderr, "{} ", now.format("%Y-%m-%d %H:%M:%S%.3f"));
    }

    #[cfg(feature = "color")]
    if config.color {
        let _ = write!(stderr, "{:5} ", level.colored());
    } else {
        let _ = write!(stderr, "{:5} ", level.as_str());
    }

    #[cfg(not(feature = "color"))]
    let _ = write!(stderr, "{:5} ", level.as_str());

    if !target.is_empty() {
        let _ = write!(stderr, "[{}] ", target);
    }

    let _ = writeln!(stderr, "{}", message);
}

fn emit_compact(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let _ = write!(stderr, "{} ", chrono::Local::now().format("%H:%M:%S"));
    }

    let initial = level.as_str().chars().next().unwrap_or('?');
    if target.is_empty() {
        let _ = writeln!(stderr, "{} {}", initial, message);
    } else {
        let _ = writeln!(stderr, "{} {}: {}", initial, target, message);
    }
}

#[cfg(feature = "json")]
fn emit_json(level: Level, target: &str, message: &str) {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Record<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let record = Record {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    };

    if let Ok(line) = serde_json::to_string(&record) {
        eprintln!("{}", line);
    }
}

#[cfg(not(feature = "json"))]
fn emit_json(level: Level, target: &str, message: &str) {
    eprintln!(
        r#"{{"timestamp":"{}","level":"{}","target":"{}","message":"{}"}}"#,
        chrono::Utc::now().to_rfc3339(),
        level.as_str(),
        escape_json(target),
        escape_json(message)
    );
}

/// Escape `s` for use inside a JSON string literal.
#[cfg_attr(feature = "json", allow(dead_code))]
fn escape_json(s: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

// ============================================================================
// `log` facade bridge
// ============================================================================

struct Bridge;

static BRIDGE: Bridge = Bridge;

impl log::Log for Bridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        is_level_enabled(Level::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            emit(
                Level::from(record.level()),
                record.target(),
                &record.args().to_string(),
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Register this crate as the global `log` logger.
///
/// Fails if another logger was installed first.
pub fn install() -> Result<(), log::SetLoggerError> {
    init();
    log::set_logger(&BRIDGE)?;
    log::set_max_level(current_level().to_level_filter());
    Ok(())
}

// ============================================================================
// Macros
// ============================================================================

/// Log a trace message.
#[macro_export]
macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::emit($crate::Level::Trace, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::emit($crate::Level::Trace, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a debug message.
///
/// Also printed when `VOUCH_DEBUG=1`, whatever the level.
///
/// ```rust
/// use vouch_log::debug;
///
/// let name = "email";
/// debug!(target: "vouch::validator", "check failed for {}", name);
/// ```
#[macro_export]
macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::emit($crate::Level::Debug, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::emit($crate::Level::Debug, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::emit($crate::Level::Info, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::emit($crate::Level::Info, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a warning message.
#[macro_export]
macro_rules! warn {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::emit($crate::Level::Warn, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::emit($crate::Level::Warn, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log an error message.
#[macro_export]
macro_rules! error {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::emit($crate::Level::Error, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::emit($crate::Level::Error, module_path!(), &format!($($arg)+));
        }
    };
}

// ============================================================================
// Tracing Integration
// ============================================================================

#[cfg(feature = "tracing")]
pub mod tracing_compat {
    //! A `tracing` subscriber filtered at the vouch log level.

    use super::*;

    /// Build a subscriber honouring `RUST_LOG` first, then `VOUCH_LOG_LEVEL`.
    pub fn subscriber() -> impl tracing::Subscriber {
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::{EnvFilter, fmt};

        let config = config();
        let directive = config.level.as_str().to_lowercase();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(config.color))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_json() {
        assert_eq!(escape_json("plain"), "plain");
        assert_eq!(escape_json("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_json("a\\b"), "a\\\\b");
        assert_eq!(escape_json("l1\nl2\r\t"), "l1\\nl2\\r\\t");
        assert_eq!(escape_json("esc\u{1b}[0m del\u{7f}"), "esc\\u001b[0m del\\u007f");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_escape_json_parses_back() {
        let raw = "trace \"name\"\u{0}\u{1b}[31m\\ end\n";
        let literal = format!("\"{}\"", escape_json(raw));
        let parsed: String = serde_json::from_str(&literal).unwrap();
        assert_eq!(parsed, raw);
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Off);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
        assert_eq!(" TRACE ".parse::<Level>(), Ok(Level::Trace));
        assert_eq!("warning".parse::<Level>(), Ok(Level::Warn));
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("json".parse::<Format>(), Ok(Format::Json));
        assert_eq!("Compact".parse::<Format>(), Ok(Format::Compact));
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(Level::from(log::Level::Warn), Level::Warn);
        assert_eq!(Level::Off.to_level_filter(), log::LevelFilter::Off);
        assert_eq!(Level::Trace.to_level_filter(), log::LevelFilter::Trace);
    }

    // Global level state is only mutated here, so parallel tests cannot race it.
    #[test]
    fn test_runtime_overrides() {
        let original_level = current_level();
        let original_debug = is_debug_enabled();

        set_level(Level::Trace);
        assert!(is_level_enabled(Level::Error));
        assert!(!is_level_enabled(Level::Off));

        set_level(Level::Error);
        assert_eq!(current_level(), Level::Error);
        assert!(!is_level_enabled(Level::Warn));

        set_debug(true);
        assert!(is_debug_enabled());
        assert_eq!(current_level(), Level::Debug);

        set_debug(original_debug);
        set_level(original_level);
    }

    #[test]
    fn test_macros_expand() {
        trace!("trace message");
        debug!("debug message");
        info!("info message");
        warn!("warn message");
        error!("error message");

        let name = "email";
        trace!(target: "vouch::test", "field {}", name);
        debug!(target: "vouch::test", "field {}", name);
    }
}

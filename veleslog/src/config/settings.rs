//! Settings structs for the configuration file.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::log::{LoggerConfig, Registration};

/// Default `EnvFilter` directive when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_FILTER: &str = "info";

/// Complete configuration loaded from logging.ini.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Which backend loggers dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Structured output through `tracing`
    #[default]
    Tracing,
    /// Bare lines on standard error
    Fallback,
}

impl BackendKind {
    /// Lowercase name, as used in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Tracing => "tracing",
            BackendKind::Fallback => "fallback",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tracing" | "structured" => Ok(BackendKind::Tracing),
            "fallback" | "stderr" => Ok(BackendKind::Fallback),
            other => Err(format!("unknown backend '{}'", other)),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Backend selected at startup
    pub backend: BackendKind,
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
    /// When loggers register their domain
    pub registration: Registration,
    /// Emit a debug line when a domain registers
    pub announce: bool,
    /// Render domain names in their palette color
    pub colored_domains: bool,
    /// ANSI escapes on the terminal output
    pub ansi: bool,
    /// Directory for the session log file (no file output when unset)
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            filter: DEFAULT_FILTER.to_string(),
            registration: Registration::default(),
            announce: false,
            colored_domains: true,
            ansi: true,
            log_dir: None,
        }
    }
}

impl LoggingSettings {
    /// Default options for loggers built under these settings.
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig::new()
            .with_registration(self.registration)
            .with_announce(self.announce)
    }
}

//! Configuration for the logging facility.
//!
//! Settings are read from `~/.veles/logging.ini`. Missing files and missing
//! keys fall back to defaults.
//!
//! # Example
//!
//! ```
//! use veleslog::config::{BackendKind, ConfigFile};
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.logging.backend, BackendKind::Tracing);
//! assert_eq!(config.logging.filter, "info");
//! ```

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{BackendKind, ConfigFile, LoggingSettings, DEFAULT_FILTER};

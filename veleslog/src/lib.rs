//! veleslog - per-type log domains for Veles components
//!
//! Every component that logs gets its own named domain, a display color and
//! leveled logging (debug, info, warning, error, critical). Messages go to a
//! backend chosen at startup: structured `tracing` events, or bare lines on
//! standard error.
//!
//! # Quick start
//!
//! ```ignore
//! use veleslog::config::ConfigFile;
//! use veleslog::log::DefaultLogger;
//! use veleslog::logging::init_logging;
//! use veleslog::log_info;
//!
//! let config = ConfigFile::load()?;
//! let _guard = init_logging(&config.logging)?;
//!
//! struct Loader;
//! let logger = DefaultLogger::<Loader, 2>::new();
//! log_info!(logger, "loaded {} workflows", 3);
//! ```

pub mod config;
pub mod log;
pub mod logging;

pub use log::{DefaultLogger, HasLogger, LogLevel, Logger};

/// Version of the veleslog library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

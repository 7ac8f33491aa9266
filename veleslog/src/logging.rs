//! Logging infrastructure setup.
//!
//! Chooses the process-wide backend from [`LoggingSettings`]:
//! - `tracing`: installs a subscriber writing to stderr and, when a log
//!   directory is configured, to `<log_dir>/veleslog.log` (cleared on session
//!   start)
//! - `fallback`: no subscriber, loggers write bare lines to stderr
//!
//! The filter honours the RUST_LOG environment variable before the configured
//! directive.

use std::fmt::{self, Write as _};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::field::Field;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::field::MakeExt;
use tracing_subscriber::fmt::format::{self, FormatFields, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{BackendKind, LoggingSettings};
use crate::log::palette::strip_ansi;
use crate::log::{global, FallbackBackend, LogBackend, TracingBackend};

/// Errors raised while setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log directory or file could not be prepared
    #[error("Failed to prepare log file in {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The filter directive does not parse
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// A global subscriber was already set
    #[error("Failed to install tracing subscriber: {0}")]
    Subscriber(String),

    /// A backend was already installed for this process
    #[error("A logging backend is already installed")]
    AlreadyInstalled,
}

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
#[derive(Default)]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging and install the configured backend.
///
/// # Errors
///
/// Returns an error if the log directory cannot be prepared, the filter is
/// invalid, or logging was already initialized in this process.
pub fn init_logging(settings: &LoggingSettings) -> Result<LoggingGuard, LoggingError> {
    if global::is_installed() {
        return Err(LoggingError::AlreadyInstalled);
    }

    let (backend, guard): (Arc<dyn LogBackend>, LoggingGuard) = match settings.backend {
        BackendKind::Tracing => {
            let guard = init_subscriber(settings)?;
            (Arc::new(tracing_backend(settings)), guard)
        }
        BackendKind::Fallback => (Arc::new(FallbackBackend::new()), LoggingGuard::default()),
    };

    global::install(backend, settings.logger_config())
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    tracing::debug!(
        backend = %settings.backend,
        registration = settings.registration.as_str(),
        "logging initialized"
    );
    Ok(guard)
}

/// Tracing backend for `settings`; domains are colored only on an ANSI terminal.
fn tracing_backend(settings: &LoggingSettings) -> TracingBackend {
    TracingBackend::new().with_colored_domains(settings.colored_domains && settings.ansi)
}

/// Build the filter: RUST_LOG first, then the configured directive.
pub fn build_filter(settings: &LoggingSettings) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&settings.filter).map_err(|e| LoggingError::InvalidFilter {
        filter: settings.filter.clone(),
        reason: e.to_string(),
    })
}

fn init_subscriber(settings: &LoggingSettings) -> Result<LoggingGuard, LoggingError> {
    let env_filter = build_filter(settings)?;

    // Stderr layer, colored per settings
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(settings.ansi)
        .with_target(false);

    let (file_layer, file_guard) = match &settings.log_dir {
        Some(log_dir) => {
            let file = prepare_log_file(log_dir, default_log_file())?;
            let file_appender = tracing_appender::rolling::never(log_dir, file);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .fmt_fields(plain_fields())
                .with_ansi(false); // No ANSI colors in file
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::Subscriber(e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Field formatter that drops escape sequences from recorded values.
///
/// Colored domain labels are rendered on the terminal only.
pub fn plain_fields() -> impl for<'w> FormatFields<'w> + Send + Sync + 'static {
    format::debug_fn(
        |writer: &mut Writer<'_>, field: &Field, value: &dyn fmt::Debug| {
            let rendered = format!("{:?}", value);
            let rendered = strip_ansi(&rendered);
            if field.name() == "message" {
                write!(writer, "{}", rendered)
            } else {
                write!(writer, "{}={}", field.name(), rendered)
            }
        },
    )
    .delimited(" ")
}

/// Create the log directory if needed and clear the previous session's file.
pub fn prepare_log_file<'a>(log_dir: &Path, log_file: &'a str) -> Result<&'a str, LoggingError> {
    let to_error = |source| LoggingError::LogFile {
        path: log_dir.display().to_string(),
        source,
    };
    fs::create_dir_all(log_dir).map_err(to_error)?;
    fs::write(log_dir.join(log_file), "").map_err(to_error)?;
    Ok(log_file)
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    "veleslog.log"
}

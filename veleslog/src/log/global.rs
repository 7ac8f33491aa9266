//! Process-wide backend selection.
//!
//! The backend is chosen once at startup with [`install`]. Until then (and in
//! processes that never call it) loggers use a [`FallbackBackend`] writing to
//! standard error.

use std::fmt::Arguments;
use std::sync::{Arc, OnceLock};

use super::{FallbackBackend, LogBackend, LogDomain, LogLevel, LoggerConfig};

struct Installed {
    backend: Arc<dyn LogBackend>,
    config: LoggerConfig,
}

static INSTALLED: OnceLock<Installed> = OnceLock::new();
static FALLBACK: OnceLock<Arc<dyn LogBackend>> = OnceLock::new();

/// Install the process-wide backend and default logger options.
///
/// Only the first call takes effect; later calls hand the backend back.
pub fn install(
    backend: Arc<dyn LogBackend>,
    config: LoggerConfig,
) -> Result<(), Arc<dyn LogBackend>> {
    INSTALLED
        .set(Installed { backend, config })
        .map_err(|rejected| rejected.backend)
}

/// Whether [`install`] has succeeded.
pub fn is_installed() -> bool {
    INSTALLED.get().is_some()
}

/// The installed backend, or the stderr fallback.
pub fn backend() -> Arc<dyn LogBackend> {
    match INSTALLED.get() {
        Some(installed) => Arc::clone(&installed.backend),
        None => Arc::clone(FALLBACK.get_or_init(|| {
            let fallback: Arc<dyn LogBackend> = Arc::new(FallbackBackend::new());
            fallback
        })),
    }
}

/// Default options for loggers created with [`Logger::new`](super::Logger::new).
pub fn logger_config() -> LoggerConfig {
    INSTALLED
        .get()
        .map(|installed| installed.config)
        .unwrap_or_default()
}

/// Log against a raw domain handle through the installed backend.
pub fn emit(domain: LogDomain, level: LogLevel, args: Arguments<'_>) {
    backend().emit(domain, level, args);
}

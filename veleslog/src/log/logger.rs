//! The per-type logger carrying a domain, a color and a backend handle.

use std::fmt::{self, Arguments};
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use super::demangle::demangle;
use super::global;
use super::palette::{Color, DEFAULT_COLOR};
use super::{LogBackend, LogDomain, LogLevel};

/// When a logger registers its domain with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Registration {
    /// Register while constructing the logger.
    #[default]
    Immediate,
    /// Register on the first emitted message.
    Deferred,
}

impl Registration {
    /// Lowercase name, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Registration::Immediate => "immediate",
            Registration::Deferred => "deferred",
        }
    }
}

impl FromStr for Registration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "immediate" => Ok(Registration::Immediate),
            "deferred" | "lazy" => Ok(Registration::Deferred),
            other => Err(format!(
                "unknown registration mode '{}' (expected immediate or deferred)",
                other
            )),
        }
    }
}

/// Construction options for a [`Logger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoggerConfig {
    /// When to register the domain.
    pub registration: Registration,
    /// Emit a debug line once the domain is registered.
    pub announce: bool,
}

impl LoggerConfig {
    /// Immediate registration, no announcement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registration mode.
    pub fn with_registration(mut self, registration: Registration) -> Self {
        self.registration = registration;
        self
    }

    /// Enable or disable the registration announcement.
    pub fn with_announce(mut self, announce: bool) -> Self {
        self.announce = announce;
        self
    }
}

/// A registered domain handle together with the backend that issued it.
///
/// Shared between clones of a logger; the handle is disposed when the last
/// clone lets go of it.
struct DomainLease {
    domain: LogDomain,
    backend: Arc<dyn LogBackend>,
}

impl Drop for DomainLease {
    fn drop(&mut self) {
        if self.domain.is_registered() {
            self.backend.dispose_domain(self.domain);
        }
    }
}

/// Named, colored, leveled logging identity.
///
/// Types that log compose a `Logger` and expose it through
/// [`HasLogger`](super::HasLogger), then use the `log_*!` macros.
///
/// # Thread Safety
///
/// Logging through a shared `&Logger` is safe from any thread. Renaming,
/// recoloring and [`Logger::take`] need `&mut self`; callers sharing one
/// logger across threads must serialize those themselves.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use veleslog::log::{HasLogger, Logger, LoggerConfig, NullBackend};
/// use veleslog::log_info;
///
/// struct Connection {
///     logger: Logger,
/// }
///
/// impl HasLogger for Connection {
///     fn logger(&self) -> &Logger {
///         &self.logger
///     }
/// }
///
/// let conn = Connection {
///     logger: Logger::with_backend("Net::Connection", "blue", Arc::new(NullBackend), LoggerConfig::new()),
/// };
/// log_info!(conn, "connected to {}", "10.0.0.1");
/// ```
#[derive(Clone)]
pub struct Logger {
    domain_str: String,
    color: String,
    lease: OnceLock<Arc<DomainLease>>,
    backend: Arc<dyn LogBackend>,
    config: LoggerConfig,
}

impl Logger {
    /// Create a logger against the globally installed backend.
    ///
    /// An empty `color` selects the default palette color.
    pub fn new(domain: impl Into<String>, color: impl Into<String>) -> Self {
        Self::with_backend(domain, color, global::backend(), global::logger_config())
    }

    /// Create a logger against an explicit backend.
    pub fn with_backend(
        domain: impl Into<String>,
        color: impl Into<String>,
        backend: Arc<dyn LogBackend>,
        config: LoggerConfig,
    ) -> Self {
        let mut color = color.into();
        if color.is_empty() {
            color = DEFAULT_COLOR.ansi_code().to_string();
        }
        let logger = Self {
            domain_str: domain.into(),
            color,
            lease: OnceLock::new(),
            backend,
            config,
        };
        if config.registration == Registration::Immediate {
            logger.ensure_registered();
        }
        logger
    }

    /// Register the domain if that has not happened yet and return the handle.
    ///
    /// A failed registration is remembered as the sentinel and not retried.
    pub fn ensure_registered(&self) -> LogDomain {
        let mut fresh = false;
        let lease = self.lease.get_or_init(|| {
            fresh = true;
            Arc::new(DomainLease {
                domain: self.backend.register_domain(&self.domain_str, &self.color),
                backend: Arc::clone(&self.backend),
            })
        });
        let domain = lease.domain;
        if fresh && self.config.announce {
            self.backend.emit(
                domain,
                LogLevel::Debug,
                format_args!("logging initialized for domain {}", self.domain_str),
            );
        }
        domain
    }

    /// Current domain handle, or [`LogDomain::UNINITIALIZED`].
    pub fn log_domain(&self) -> LogDomain {
        self.lease
            .get()
            .map(|lease| lease.domain)
            .unwrap_or(LogDomain::UNINITIALIZED)
    }

    /// The domain name.
    pub fn domain_str(&self) -> &str {
        &self.domain_str
    }

    /// Rename the domain.
    ///
    /// The old handle is released before the new name is registered. A
    /// deferred logger that never registered stays unregistered.
    pub fn set_domain_str(&mut self, value: impl Into<String>) {
        let was_registered = match self.lease.take() {
            Some(lease) => {
                drop(lease);
                true
            }
            None => false,
        };
        self.domain_str = value.into();
        if was_registered || self.config.registration == Registration::Immediate {
            self.ensure_registered();
        }
    }

    /// The color tag.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Replace the color tag. Backends see it on the next registration.
    pub fn set_color(&mut self, value: impl Into<String>) {
        self.color = value.into();
    }

    /// Construction options of this logger.
    pub fn config(&self) -> LoggerConfig {
        self.config
    }

    /// Move the logger state out, leaving `self` unregistered with an empty
    /// domain and color.
    pub fn take(&mut self) -> Logger {
        Logger {
            domain_str: std::mem::take(&mut self.domain_str),
            color: std::mem::take(&mut self.color),
            lease: std::mem::take(&mut self.lease),
            backend: Arc::clone(&self.backend),
            config: self.config,
        }
    }

    /// ANSI code of the palette entry at `index`, wrapping around.
    pub fn get_color_by_index(index: u32) -> &'static str {
        Color::from_index(index).ansi_code()
    }

    /// Readable form of a mangled symbol, or the symbol itself.
    pub fn demangle(symbol: &str) -> String {
        demangle(symbol)
    }

    /// Log a message at `level` under this logger's domain.
    pub fn log(&self, level: LogLevel, args: Arguments<'_>) {
        let domain = self.ensure_registered();
        self.backend.emit(domain, level, args);
    }

    /// Log a debug message.
    pub fn debug(&self, args: Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    /// Log an info message.
    pub fn info(&self, args: Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    /// Log a warning.
    pub fn warning(&self, args: Arguments<'_>) {
        self.log(LogLevel::Warning, args);
    }

    /// Log an error.
    pub fn error(&self, args: Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    /// Log a critical message.
    pub fn critical(&self, args: Arguments<'_>) {
        self.log(LogLevel::Critical, args);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("domain", &self.domain_str)
            .field("color", &self.color)
            .field("log_domain", &self.log_domain())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

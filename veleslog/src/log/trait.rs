//! Backend trait, level and domain handle definitions.

use std::fmt::{self, Arguments};
use std::str::FromStr;
use std::sync::Arc;

use super::Logger;

/// Severity of a log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Something unexpected that the caller recovered from
    Warning,
    /// An operation failed
    Error,
    /// The component cannot continue
    Critical,
}

impl LogLevel {
    /// All levels, from least to most severe.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// Lowercase name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "info" | "inf" => Ok(LogLevel::Info),
            "warning" | "warn" | "wrn" => Ok(LogLevel::Warning),
            "error" | "err" => Ok(LogLevel::Error),
            "critical" | "crit" | "crt" => Ok(LogLevel::Critical),
            other => Err(format!(
                "unknown log level '{}' (expected debug, info, warning, error or critical)",
                other
            )),
        }
    }
}

/// Numeric handle of a registered log domain.
///
/// Handles are issued by a [`LogBackend`]. The reserved value
/// [`LogDomain::UNINITIALIZED`] means no registration took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogDomain(i32);

impl LogDomain {
    /// Sentinel for "not registered with any backend".
    pub const UNINITIALIZED: LogDomain = LogDomain(-1);

    /// Wrap a raw backend handle.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw handle value.
    pub const fn raw(&self) -> i32 {
        self.0
    }

    /// Whether this handle was issued by a backend.
    pub const fn is_registered(&self) -> bool {
        self.0 >= 0
    }
}

impl Default for LogDomain {
    fn default() -> Self {
        Self::UNINITIALIZED
    }
}

impl fmt::Display for LogDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sink that turns (domain, level, message) into visible output.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; loggers on different threads share
/// one backend.
pub trait LogBackend: Send + Sync {
    /// Register a domain and return its handle.
    ///
    /// Failures are soft: return [`LogDomain::UNINITIALIZED`].
    fn register_domain(&self, name: &str, color: &str) -> LogDomain;

    /// Release a handle previously returned by [`LogBackend::register_domain`].
    fn dispose_domain(&self, _domain: LogDomain) {}

    /// Write one message. The backend appends its own line terminator.
    fn emit(&self, domain: LogDomain, level: LogLevel, args: Arguments<'_>);
}

/// Exposes the [`Logger`] of a composing type.
///
/// This is what the leveled macros take as their first argument, either for
/// the caller itself or for another object it logs on behalf of.
pub trait HasLogger {
    /// The logger carrying this object's domain.
    fn logger(&self) -> &Logger;
}

impl HasLogger for Logger {
    fn logger(&self) -> &Logger {
        self
    }
}

impl<T: HasLogger + ?Sized> HasLogger for &T {
    fn logger(&self) -> &Logger {
        (**self).logger()
    }
}

impl<T: HasLogger + ?Sized> HasLogger for Arc<T> {
    fn logger(&self) -> &Logger {
        (**self).logger()
    }
}

/// A type-level logger, for contexts without an instance.
///
/// Usually implemented with [`impl_class_logger!`](crate::impl_class_logger).
pub trait ClassLogger {
    /// The logger shared by all uses of this type.
    fn class_logger() -> &'static Logger;

    /// Domain handle of the class logger.
    fn log_domain() -> LogDomain {
        Self::class_logger().log_domain()
    }
}

/// Log at debug level.
///
/// Three call shapes:
///
/// - `log_debug!(self, "...")` logs under the caller's own domain
/// - `log_debug!(other, "...")` logs on behalf of another [`HasLogger`]
/// - `log_debug!(class Widget, "...")` logs under a [`ClassLogger`] domain
#[macro_export]
macro_rules! log_debug {
    (class $class:ty, $($arg:tt)+) => {
        <$class as $crate::log::ClassLogger>::class_logger().debug(format_args!($($arg)+))
    };
    ($target:expr, $($arg:tt)+) => {
        $crate::log::HasLogger::logger(&$target).debug(format_args!($($arg)+))
    };
}

/// Log at info level. See [`log_debug!`] for the call shapes.
#[macro_export]
macro_rules! log_info {
    (class $class:ty, $($arg:tt)+) => {
        <$class as $crate::log::ClassLogger>::class_logger().info(format_args!($($arg)+))
    };
    ($target:expr, $($arg:tt)+) => {
        $crate::log::HasLogger::logger(&$target).info(format_args!($($arg)+))
    };
}

/// Log at warning level. See [`log_debug!`] for the call shapes.
#[macro_export]
macro_rules! log_warning {
    (class $class:ty, $($arg:tt)+) => {
        <$class as $crate::log::ClassLogger>::class_logger().warning(format_args!($($arg)+))
    };
    ($target:expr, $($arg:tt)+) => {
        $crate::log::HasLogger::logger(&$target).warning(format_args!($($arg)+))
    };
}

/// Log at error level. See [`log_debug!`] for the call shapes.
#[macro_export]
macro_rules! log_error {
    (class $class:ty, $($arg:tt)+) => {
        <$class as $crate::log::ClassLogger>::class_logger().error(format_args!($($arg)+))
    };
    ($target:expr, $($arg:tt)+) => {
        $crate::log::HasLogger::logger(&$target).error(format_args!($($arg)+))
    };
}

/// Log at critical level. See [`log_debug!`] for the call shapes.
#[macro_export]
macro_rules! log_critical {
    (class $class:ty, $($arg:tt)+) => {
        <$class as $crate::log::ClassLogger>::class_logger().critical(format_args!($($arg)+))
    };
    ($target:expr, $($arg:tt)+) => {
        $crate::log::HasLogger::logger(&$target).critical(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Critical);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!(" CRITICAL ".parse::<LogLevel>(), Ok(LogLevel::Critical));
        assert_eq!("err".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_display_round_trips() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_log_domain_sentinel() {
        assert_eq!(LogDomain::UNINITIALIZED.raw(), -1);
        assert!(!LogDomain::UNINITIALIZED.is_registered());
        assert_eq!(LogDomain::default(), LogDomain::UNINITIALIZED);
        assert!(LogDomain::new(0).is_registered());
    }
}

//! No-operation backend.

use crate::log::{LogBackend, LogDomain, LogLevel};
use std::fmt::Arguments;

/// A backend that discards all messages and never registers domains.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
///
/// # Example
///
/// ```
/// use veleslog::log::{Logger, LoggerConfig, NullBackend};
/// use std::sync::Arc;
///
/// let logger = Logger::with_backend("Quiet", "", Arc::new(NullBackend), LoggerConfig::new());
/// logger.info(format_args!("This message is discarded"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl LogBackend for NullBackend {
    #[inline]
    fn register_domain(&self, _name: &str, _color: &str) -> LogDomain {
        LogDomain::UNINITIALIZED
    }

    #[inline]
    fn emit(&self, _domain: LogDomain, _level: LogLevel, _args: Arguments<'_>) {}
}

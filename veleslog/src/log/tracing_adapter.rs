//! Tracing library adapter implementation.

use crate::log::palette::{resolve_color, Color};
use crate::log::{LogBackend, LogDomain, LogLevel};
use dashmap::DashMap;
use std::fmt::Arguments;
use std::sync::atomic::{AtomicI32, Ordering};

/// Domain name used for messages whose handle is not registered.
pub const COMMON_DOMAIN: &str = "veles";

#[derive(Debug, Clone)]
struct DomainEntry {
    name: String,
    color: String,
}

/// Structured backend that delegates to the `tracing` crate.
///
/// Keeps a registry of domain handles and emits every message as a `tracing`
/// event with a `domain` field, leaving subscribers, filtering and file output
/// to the `tracing` ecosystem. Critical messages become `ERROR` events with
/// `critical = true`.
///
/// Every event has the target `veleslog::log::tracing_adapter`, so an
/// `EnvFilter` directive selects by level for all domains at once; it cannot
/// enable or silence a single domain.
///
/// # Example
///
/// ```ignore
/// use veleslog::log::{Logger, LoggerConfig, TracingBackend};
/// use std::sync::Arc;
///
/// // Assumes tracing subscriber is already initialized
/// let backend = Arc::new(TracingBackend::new());
/// let logger = Logger::with_backend("Net::Connection", "blue", backend, LoggerConfig::new());
/// logger.info(format_args!("Using tracing backend"));
/// ```
#[derive(Debug, Default)]
pub struct TracingBackend {
    domains: DashMap<LogDomain, DomainEntry>,
    next_domain: AtomicI32,
    colored_domains: bool,
}

impl TracingBackend {
    /// Create a tracing backend with plain domain names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap domain names in their color's escape sequence.
    pub fn with_colored_domains(mut self, colored: bool) -> Self {
        self.colored_domains = colored;
        self
    }

    /// Whether domain labels carry their color's escape sequence.
    pub fn colored_domains(&self) -> bool {
        self.colored_domains
    }

    /// Name registered for `domain`, if it is live.
    pub fn domain_name(&self, domain: LogDomain) -> Option<String> {
        self.domains.get(&domain).map(|entry| entry.name.clone())
    }

    /// Number of live domains.
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    fn label(&self, domain: LogDomain) -> String {
        match self.domains.get(&domain) {
            Some(entry) if self.colored_domains => format!(
                "{}{}{}",
                entry.color,
                entry.name,
                Color::Reset.ansi_code()
            ),
            Some(entry) => entry.name.clone(),
            None => COMMON_DOMAIN.to_string(),
        }
    }
}

impl LogBackend for TracingBackend {
    fn register_domain(&self, name: &str, color: &str) -> LogDomain {
        if name.trim().is_empty() {
            return LogDomain::UNINITIALIZED;
        }
        let raw = match self
            .next_domain
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
        {
            Ok(raw) => raw,
            Err(_) => return LogDomain::UNINITIALIZED,
        };
        let domain = LogDomain::new(raw);
        self.domains.insert(
            domain,
            DomainEntry {
                name: name.to_string(),
                color: resolve_color(color).into_owned(),
            },
        );
        tracing::trace!(domain = name, handle = raw, "registered log domain");
        domain
    }

    fn dispose_domain(&self, domain: LogDomain) {
        if let Some((_, entry)) = self.domains.remove(&domain) {
            tracing::trace!(domain = %entry.name, handle = domain.raw(), "disposed log domain");
        }
    }

    fn emit(&self, domain: LogDomain, level: LogLevel, args: Arguments<'_>) {
        let label = self.label(domain);
        match level {
            LogLevel::Debug => tracing::debug!(domain = %label, "{}", args),
            LogLevel::Info => tracing::info!(domain = %label, "{}", args),
            LogLevel::Warning => tracing::warn!(domain = %label, "{}", args),
            LogLevel::Error => tracing::error!(domain = %label, "{}", args),
            LogLevel::Critical => tracing::error!(domain = %label, critical = true, "{}", args),
        }
    }
}

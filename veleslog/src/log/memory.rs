//! In-memory backend that records every call.

use std::fmt::Arguments;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Mutex;

use super::{LogBackend, LogDomain, LogLevel};

/// One call received by a [`MemoryBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    /// A registration attempt and the handle it produced.
    Register {
        name: String,
        color: String,
        domain: LogDomain,
    },
    /// A handle release.
    Dispose(LogDomain),
    /// A formatted message.
    Emit {
        domain: LogDomain,
        level: LogLevel,
        message: String,
    },
}

/// A backend that keeps a journal of calls instead of printing.
///
/// Useful for asserting what a component logged, and in which order domains
/// were registered and released. Handles are issued sequentially from 0 and
/// never reused.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    calls: Mutex<Vec<BackendCall>>,
    next_domain: AtomicI32,
    fail_registrations: AtomicBool,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent registrations fail (return the sentinel).
    pub fn fail_registrations(&self, fail: bool) {
        self.fail_registrations.store(fail, Ordering::SeqCst);
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.lock().clone()
    }

    /// Names passed to every registration attempt.
    pub fn registered_names(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::Register { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Handles released so far.
    pub fn disposed(&self) -> Vec<LogDomain> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::Dispose(domain) => Some(*domain),
                _ => None,
            })
            .collect()
    }

    /// Handles registered and not yet released.
    pub fn live_domains(&self) -> Vec<LogDomain> {
        let calls = self.lock();
        let mut live = Vec::new();
        for call in calls.iter() {
            match call {
                BackendCall::Register { domain, .. } if domain.is_registered() => {
                    live.push(*domain)
                }
                BackendCall::Dispose(domain) => live.retain(|d| d != domain),
                _ => {}
            }
        }
        live
    }

    /// Emitted messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.emitted()
            .into_iter()
            .map(|(_, _, message)| message)
            .collect()
    }

    /// Emitted (domain, level, message) triples, in order.
    pub fn emitted(&self) -> Vec<(LogDomain, LogLevel, String)> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::Emit {
                    domain,
                    level,
                    message,
                } => Some((*domain, *level, message.clone())),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<BackendCall>> {
        // A panicking test thread must not hide the journal from the others.
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LogBackend for MemoryBackend {
    fn register_domain(&self, name: &str, color: &str) -> LogDomain {
        let domain = if self.fail_registrations.load(Ordering::SeqCst) {
            LogDomain::UNINITIALIZED
        } else {
            LogDomain::new(self.next_domain.fetch_add(1, Ordering::SeqCst))
        };
        self.lock().push(BackendCall::Register {
            name: name.to_string(),
            color: color.to_string(),
            domain,
        });
        domain
    }

    fn dispose_domain(&self, domain: LogDomain) {
        self.lock().push(BackendCall::Dispose(domain));
    }

    fn emit(&self, domain: LogDomain, level: LogLevel, args: Arguments<'_>) {
        self.lock().push(BackendCall::Emit {
            domain,
            level,
            message: args.to_string(),
        });
    }
}

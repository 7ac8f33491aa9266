//! Plain standard-error backend used when no structured backend is installed.

use std::fmt::Arguments;
use std::io::{self, Write};
use std::sync::Mutex;

use super::{LogBackend, LogDomain, LogLevel};

/// Writes each message followed by a newline, nothing else.
///
/// Domains are never registered, so every logger using this backend keeps
/// the sentinel handle. Levels and domains are not rendered.
pub struct FallbackBackend {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl FallbackBackend {
    /// Backend writing to the process standard error stream.
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Backend writing to an arbitrary sink.
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
        }
    }
}

impl Default for FallbackBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FallbackBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackBackend").finish_non_exhaustive()
    }
}

impl LogBackend for FallbackBackend {
    fn register_domain(&self, _name: &str, _color: &str) -> LogDomain {
        LogDomain::UNINITIALIZED
    }

    fn emit(&self, _domain: LogDomain, _level: LogLevel, args: Arguments<'_>) {
        let mut sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        // Build the whole line first so concurrent writers cannot interleave it.
        let line = format!("{}\n", args);
        let _ = sink.write_all(line.as_bytes());
        let _ = sink.flush();
    }
}

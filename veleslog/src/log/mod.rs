//! Per-type log domains.
//!
//! Every component that logs owns a [`Logger`]: a domain name, a display
//! color and the numeric handle its backend issued for that name. Messages
//! are dispatched to whichever [`LogBackend`] was chosen at startup.
//!
//! # Architecture
//!
//! - `Logger`: the (domain, color, handle) triple plus leveled logging
//! - `DefaultLogger<T, C>`: a `Logger` named after the type `T`
//! - `LogBackend` trait: the sink interface (register, dispose, emit)
//! - `TracingBackend`: structured backend on top of the `tracing` crate
//! - `FallbackBackend`: bare lines on standard error
//! - `NullBackend` / `MemoryBackend`: silent and recording backends
//!
//! # Usage
//!
//! Components expose their logger through [`HasLogger`] and use the
//! provided macros:
//!
//! ```
//! use veleslog::log::{DefaultLogger, HasLogger, Logger};
//! use veleslog::{log_debug, log_info, log_warning};
//!
//! struct Fetcher {
//!     logger: DefaultLogger<Fetcher, 4>,
//! }
//!
//! impl HasLogger for Fetcher {
//!     fn logger(&self) -> &Logger {
//!         &self.logger
//!     }
//! }
//!
//! struct Pool {
//!     logger: Logger,
//! }
//!
//! impl HasLogger for Pool {
//!     fn logger(&self) -> &Logger {
//!         &self.logger
//!     }
//! }
//!
//! impl Fetcher {
//!     fn fetch(&self, pool: &Pool) {
//!         log_info!(self, "Starting fetch");
//!         // Reported under the pool's domain
//!         log_warning!(pool, "pool exhausted, waiting");
//!         log_debug!(self, "Fetch completed");
//!     }
//! }
//!
//! let fetcher = Fetcher { logger: DefaultLogger::new() };
//! let pool = Pool { logger: Logger::new("Pool", "cyan") };
//! fetcher.fetch(&pool);
//! ```
//!
//! Messages should not end with a newline or a period; backends terminate
//! lines themselves.

mod default_logger;
mod demangle;
mod fallback;
pub mod global;
mod logger;
mod memory;
mod noop;
pub mod palette;
mod tracing_adapter;
mod r#trait;

pub use default_logger::{enclosing_namespace, strip_namespace, DefaultLogger};
pub use demangle::demangle;
pub use fallback::FallbackBackend;
pub use logger::{Logger, LoggerConfig, Registration};
pub use memory::{BackendCall, MemoryBackend};
pub use noop::NullBackend;
pub use palette::{Color, PALETTE_SIZE};
pub use r#trait::{ClassLogger, HasLogger, LogBackend, LogDomain, LogLevel};
pub use tracing_adapter::{TracingBackend, COMMON_DOMAIN};

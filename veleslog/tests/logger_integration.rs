//! Integration tests for per-type loggers against explicit backends.
//!
//! These tests verify:
//! - Domain registration and disposal ordering
//! - The three macro call shapes
//! - Fallback output format
//! - Sharing one logger across threads

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use veleslog::log::{
    BackendCall, DefaultLogger, FallbackBackend, HasLogger, LogBackend, LogDomain, LogLevel,
    Logger, LoggerConfig, MemoryBackend,
};
use veleslog::{log_critical, log_debug, log_error, log_info, log_warning};

// =============================================================================
// Test Helpers
// =============================================================================

fn recording() -> (Arc<MemoryBackend>, Arc<dyn LogBackend>) {
    let memory = Arc::new(MemoryBackend::new());
    let backend: Arc<dyn LogBackend> = memory.clone();
    (memory, backend)
}

/// An in-memory stand-in for standard error.
#[derive(Clone, Default)]
struct StderrCapture(Arc<Mutex<Vec<u8>>>);

impl Write for StderrCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl StderrCapture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

struct Connection {
    logger: Logger,
}

impl HasLogger for Connection {
    fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl Connection {
    fn drop_peer(&self, listener: &Listener) {
        log_warning!(self, "peer {} dropped", 7);
        log_info!(listener, "slot {} free", 7);
    }
}

struct Listener {
    logger: DefaultLogger<Listener, 3>,
}

impl HasLogger for Listener {
    fn logger(&self) -> &Logger {
        &self.logger
    }
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn test_construct_registers_domain() {
    let (memory, backend) = recording();
    let logger = Logger::with_backend("Net::Connection", "blue", backend, LoggerConfig::new());

    assert_eq!(memory.registered_names(), vec!["Net::Connection".to_string()]);
    assert_ne!(logger.log_domain(), LogDomain::UNINITIALIZED);
}

#[test]
fn test_construct_then_drop_pairs_calls() {
    let (memory, backend) = recording();
    drop(Logger::with_backend("Net::Connection", "blue", backend, LoggerConfig::new()));

    let calls = memory.calls();
    assert_eq!(calls.len(), 2);
    let BackendCall::Register { domain, .. } = &calls[0] else {
        panic!("expected a registration first, got {:?}", calls[0]);
    };
    assert_eq!(calls[1], BackendCall::Dispose(*domain));
}

#[test]
fn test_repeated_renames_keep_one_live_handle() {
    let (memory, backend) = recording();
    let mut logger = Logger::with_backend("a", "red", backend, LoggerConfig::new());

    for name in ["b", "c", "d", "e"] {
        logger.set_domain_str(name);
        assert_eq!(memory.live_domains(), vec![logger.log_domain()]);
    }

    drop(logger);
    assert!(memory.live_domains().is_empty());
    assert_eq!(memory.disposed().len(), 5);
}

#[test]
fn test_messages_after_rename_use_new_handle() {
    let (memory, backend) = recording();
    let mut logger = Logger::with_backend("old", "red", backend, LoggerConfig::new());
    let old = logger.log_domain();

    logger.set_domain_str("new");
    logger.info(format_args!("after rename"));

    let emitted = memory.emitted();
    assert_eq!(emitted.len(), 1);
    assert_ne!(emitted[0].0, old);
    assert_eq!(emitted[0].0, logger.log_domain());
}

// =============================================================================
// Call shapes
// =============================================================================

#[test]
fn test_self_and_other_instance_forms() {
    let (memory, backend) = recording();
    let connection = Connection {
        logger: Logger::with_backend(
            "Net::Connection",
            "blue",
            backend.clone(),
            LoggerConfig::new(),
        ),
    };
    let listener = Listener {
        logger: DefaultLogger::with_backend(backend, LoggerConfig::new()),
    };

    connection.drop_peer(&listener);

    assert_eq!(
        memory.emitted(),
        vec![
            (
                connection.logger.log_domain(),
                LogLevel::Warning,
                "peer 7 dropped".to_string()
            ),
            (
                listener.logger.log_domain(),
                LogLevel::Info,
                "slot 7 free".to_string()
            ),
        ]
    );
    assert_eq!(listener.logger.domain_str(), "Listener");
}

#[test]
fn test_every_level_reaches_backend() {
    let (memory, backend) = recording();
    let logger = Logger::with_backend("Levels", "green", backend, LoggerConfig::new());

    log_debug!(logger, "d");
    log_info!(logger, "i");
    log_warning!(logger, "w");
    log_error!(logger, "e");
    log_critical!(logger, "c");

    let levels: Vec<LogLevel> = memory.emitted().into_iter().map(|(_, l, _)| l).collect();
    assert_eq!(levels, LogLevel::ALL.to_vec());
}

// =============================================================================
// Fallback
// =============================================================================

#[test]
fn test_fallback_error_line() {
    let stderr = StderrCapture::default();
    let backend: Arc<dyn LogBackend> = Arc::new(FallbackBackend::with_writer(stderr.clone()));
    let logger = Logger::with_backend("Net::Connection", "blue", backend, LoggerConfig::new());

    log_error!(logger, "connection lost");

    assert_eq!(stderr.contents(), "connection lost\n");
    assert_eq!(logger.log_domain(), LogDomain::UNINITIALIZED);
}

// =============================================================================
// Threads
// =============================================================================

#[test]
fn test_shared_logger_across_threads() {
    let (memory, backend) = recording();
    let logger = Arc::new(Logger::with_backend("Workers", "cyan", backend, LoggerConfig::new()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for j in 0..10 {
                    log_debug!(logger, "worker {} step {}", i, j);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(memory.messages().len(), 40);
    assert_eq!(memory.registered_names().len(), 1);
}

//! Loggers named after a type.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use super::{global, HasLogger, LogBackend, Logger, LoggerConfig};

/// A [`Logger`] whose domain is the name of `T` and whose color is palette
/// entry `C`.
///
/// The domain is `T`'s type name with every occurrence of its enclosing
/// module path removed, so `my_app::net::Connection<my_app::net::Tcp>` logs
/// as `Connection<Tcp>`.
///
/// ```
/// use veleslog::log::{DefaultLogger, LoggerConfig, NullBackend};
/// use std::sync::Arc;
///
/// mod net {
///     pub struct Connection;
/// }
///
/// let logger = DefaultLogger::<net::Connection, 3>::with_backend(Arc::new(NullBackend), LoggerConfig::new());
/// assert_eq!(logger.domain_str(), "Connection");
/// ```
pub struct DefaultLogger<T, const C: u32 = 0> {
    logger: Logger,
    _type: PhantomData<fn() -> T>,
}

impl<T, const C: u32> DefaultLogger<T, C> {
    /// Create against the globally installed backend.
    pub fn new() -> Self {
        Self::from_logger(Logger::new(Self::domain_name(), Logger::get_color_by_index(C)))
    }

    /// Create against an explicit backend.
    pub fn with_backend(backend: Arc<dyn LogBackend>, config: LoggerConfig) -> Self {
        Self::from_logger(Logger::with_backend(
            Self::domain_name(),
            Logger::get_color_by_index(C),
            backend,
            config,
        ))
    }

    /// Create against the global backend, stripping `prefix` instead of the
    /// module path of `T`.
    pub fn with_namespace(prefix: &str) -> Self {
        Self::with_namespace_and_backend(prefix, global::backend(), global::logger_config())
    }

    /// Create against an explicit backend, stripping `prefix` instead of the
    /// module path of `T`.
    pub fn with_namespace_and_backend(
        prefix: &str,
        backend: Arc<dyn LogBackend>,
        config: LoggerConfig,
    ) -> Self {
        let name = strip_namespace(&Logger::demangle(type_name::<T>()), prefix);
        Self::from_logger(Logger::with_backend(
            name,
            Logger::get_color_by_index(C),
            backend,
            config,
        ))
    }

    /// The domain name derived from `T`.
    pub fn domain_name() -> String {
        let name = Logger::demangle(type_name::<T>());
        let prefix = enclosing_namespace(&name).to_string();
        strip_namespace(&name, &prefix)
    }

    /// Unwrap the underlying logger.
    pub fn into_inner(self) -> Logger {
        self.logger
    }

    fn from_logger(logger: Logger) -> Self {
        Self {
            logger,
            _type: PhantomData,
        }
    }
}

impl<T, const C: u32> Default for DefaultLogger<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const C: u32> Clone for DefaultLogger<T, C> {
    fn clone(&self) -> Self {
        Self::from_logger(self.logger.clone())
    }
}

impl<T, const C: u32> fmt::Debug for DefaultLogger<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DefaultLogger").field(&self.logger).finish()
    }
}

impl<T, const C: u32> Deref for DefaultLogger<T, C> {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        &self.logger
    }
}

impl<T, const C: u32> DerefMut for DefaultLogger<T, C> {
    fn deref_mut(&mut self) -> &mut Logger {
        &mut self.logger
    }
}

impl<T, const C: u32> HasLogger for DefaultLogger<T, C> {
    fn logger(&self) -> &Logger {
        &self.logger
    }
}

/// Remove every occurrence of `prefix` from `symbol`.
///
/// Removal repeats until no occurrence is left, including ones formed by
/// joining the text around an earlier removal. An empty prefix removes
/// nothing.
pub fn strip_namespace(symbol: &str, prefix: &str) -> String {
    let mut result = symbol.to_string();
    if prefix.is_empty() {
        return result;
    }
    while let Some(pos) = result.find(prefix) {
        result.replace_range(pos..pos + prefix.len(), "");
    }
    result
}

/// Module path of the outermost type in `name`, including the trailing `::`.
///
/// Returns an empty string for names that do not start with a path, such as
/// references, tuples and slices.
pub fn enclosing_namespace(name: &str) -> &str {
    let head_end = name
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == ':'))
        .unwrap_or(name.len());
    match name[..head_end].rfind("::") {
        Some(pos) => &name[..pos + 2],
        None => "",
    }
}

/// Implement [`ClassLogger`](crate::log::ClassLogger) for a type with a lazily
/// created [`DefaultLogger`] on the global backend.
///
/// ```
/// use veleslog::{impl_class_logger, log_info};
///
/// struct Scheduler;
/// impl_class_logger!(Scheduler, 4);
///
/// log_info!(class Scheduler, "{} jobs queued", 3);
/// ```
#[macro_export]
macro_rules! impl_class_logger {
    ($class:ty) => {
        $crate::impl_class_logger!($class, 0);
    };
    ($class:ty, $color:expr) => {
        impl $crate::log::ClassLogger for $class {
            fn class_logger() -> &'static $crate::log::Logger {
                static LOGGER: ::std::sync::OnceLock<$crate::log::Logger> =
                    ::std::sync::OnceLock::new();
                LOGGER.get_or_init(|| {
                    $crate::log::DefaultLogger::<$class, { $color }>::new().into_inner()
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{ClassLogger, MemoryBackend};

    #[allow(non_snake_case, dead_code)]
    mod MyNamespace {
        pub struct Widget;
        pub struct Pair<A, B>(A, B);
    }

    struct Gauge;
    crate::impl_class_logger!(Gauge, 9);

    fn memory() -> Arc<dyn LogBackend> {
        Arc::new(MemoryBackend::new())
    }

    #[test]
    fn test_widget_domain_and_color() {
        let logger =
            DefaultLogger::<MyNamespace::Widget, 2>::with_backend(memory(), LoggerConfig::new());
        assert_eq!(logger.domain_str(), "Widget");
        assert_eq!(logger.color(), Logger::get_color_by_index(2));
    }

    #[test]
    fn test_default_color_index_is_zero() {
        let logger =
            DefaultLogger::<MyNamespace::Widget>::with_backend(memory(), LoggerConfig::new());
        assert_eq!(logger.color(), Logger::get_color_by_index(0));
    }

    #[test]
    fn test_generic_arguments_are_stripped_too() {
        let name = DefaultLogger::<MyNamespace::Pair<MyNamespace::Widget, u8>>::domain_name();
        assert_eq!(name, "Pair<Widget, u8>");
        assert!(!name.contains("MyNamespace::"));
    }

    #[test]
    fn test_foreign_namespace_is_kept() {
        let name = DefaultLogger::<MyNamespace::Pair<String, u8>>::domain_name();
        assert_eq!(name, "Pair<alloc::string::String, u8>");
    }

    #[test]
    fn test_with_namespace_strips_given_prefix() {
        let logger = DefaultLogger::<MyNamespace::Widget, 2>::with_namespace_and_backend(
            "veleslog::log::default_logger::tests::MyNamespace::",
            memory(),
            LoggerConfig::new(),
        );
        assert_eq!(logger.domain_str(), "Widget");
        assert_eq!(logger.color(), Logger::get_color_by_index(2));
        assert!(logger.log_domain().is_registered());
    }

    #[test]
    fn test_with_namespace_partial_prefix() {
        let logger = DefaultLogger::<MyNamespace::Widget>::with_namespace_and_backend(
            "veleslog::log::",
            memory(),
            LoggerConfig::new(),
        );
        assert_eq!(logger.domain_str(), "default_logger::tests::MyNamespace::Widget");
    }

    #[test]
    fn test_with_namespace_absent_prefix_keeps_name() {
        let logger = DefaultLogger::<MyNamespace::Widget>::with_namespace_and_backend(
            "Elsewhere::",
            memory(),
            LoggerConfig::new(),
        );
        assert_eq!(
            logger.domain_str(),
            "veleslog::log::default_logger::tests::MyNamespace::Widget"
        );
    }

    #[test]
    fn test_with_namespace_uses_global_backend() {
        let logger = DefaultLogger::<MyNamespace::Widget, 1>::with_namespace(
            "veleslog::log::default_logger::tests::",
        );
        assert_eq!(logger.domain_str(), "MyNamespace::Widget");
        assert_eq!(logger.color(), Logger::get_color_by_index(1));
    }

    #[test]
    fn test_strip_namespace_removes_all_occurrences() {
        assert_eq!(strip_namespace("Veles::Widget", "Veles::"), "Widget");
        assert_eq!(
            strip_namespace("Veles::Map<Veles::Key, Veles::Value>", "Veles::"),
            "Map<Key, Value>"
        );
        assert_eq!(strip_namespace("VeVeles::les::Widget", "Veles::"), "Widget");
        assert_eq!(strip_namespace("Widget", "Veles::"), "Widget");
        assert_eq!(strip_namespace("Veles::Widget", ""), "Veles::Widget");
    }

    #[test]
    fn test_strip_namespace_never_leaves_prefix() {
        let prefix = "MyNamespace::";
        for symbol in [
            "",
            "MyNamespace::",
            "MyNamespace::MyNamespace::X",
            "MyNameMyNamespace::space::X",
            "a<MyNamespace::b, MyNamespace::c>",
        ] {
            assert!(!strip_namespace(symbol, prefix).contains(prefix), "{symbol}");
        }
    }

    #[test]
    fn test_enclosing_namespace() {
        assert_eq!(enclosing_namespace("a::b::Widget"), "a::b::");
        assert_eq!(enclosing_namespace("a::b::Widget<c::D>"), "a::b::");
        assert_eq!(enclosing_namespace("Widget"), "");
        assert_eq!(enclosing_namespace("&a::Widget"), "");
        assert_eq!(enclosing_namespace("(a::B, c::D)"), "");
    }

    #[test]
    fn test_deref_and_into_inner() {
        let mut logger =
            DefaultLogger::<MyNamespace::Widget, 5>::with_backend(memory(), LoggerConfig::new());
        logger.set_domain_str("Renamed");
        let inner = logger.into_inner();
        assert_eq!(inner.domain_str(), "Renamed");
    }

    #[test]
    fn test_class_logger_is_shared() {
        let first = Gauge::class_logger();
        let second = Gauge::class_logger();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.domain_str(), "Gauge");
        assert_eq!(first.color(), Logger::get_color_by_index(9));
    }
}

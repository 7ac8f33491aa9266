//! `veleslog demangle`: show the domain name derived from a symbol.

use veleslog::log::{enclosing_namespace, strip_namespace, Logger};

/// Print the demangled symbol and the domain a `DefaultLogger` would use.
pub fn run(symbol: &str) {
    let demangled = Logger::demangle(symbol);
    let domain = strip_namespace(&demangled, enclosing_namespace(&demangled));
    println!("symbol:    {}", symbol);
    println!("demangled: {}", demangled);
    println!("domain:    {}", domain);
}

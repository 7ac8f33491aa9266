//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Show the effective configuration
//! - [`demangle`] - Demangle a symbol into a domain name
//! - [`emit`] - Write one message under a domain
//! - [`palette`] - List the domain color palette

pub mod config;
pub mod demangle;
pub mod emit;
pub mod palette;

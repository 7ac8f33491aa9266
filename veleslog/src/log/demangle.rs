//! Symbol demangling for domain names.

use rustc_demangle::try_demangle;

/// Convert a mangled Rust symbol into its readable path.
///
/// Both the legacy (`_ZN...E`) and v0 (`_R...`) manglings are recognised. The
/// trailing hash of legacy symbols is dropped. Anything that is not a mangled
/// symbol, including an already readable type name, is returned unchanged.
pub fn demangle(symbol: &str) -> String {
    match try_demangle(symbol) {
        Ok(demangled) => format!("{:#}", demangled),
        Err(_) => symbol.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demangles_legacy_symbol() {
        assert_eq!(
            demangle("_ZN4test6Widget17h0123456789abcdefE"),
            "test::Widget"
        );
    }

    #[test]
    fn test_readable_names_pass_through() {
        assert_eq!(demangle("veleslog::log::Logger"), "veleslog::log::Logger");
        assert_eq!(demangle("Widget<u32>"), "Widget<u32>");
        assert_eq!(demangle(""), "");
    }

    #[test]
    fn test_demangle_is_idempotent() {
        for symbol in [
            "_ZN4test6Widget17h0123456789abcdefE",
            "core::option::Option<alloc::string::String>",
            "not a symbol",
        ] {
            let once = demangle(symbol);
            assert_eq!(demangle(&once), once);
        }
    }
}

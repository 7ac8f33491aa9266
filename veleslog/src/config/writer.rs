//! INI serialization logic for converting `ConfigFile` → INI string.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let logging = &config.logging;
    let log_dir = logging
        .log_dir
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    format!(
        r#"[logging]
; Backend loggers dispatch to:
;   tracing  - structured events with a domain field
;   fallback - bare lines on standard error
backend = {}
; Filter directive (RUST_LOG takes precedence), e.g. "info" or "veleslog=debug"
filter = {}
; When loggers register their domain: immediate or deferred (first message)
registration = {}
; Log a debug line when a domain registers
announce = {}
; Render domain names in their palette color (terminal only, needs ansi)
colored_domains = {}
; ANSI escapes on terminal output
ansi = {}
; Directory for the session log file (leave empty for no file output)
log_dir = {}
"#,
        logging.backend,
        logging.filter,
        logging.registration.as_str(),
        logging.announce,
        logging.colored_domains,
        logging.ansi,
        log_dir,
    )
}

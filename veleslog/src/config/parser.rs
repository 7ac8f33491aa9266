//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("backend") {
            config.logging.backend = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "logging".to_string(),
                key: "backend".to_string(),
                value: v.to_string(),
                reason: "must be 'tracing' or 'fallback'".to_string(),
            })?;
        }
        if let Some(v) = section.get("filter") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.filter = v.to_string();
            }
        }
        if let Some(v) = section.get("registration") {
            config.logging.registration =
                v.parse().map_err(|_| ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "registration".to_string(),
                    value: v.to_string(),
                    reason: "must be 'immediate' or 'deferred'".to_string(),
                })?;
        }
        if let Some(v) = section.get("announce") {
            config.logging.announce = parse_bool(v);
        }
        if let Some(v) = section.get("colored_domains") {
            config.logging.colored_domains = parse_bool(v);
        }
        if let Some(v) = section.get("ansi") {
            config.logging.ansi = parse_bool(v);
        }
        if let Some(v) = section.get("log_dir") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.log_dir = Some(expand_tilde(v));
            }
        }
    }

    Ok(config)
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

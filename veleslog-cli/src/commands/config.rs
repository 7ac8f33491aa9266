//! `veleslog config`: print the effective configuration.

use std::path::Path;
use veleslog::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Print where the configuration comes from and its INI form.
pub fn run(config_path: Option<&Path>) -> Result<(), CliError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path);
    let config = ConfigFile::load_from(&path)?;

    if path.exists() {
        println!("; loaded from {}", path.display());
    } else {
        println!("; {} not found, showing defaults", path.display());
    }
    print!("{}", config.to_config_string());
    Ok(())
}

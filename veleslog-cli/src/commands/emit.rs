//! `veleslog emit`: write one message under a domain.

use clap::Args;
use veleslog::log::{LogLevel, Logger};

use crate::error::CliError;

/// Arguments for `veleslog emit`.
#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Domain to log under (e.g. Net::Connection)
    #[arg(long)]
    pub domain: String,

    /// Palette color name or index, or a literal escape sequence
    #[arg(long, default_value = "")]
    pub color: String,

    /// Severity: debug, info, warning, error or critical
    #[arg(long, default_value = "info")]
    pub level: String,

    /// Message words, joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}

/// Log the message through the configured backend.
pub fn run(args: &EmitArgs) -> Result<(), CliError> {
    let level: LogLevel = args.level.parse().map_err(CliError::InvalidArgument)?;
    let message = args.message.join(" ");
    let message = message.trim_end_matches(['\n', '.']);
    if message.is_empty() {
        return Err(CliError::InvalidArgument("message is empty".to_string()));
    }

    let logger = Logger::new(args.domain.as_str(), resolve_color_arg(&args.color));
    logger.log(level, format_args!("{}", message));
    Ok(())
}

/// Palette indices are accepted in addition to names.
fn resolve_color_arg(color: &str) -> String {
    match color.trim().parse::<u32>() {
        Ok(index) => Logger::get_color_by_index(index).to_string(),
        Err(_) => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veleslog::log::Color;

    #[test]
    fn test_index_colors_wrap() {
        assert_eq!(resolve_color_arg("3"), Color::Blue.ansi_code());
        assert_eq!(resolve_color_arg("17"), Color::Blue.ansi_code());
    }

    #[test]
    fn test_named_colors_pass_through() {
        assert_eq!(resolve_color_arg("light_red"), "light_red");
        assert_eq!(resolve_color_arg(""), "");
    }
}

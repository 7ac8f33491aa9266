//! veleslog CLI - Command-line interface
//!
//! Emits messages through the configured backend and inspects the palette,
//! symbol demangling and configuration used by the library.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use veleslog::config::{config_file_path, ConfigFile};
use veleslog::logging::init_logging;

use commands::emit::EmitArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "veleslog")]
#[command(version = veleslog::VERSION)]
#[command(about = "Per-type log domains for Veles components", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.veles/logging.ini)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log one message under a domain
    Emit(EmitArgs),

    /// List the domain color palette
    Palette {
        /// Print names only, without color samples
        #[arg(long)]
        plain: bool,
    },

    /// Demangle a symbol and show the domain it maps to
    Demangle {
        /// Mangled or plain symbol
        symbol: String,
    },

    /// Show the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Emit(args) => {
            let path = cli.config.unwrap_or_else(config_file_path);
            let config = ConfigFile::load_from(&path)?;
            let _guard = init_logging(&config.logging)?;
            commands::emit::run(&args)
        }
        Commands::Palette { plain } => {
            commands::palette::run(plain);
            Ok(())
        }
        Commands::Demangle { symbol } => {
            commands::demangle::run(&symbol);
            Ok(())
        }
        Commands::Config => commands::config::run(cli.config.as_deref()),
    }
}

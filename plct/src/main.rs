//! plct - command-line front end for the PLC lexer.
//!
//! This is the main entry point for the plct CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{error_messages, OutputFormat};
use commands::{run_check, run_lex, CheckArgs, LexArgs};
use config::Config;
use error::{PlctError, Result};

/// plct - tokenize and check PLC source files
#[derive(Parser, Debug)]
#[command(name = "plct")]
#[command(author = "PLC Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check PLC source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "PLCT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PLCT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "PLCT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the plct CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file
    ///
    /// Writes one token per line as KIND, start offset and literal
    /// separated by tabs, or a JSON array with `--format json`.
    Lex(LexCommand),

    /// Check that a source file lexes
    ///
    /// Prints the token count, or the first error with its line and column.
    Check(CheckCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file to lex (`-` reads standard input)
    file: PathBuf,

    /// Output format (text, json; default: from config)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source file to check (`-` reads standard input)
    file: PathBuf,
}

/// Main entry point for the plct CLI.
///
/// Parses command-line arguments, loads configuration, initializes
/// logging, and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Flags win over the config file
    let verbose = cli.verbose || config.verbose;
    let color = config.color && !cli.no_color;
    init_logging(verbose, color)?;
    debug!(?config, "configuration loaded");

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token output on stdout stays clean.
fn init_logging(verbose: bool, color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PlctError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, &config),
        Commands::Check(args) => run_check(CheckArgs { file: args.file }),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, config: &Config) -> Result<()> {
    let format = match args.format {
        Some(name) => OutputFormat::from_name(&name).ok_or_else(|| {
            PlctError::Validation(format!("{}: {}", error_messages::UNKNOWN_FORMAT, name))
        })?,
        None => config.lex_format()?,
    };

    run_lex(LexArgs {
        file: args.file,
        format,
    })
}

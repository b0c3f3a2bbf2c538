//! CLI module for the Slate parser.
//!
//! ## Usage
//!
//! - `slate <file>` - parse a source file and print the CST graph dump
//! - `slate --tokens <file>` - dump the raw token stream (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. Command
//! functions return `CliResult<T>` instead of calling `process::exit`; only
//! the top-level `run()` function handles errors and exits.

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Slate parser
#[derive(Parser, Debug)]
#[command(name = "slate")]
#[command(version = VERSION)]
#[command(about = "Parse Slate source files and dump the concrete syntax tree", long_about = None)]
pub struct Cli {
    /// Source file to parse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Dump the raw token stream instead of parsing (debug)
    #[arg(long)]
    pub tokens: bool,
}

/// Parse arguments, dispatch, and exit. The only place that exits.
pub fn run() {
    let cli = Cli::parse();

    let result = if cli.tokens {
        commands::dump_tokens(&cli.file)
    } else {
        commands::parse_file(&cli.file)
    };

    match result {
        Ok(code) => process::exit(code.0),
        Err(err) => {
            eprintln!("{}", err.message);
            process::exit(err.exit_code.0);
        }
    }
}

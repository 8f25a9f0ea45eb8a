//! CLI for the mvm conformance-test driver
//!
//! ## Options
//!
//! - `-e, --executable <PATH>` - target binary (default `./build/<kind>/mvm`)
//! - `-k, --kind <debug|opt>` - build kind used to derive the default path
//! - `-t, --testdir <DIR>` - tests directory (default `./tests`)
//! - `-m, --mode <MODE>` - execution strategy passed to the target
//! - `--oracle <diff|keyword>` - how captured output is judged
//! - `-v, -x, --filter` - runner conveniences
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::{BuildKind, Config, OracleKind};
use crate::report::ConsoleReporter;
use crate::runner::run_suite;
use crate::version::MVMTEST_VERSION;

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
    /// Create a new CLI error with a message and exit code.
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

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Conformance-test driver for the mvm interpreter
#[derive(Parser, Debug)]
#[command(name = "mvmtest")]
#[command(version = MVMTEST_VERSION)]
#[command(about = "Run mvm conformance tests", long_about = None)]
pub struct Cli {
    /// Path to the target executable (default: ./build/<kind>/mvm)
    #[arg(short = 'e', long = "executable", value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// Executable kind, selects the default binary subpath
    #[arg(short = 'k', long = "kind", value_enum, default_value_t = BuildKind::Debug)]
    pub kind: BuildKind,

    /// Tests directory
    #[arg(short = 't', long = "testdir", value_name = "DIR", default_value = "./tests")]
    pub testdir: PathBuf,

    /// Execution strategy passed to the target as its first argument
    #[arg(short = 'm', long = "mode", value_name = "MODE", default_value = "interpreter")]
    pub mode: String,

    /// Oracle used to judge captured output
    #[arg(long = "oracle", value_enum, default_value_t = OracleKind::Diff)]
    pub oracle: OracleKind,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Stop on first failure
    #[arg(short = 'x', long = "exitfirst")]
    pub stop_on_fail: bool,

    /// Only run tests whose id contains this substring
    #[arg(long = "filter", value_name = "SUBSTR")]
    pub filter: Option<String>,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. The command
/// implementation returns `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the test run and map its summary to an exit code.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = Config::resolve(cli.executable, cli.kind, cli.testdir, cli.mode, cli.oracle);
    let mut reporter = ConsoleReporter::new(cli.verbose);

    let summary = run_suite(&config, cli.filter.as_deref(), cli.stop_on_fail, &mut reporter)
        .map_err(|e| CliError::failure(format!("Error: {e}")))?;

    if summary.success() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Per-test failures were already enumerated by the reporter
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

// ============================================================================
// Tests
// ============================================================================

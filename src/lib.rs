#![forbid(unsafe_code)]
//! mvm Conformance-Test Driver
//!
//! `mvmtest` discovers `.mvm` test programs, runs each through the `mvm`
//! interpreter binary, and judges pass/fail by comparing captured output
//! against an expected baseline: either an exact unified diff (via the system
//! `diff` utility) or a looser keyword-count equivalence for checks on
//! transformed source.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod oracle;
pub mod process;
pub mod report;
pub mod runner;
pub mod version;

pub use config::{BuildKind, Config, OracleKind};
pub use discovery::{TestUnit, discover_tests};
pub use errors::HarnessError;
pub use oracle::diff::diff_against_baseline;
pub use oracle::keyword::keywords_equivalent;
pub use process::{ExecutionResult, run_target};
pub use report::{ConsoleReporter, TestOutcome, TestReporter, TestSummary};
pub use runner::run_suite;

//! Error taxonomy for the execution-and-comparison engine
//!
//! Infrastructure failures (a target that cannot launch, a broken diff tool,
//! an unreadable test directory) abort the whole run. A non-zero exit from
//! the target is a hard failure for that one test and is reported as its own
//! category, distinct from an output mismatch.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while driving the target executable and its oracles.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The target executable could not be launched at all.
    #[error("failed to launch target executable `{path}`: {source}")]
    TargetSpawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target executable ran but exited non-zero. Never forwarded to a
    /// comparator; callers report it as a distinct per-test failure.
    #[error("target executable exited with code {code}")]
    ProcessFailure { code: i32 },

    /// The diff utility could not run, or reported trouble of its own.
    #[error("diff utility failed: {0}")]
    DiffTool(String),

    /// The test directory could not be scanned.
    #[error("failed to scan test directory `{path}`: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

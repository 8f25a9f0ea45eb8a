//! Target executable invocation
//!
//! Runs `<executable> <mode> <file>` with an empty input channel, captures
//! standard output, and classifies the exit status. Standard error is
//! discarded. Blocks until the target exits; there is no timeout, so a hung
//! target hangs the run.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::HarnessError;

/// Captured output of one successful target invocation.
#[derive(Debug)]
pub struct ExecutionResult {
    /// Raw bytes from the target's standard output.
    pub stdout: Vec<u8>,
    /// Exit code of the target. Always zero here: non-zero exits surface as
    /// [`HarnessError::ProcessFailure`] instead of a result.
    pub exit_code: i32,
}

/// Run the target executable against one test file.
///
/// A non-zero exit is a hard failure for that test and must not be fed to a
/// comparator; the caller gets [`HarnessError::ProcessFailure`] carrying the
/// exit code. A target that cannot be spawned at all is an infrastructure
/// error that should abort the run.
pub fn run_target(
    executable: &Path,
    mode: &str,
    source: &Path,
) -> Result<ExecutionResult, HarnessError> {
    tracing::debug!(bin = %executable.display(), mode, file = %source.display(), "running target");

    let output = Command::new(executable)
        .arg(mode)
        .arg(source)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| HarnessError::TargetSpawn {
            path: executable.to_path_buf(),
            source: e,
        })?;

    if !output.status.success() {
        // code() is None for signal-terminated children; fold into -1
        let code = output.status.code().unwrap_or(-1);
        return Err(HarnessError::ProcessFailure { code });
    }

    Ok(ExecutionResult {
        stdout: output.stdout,
        exit_code: 0,
    })
}

//! Unified-diff comparison via the system `diff` utility
//!
//! The expected file is passed by path; the actual output is streamed to the
//! utility's standard input. The captured output is the verdict: empty means
//! the two are equivalent under whitespace-insensitive line comparison.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use crate::errors::HarnessError;

/// Name of the external line-diff utility.
const DIFF_BIN: &str = "diff";

/// Compare `actual` output against the expected-output file.
///
/// Invokes `diff -u -b <expect_file> -`. Returns the literal diff text;
/// non-empty text contains the added/removed line markers for the caller to
/// attach to its failure report. A diff utility that cannot run at all is an
/// infrastructure error, never a test failure.
pub fn diff_against_baseline(expect_file: &Path, actual: &[u8]) -> Result<String, HarnessError> {
    let mut child = Command::new(DIFF_BIN)
        .arg("-u")
        .arg("-b")
        .arg(expect_file)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| HarnessError::DiffTool(format!("failed to spawn `{DIFF_BIN}`: {e}")))?;

    // Feed actual output on a separate thread so neither pipe can fill up
    // while the other end is blocked.
    let Some(mut stdin) = child.stdin.take() else {
        return Err(HarnessError::DiffTool("diff stdin unavailable".to_string()));
    };
    let actual = actual.to_vec();
    let writer = thread::spawn(move || stdin.write_all(&actual));

    let output = child
        .wait_with_output()
        .map_err(|e| HarnessError::DiffTool(format!("failed to read diff output: {e}")))?;

    match writer.join() {
        Ok(Ok(())) => {}
        // A diff that bails out early (e.g. unreadable expected file) closes
        // its stdin; the exit status below carries the real story.
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
        Ok(Err(e)) => {
            return Err(HarnessError::DiffTool(format!(
                "failed to feed diff input: {e}"
            )));
        }
        Err(_) => {
            return Err(HarnessError::DiffTool(
                "diff input writer panicked".to_string(),
            ));
        }
    }

    // diff exits 0 on no differences, 1 on differences; both are successful
    // comparisons. Anything else means the tool itself is broken.
    match output.status.code() {
        Some(0) | Some(1) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
        code => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(HarnessError::DiffTool(format!(
                "`{DIFF_BIN}` exited with {}: {}",
                code.map_or_else(|| "signal".to_string(), |c| c.to_string()),
                stderr.trim()
            )))
        }
    }
}

//! Test discovery
//!
//! Scans the test directory for `*.mvm` files and derives each test's
//! identifier from the run of word characters and hyphens immediately
//! preceding the extension. Files that yield no identifier are silently
//! skipped, so auxiliary files can live next to the tests. Only the
//! directory listing is read here; file contents are not touched until a
//! test actually runs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::HarnessError;

/// Extension a test-definition file must carry.
const TEST_EXTENSION: &str = "mvm";

/// One discovered test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestUnit {
    /// Stable identifier derived from the filename.
    pub id: String,
    /// Path to the `.mvm` source file.
    pub source_path: PathBuf,
    /// Directory containing the test and its baseline.
    pub test_dir: PathBuf,
}

impl TestUnit {
    /// Path of the expected-output baseline for this unit.
    pub fn baseline_path(&self) -> PathBuf {
        self.test_dir.join(format!("{}.expect", self.id))
    }
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Identifier of a test file: the longest run of word characters and hyphens
/// at the end of `stem`. `None` when that run is empty.
fn extract_id(stem: &str) -> Option<&str> {
    let start = stem
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word(*c))
        .last()
        .map(|(i, _)| i)?;
    Some(&stem[start..])
}

/// Scan `testdir` for `*.mvm` test files.
///
/// Results are sorted by id so runs are deterministic.
#[tracing::instrument(skip_all, fields(testdir = %testdir.display()))]
pub fn discover_tests(testdir: &Path) -> Result<Vec<TestUnit>, HarnessError> {
    let entries = fs::read_dir(testdir).map_err(|e| HarnessError::Discovery {
        path: testdir.to_path_buf(),
        source: e,
    })?;

    let mut units = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| HarnessError::Discovery {
            path: testdir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != TEST_EXTENSION) {
            continue;
        }
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(extract_id);
        let Some(id) = id else {
            tracing::debug!(file = %path.display(), "skipping non-test file");
            continue;
        };
        units.push(TestUnit {
            id: id.to_string(),
            source_path: path.clone(),
            test_dir: testdir.to_path_buf(),
        });
    }

    units.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::debug!(count = units.len(), "discovered tests");
    Ok(units)
}

//! Suite orchestration
//!
//! Sequentially executes every discovered test and feeds outcomes to the
//! reporter. Per-test failures (output mismatch, keyword mismatch, target
//! exiting non-zero) never halt the run; infrastructure failures (target
//! cannot launch, diff tool broken, unreadable test directory) abort it.

use std::fs;
use std::time::Instant;

use crate::config::{Config, OracleKind};
use crate::discovery::{TestUnit, discover_tests};
use crate::errors::HarnessError;
use crate::oracle::diff::diff_against_baseline;
use crate::oracle::keyword::keywords_equivalent;
use crate::process::run_target;
use crate::report::{TestOutcome, TestReporter, TestSummary};

/// Run the whole suite under `config`.
///
/// `filter` restricts the run to units whose id contains the substring;
/// `stop_on_fail` ends the loop after the first failing unit. The returned
/// summary decides the process exit code at the CLI layer.
#[tracing::instrument(skip_all, fields(testdir = %config.testdir.display(), mode = %config.mode))]
pub fn run_suite(
    config: &Config,
    filter: Option<&str>,
    stop_on_fail: bool,
    reporter: &mut dyn TestReporter,
) -> Result<TestSummary, HarnessError> {
    let start = Instant::now();

    let units: Vec<TestUnit> = discover_tests(&config.testdir)?
        .into_iter()
        .filter(|u| filter.is_none_or(|kw| u.id.contains(kw)))
        .collect();

    reporter.on_collection_complete(units.len());

    let mut summary = TestSummary::default();
    for unit in &units {
        reporter.on_test_start(unit);

        let outcome = run_one(config, unit)?;

        summary.total += 1;
        if outcome.is_failure() {
            summary.failed += 1;
        } else {
            summary.passed += 1;
        }
        reporter.on_test_complete(unit, &outcome);

        if stop_on_fail && outcome.is_failure() {
            break;
        }
    }

    summary.duration = start.elapsed();
    reporter.on_run_complete(&summary);
    Ok(summary)
}

/// Execute and judge a single unit.
///
/// Only infrastructure errors propagate; a failing target or a mismatching
/// output comes back as an outcome so the run can continue.
fn run_one(config: &Config, unit: &TestUnit) -> Result<TestOutcome, HarnessError> {
    let start = Instant::now();

    let result = match run_target(&config.executable, &config.mode, &unit.source_path) {
        Ok(result) => result,
        Err(HarnessError::ProcessFailure { code }) => {
            // Hard failure for this test; the comparator is never consulted.
            tracing::warn!(test = %unit.id, code, "target executable failed");
            return Ok(TestOutcome::ProcessFailed(start.elapsed(), code));
        }
        Err(other) => return Err(other),
    };

    match config.oracle {
        OracleKind::Diff => {
            let diff = diff_against_baseline(&unit.baseline_path(), &result.stdout)?;
            if diff.is_empty() {
                Ok(TestOutcome::Passed(start.elapsed()))
            } else {
                Ok(TestOutcome::OutputMismatch(start.elapsed(), diff))
            }
        }
        OracleKind::Keyword => {
            let source = fs::read_to_string(&unit.source_path)?;
            let output = String::from_utf8_lossy(&result.stdout);
            if keywords_equivalent(&source, &output) {
                Ok(TestOutcome::Passed(start.elapsed()))
            } else {
                Ok(TestOutcome::KeywordMismatch(start.elapsed()))
            }
        }
    }
}

//! Test reporting
//!
//! The runner talks to a [`TestReporter`] so that output formatting stays
//! separate from execution. This allows for custom output formats (JSON,
//! TAP, etc.) by implementing the trait. The default [`ConsoleReporter`]
//! prints a pytest-style session.

use std::time::Duration;

use crate::discovery::TestUnit;

/// Result of judging one test unit.
#[derive(Debug)]
pub enum TestOutcome {
    Passed(Duration),
    /// The diff oracle found differences; carries the diff text.
    OutputMismatch(Duration, String),
    /// Keyword counts disagreed between source and output.
    KeywordMismatch(Duration),
    /// The target executable itself exited non-zero.
    ProcessFailed(Duration, i32),
}

impl TestOutcome {
    /// True for any of the failing variants.
    pub fn is_failure(&self) -> bool {
        !matches!(self, TestOutcome::Passed(_))
    }
}

/// Summary of a test run.
#[derive(Debug, Default)]
pub struct TestSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl TestSummary {
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

/// Trait for reporting test execution results.
pub trait TestReporter {
    /// Called when test collection is complete
    fn on_collection_complete(&mut self, test_count: usize);

    /// Called when a test run begins
    fn on_test_start(&mut self, _unit: &TestUnit) {}

    /// Called when a test completes
    fn on_test_complete(&mut self, unit: &TestUnit, outcome: &TestOutcome);

    /// Called when all tests have completed
    fn on_run_complete(&mut self, summary: &TestSummary);
}

/// Default console reporter (pytest-style).
#[derive(Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn status_label(&self, outcome: &TestOutcome) -> String {
        match outcome {
            TestOutcome::Passed(d) => {
                if self.verbose {
                    format!("\x1b[32mPASSED\x1b[0m ({:.0}ms)", d.as_millis())
                } else {
                    "\x1b[32mPASSED\x1b[0m".to_string()
                }
            }
            TestOutcome::OutputMismatch(d, _) => {
                if self.verbose {
                    format!("\x1b[31mFAILED\x1b[0m ({:.0}ms)", d.as_millis())
                } else {
                    "\x1b[31mFAILED\x1b[0m".to_string()
                }
            }
            TestOutcome::KeywordMismatch(_) => "\x1b[31mFAILED\x1b[0m (keyword counts differ)".to_string(),
            TestOutcome::ProcessFailed(_, code) => {
                format!("\x1b[31mERROR\x1b[0m (target exited with code {code})")
            }
        }
    }
}

impl TestReporter for ConsoleReporter {
    fn on_collection_complete(&mut self, test_count: usize) {
        if test_count == 0 {
            eprintln!("No tests collected");
            return;
        }
        println!("\x1b[1m=================== test session starts ===================\x1b[0m");
        println!("collected {} item(s)", test_count);
        println!();
    }

    fn on_test_complete(&mut self, unit: &TestUnit, outcome: &TestOutcome) {
        println!("{} {}", unit.id, self.status_label(outcome));

        // Attach diff text so an output mismatch is debuggable from the log
        if let TestOutcome::OutputMismatch(_, diff) = outcome {
            println!("{}", diff.trim_end());
        }
    }

    fn on_run_complete(&mut self, summary: &TestSummary) {
        println!();
        let color = if summary.success() {
            "\x1b[1;32m"
        } else {
            "\x1b[1;31m"
        };

        let mut parts = Vec::new();
        if summary.passed > 0 {
            parts.push(format!("{} passed", summary.passed));
        }
        if summary.failed > 0 {
            parts.push(format!("{} failed", summary.failed));
        }
        if parts.is_empty() {
            parts.push("no tests run".to_string());
        }

        println!(
            "{}=================== {} in {:.2}s ===================\x1b[0m",
            color,
            parts.join(", "),
            summary.duration.as_secs_f64()
        );
    }
}

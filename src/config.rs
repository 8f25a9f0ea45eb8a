//! Run configuration
//!
//! The parsed CLI is folded into one immutable [`Config`] that is passed by
//! reference to discovery and the runner; nothing mutates it after
//! construction.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Name of the target binary when deriving its default location.
const TARGET_BINARY: &str = "mvm";

/// Which build of the target executable to use when `--executable` is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BuildKind {
    #[default]
    Debug,
    Opt,
}

impl BuildKind {
    /// Subdirectory under `./build` holding this kind of binary.
    pub fn as_dir(self) -> &'static str {
        match self {
            BuildKind::Debug => "debug",
            BuildKind::Opt => "opt",
        }
    }
}

impl std::fmt::Display for BuildKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_dir())
    }
}

/// Which oracle judges a test's captured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OracleKind {
    /// Unified diff against the test's `.expect` baseline.
    #[default]
    Diff,
    /// Keyword-count equivalence against the test's own source.
    Keyword,
}

impl std::fmt::Display for OracleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleKind::Diff => f.write_str("diff"),
            OracleKind::Keyword => f.write_str("keyword"),
        }
    }
}

/// Immutable configuration for one test run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the target executable.
    pub executable: PathBuf,
    /// Directory containing `*.mvm` test files and `*.expect` baselines.
    pub testdir: PathBuf,
    /// Execution strategy passed to the target as its first argument.
    pub mode: String,
    /// Oracle used to judge captured output.
    pub oracle: OracleKind,
}

impl Config {
    /// Build a config, deriving the executable location from `kind` when no
    /// explicit path is given.
    pub fn resolve(
        executable: Option<PathBuf>,
        kind: BuildKind,
        testdir: PathBuf,
        mode: String,
        oracle: OracleKind,
    ) -> Self {
        let executable = executable
            .unwrap_or_else(|| Path::new("./build").join(kind.as_dir()).join(TARGET_BINARY));
        Self {
            executable,
            testdir,
            mode,
            oracle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_executable_follows_kind() {
        let config = Config::resolve(
            None,
            BuildKind::Debug,
            PathBuf::from("./tests"),
            "interpreter".to_string(),
            OracleKind::Diff,
        );
        assert_eq!(config.executable, Path::new("./build/debug/mvm"));

        let config = Config::resolve(
            None,
            BuildKind::Opt,
            PathBuf::from("./tests"),
            "interpreter".to_string(),
            OracleKind::Diff,
        );
        assert_eq!(config.executable, Path::new("./build/opt/mvm"));
    }

    #[test]
    fn explicit_executable_wins_over_kind() {
        let config = Config::resolve(
            Some(PathBuf::from("/usr/local/bin/mvm")),
            BuildKind::Opt,
            PathBuf::from("./tests"),
            "jit".to_string(),
            OracleKind::Keyword,
        );
        assert_eq!(config.executable, Path::new("/usr/local/bin/mvm"));
        assert_eq!(config.mode, "jit");
        assert_eq!(config.oracle, OracleKind::Keyword);
    }
}

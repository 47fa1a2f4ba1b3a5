//! Whole-run tests for the harness and the report it produces.


use crate::{Config, Harness, ResultSet};
use std::{io, path::PathBuf};
use tempfile::TempDir;

/// Manages a temporary directory the report is written into
pub struct TestContext {
    /// Root directory for this test
    root: PathBuf,
    /// Temporary directory that will be cleaned up
    _temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> io::Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().into();

        Ok(Self {
            root,
            _temp_dir: temp_dir,
        })
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// A config whose report lands in this context
    pub fn config(&self, file: &str) -> Config {
        Config::new().with_report_path(self.root.join(file))
    }
}

/// Runs `harness`, capturing progress output instead of printing it
pub fn run_quiet(harness: &Harness) -> (ResultSet, String) {
    let mut out = Vec::new();
    let results = harness.run_all_to(&mut out).unwrap();
    (results, String::from_utf8(out).unwrap())
}

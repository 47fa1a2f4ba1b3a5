use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => f.write_str("PASS"),
            Status::Fail => f.write_str("FAIL"),
        }
    }
}

/// Record of one check execution, as it appears in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    test: String,
    status: Status,
    message: String,
}

impl CheckResult {
    pub fn pass(test: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            status: Status::Pass,
            message: message.into(),
        }
    }

    pub fn fail(test: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            status: Status::Fail,
            message: message.into(),
        }
    }

    pub fn test(&self) -> &str {
        &self.test
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ordered results of one run. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<CheckResult>);

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, result: CheckResult) {
        self.0.push(result);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CheckResult> {
        self.0.iter()
    }

    pub fn get(&self, test: &str) -> Option<&CheckResult> {
        self.0.iter().find(|r| r.test == test)
    }

    pub fn passed(&self) -> usize {
        self.count(Status::Pass)
    }

    pub fn failed(&self) -> usize {
        self.count(Status::Fail)
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, status: Status) -> usize {
        self.0.iter().filter(|r| r.status == status).count()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a CheckResult;
    type IntoIter = std::slice::Iter<'a, CheckResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<CheckResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = CheckResult>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

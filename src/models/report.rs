//! Configuration test report

use serde::{Deserialize, Serialize};

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Warning,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Warning => "warning",
        }
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDetail {
    pub test: String,
    pub status: TestStatus,
    pub message: String,
}

/// Tallied results of a configuration test run.
///
/// Each recorded detail bumps exactly one counter, so
/// `passed + failed + warnings == details.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub passed: u32,
    pub failed: u32,
    pub warnings: u32,
    pub details: Vec<TestDetail>,
}

impl TestResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a detail and increment the matching counter
    pub fn record<T: Into<String>, M: Into<String>>(&mut self, test: T, status: TestStatus, message: M) {
        match status {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => self.failed += 1,
            TestStatus::Warning => self.warnings += 1,
        }
        self.details.push(TestDetail {
            test: test.into(),
            status,
            message: message.into(),
        });
    }

    pub fn pass<T: Into<String>, M: Into<String>>(&mut self, test: T, message: M) {
        self.record(test, TestStatus::Passed, message);
    }

    pub fn fail<T: Into<String>, M: Into<String>>(&mut self, test: T, message: M) {
        self.record(test, TestStatus::Failed, message);
    }

    pub fn warn<T: Into<String>, M: Into<String>>(&mut self, test: T, message: M) {
        self.record(test, TestStatus::Warning, message);
    }

    /// First detail recorded under the given test name
    pub fn detail(&self, test: &str) -> Option<&TestDetail> {
        self.details.iter().find(|detail| detail.test == test)
    }

    pub fn total(&self) -> usize {
        self.details.len()
    }

    /// Deployment gate: no check failed. Warnings do not block.
    pub fn is_deployable(&self) -> bool {
        self.failed == 0
    }

    /// One-line summary, e.g. `5 passed, 0 failed, 1 warning(s)`
    pub fn summary(&self) -> String {
        format!("{} passed, {} failed, {} warning(s)", self.passed, self.failed, self.warnings)
    }
}

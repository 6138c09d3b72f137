use serde::{Deserialize, Serialize};

// ============================================================================
// Result model — data extracted from a Robot Framework output.xml
// ============================================================================

/// Outcome of a single test or suite.
///
/// Robot Framework reports `PASS`, `FAIL`, `SKIP` and (for suites that were
/// not executed) `NOT RUN`. Anything that is not a pass or a fail is folded
/// into `Skip` for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    Pass,
    Fail,
    Skip,
}

impl TestStatus {
    /// Map a raw `status` attribute value onto a TestStatus.
    pub fn from_attr(raw: &str) -> Self {
        match raw {
            "PASS" => TestStatus::Pass,
            "FAIL" => TestStatus::Fail,
            _ => TestStatus::Skip,
        }
    }

    /// Uppercase label for display (`PASS`, `FAIL`, `SKIP`).
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Pass => "PASS",
            TestStatus::Fail => "FAIL",
            TestStatus::Skip => "SKIP",
        }
    }

    /// CSS class used by the HTML reporter for row/badge colouring.
    pub fn css_class(&self) -> &'static str {
        match self {
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail",
            TestStatus::Skip => "skip",
        }
    }
}

/// Aggregate statistics and run metadata for one test run.
///
/// Built once by the loader from the `<statistics>` block and the root
/// suite's status element. Consumed by the console and HTML reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total number of tests (always passed + failed + skipped)
    pub total: u64,

    /// Number of passing tests
    pub passed: u64,

    /// Number of failing tests
    pub failed: u64,

    /// Number of skipped tests (0 when the document carries no skip count)
    pub skipped: u64,

    /// Run start timestamp as recorded in the document, or "Unknown"
    pub start_time: String,

    /// Run end timestamp as recorded in the document, or "Unknown"
    pub end_time: String,

    /// Formatted elapsed time ("0h 2m 5s"), or the raw text when it was
    /// not a millisecond count, or "Unknown"
    pub elapsed: String,

    /// Who or what executed the run ("Executed by:" log message, falling
    /// back to the document's generator attribute)
    pub executor: String,

    /// Target environment ("Environment:" log message)
    pub environment: String,
}

impl RunSummary {
    /// Percentage of passing tests, in [0, 100]. Zero for an empty run.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64 * 100.0
        }
    }

    /// Whether the run had no failures.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// One suite from the result document: its own status plus its tests and
/// nested sub-suites, both in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteNode {
    pub name: String,
    pub id: String,
    pub status: TestStatus,
    pub start_time: String,
    pub end_time: String,
    pub elapsed: String,
    pub tests: Vec<TestRecord>,
    pub suites: Vec<SuiteNode>,
}

impl SuiteNode {
    /// Number of tests in this suite and all nested suites.
    pub fn test_count(&self) -> usize {
        self.tests.len() + self.suites.iter().map(SuiteNode::test_count).sum::<usize>()
    }
}

/// One test case from the result document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRecord {
    pub name: String,
    pub id: String,
    pub status: TestStatus,
    pub start_time: String,
    pub end_time: String,
    pub elapsed: String,

    /// Criticality flag from the status element, when present
    /// ("yes"/"no" in older Robot Framework versions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,
}

/// Everything the pipeline extracts from one result document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRun {
    pub summary: RunSummary,

    /// Root of the suite tree; None when the document has no suite element
    pub root_suite: Option<SuiteNode>,
}

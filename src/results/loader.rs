use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::results::error::LoadError;
use crate::results::model::{RunSummary, SuiteNode, TestRecord, TestRun, TestStatus};

// ============================================================================
// Result loader — parses a Robot Framework output.xml into a TestRun
// ============================================================================

const UNKNOWN: &str = "Unknown";
const NO_ENVIRONMENT: &str = "Not specified";

/// Parse an output.xml document into a TestRun.
///
/// Fails when the file is missing, is not well-formed XML, or lacks the
/// aggregate statistics block. Everything else is best-effort: absent
/// timestamps become "Unknown" and the metadata heuristics keep their
/// defaults when no matching log message exists.
pub fn load_results(xml_path: &Path) -> Result<TestRun, LoadError> {
    let text = fs::read_to_string(xml_path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            LoadError::InputNotFound { path: xml_path.to_path_buf() }
        } else {
            LoadError::Io { path: xml_path.to_path_buf(), source: e }
        }
    })?;

    let doc = Document::parse(&text).map_err(|e| LoadError::Xml {
        path: xml_path.to_path_buf(),
        source: e,
    })?;
    let root = doc.root_element();

    let (passed, failed, skipped) = parse_statistics(root)?;
    let root_suite = root
        .children()
        .find(|n| n.has_tag_name("suite"))
        .map(parse_suite);

    // Run-level timing comes from the root suite's status element.
    let (start_time, end_time, elapsed) = match &root_suite {
        Some(suite) => (
            suite.start_time.clone(),
            suite.end_time.clone(),
            suite.elapsed.clone(),
        ),
        None => (UNKNOWN.to_string(), UNKNOWN.to_string(), UNKNOWN.to_string()),
    };

    let mut executor = root
        .attribute("generator")
        .unwrap_or(UNKNOWN)
        .to_string();
    let mut environment = NO_ENVIRONMENT.to_string();
    scan_metadata(root, &mut executor, &mut environment);

    let summary = RunSummary {
        total: passed + failed + skipped,
        passed,
        failed,
        skipped,
        start_time,
        end_time,
        elapsed,
        executor,
        environment,
    };

    Ok(TestRun { summary, root_suite })
}

// ============================================================================
// Statistics block
// ============================================================================

/// Read (passed, failed, skipped) from statistics/total/stat.
///
/// The skip attribute is optional (older documents have none); pass and
/// fail are required.
fn parse_statistics(root: Node) -> Result<(u64, u64, u64), LoadError> {
    let statistics = child_element(root, "statistics")
        .ok_or(LoadError::MissingNode { node: "statistics" })?;
    let total = child_element(statistics, "total")
        .ok_or(LoadError::MissingNode { node: "statistics/total" })?;
    let stat = child_element(total, "stat")
        .ok_or(LoadError::MissingNode { node: "statistics/total/stat" })?;

    let passed = count_attribute(stat, "pass")?
        .ok_or(LoadError::MissingNode { node: "stat@pass" })?;
    let failed = count_attribute(stat, "fail")?
        .ok_or(LoadError::MissingNode { node: "stat@fail" })?;
    let skipped = count_attribute(stat, "skip")?.unwrap_or(0);

    Ok((passed, failed, skipped))
}

/// Parse an optional integer attribute, distinguishing "absent" from
/// "present but not a number".
fn count_attribute(node: Node, name: &'static str) -> Result<Option<u64>, LoadError> {
    match node.attribute(name) {
        None => Ok(None),
        Some(raw) => raw.parse::<u64>().map(Some).map_err(|_| LoadError::BadCount {
            attribute: name,
            value: raw.to_string(),
        }),
    }
}

// ============================================================================
// Metadata heuristics
// ============================================================================

/// Scan every log message for "Executed by:" / "Environment:" prefixes.
///
/// The first match wins for each key; no match leaves the caller's default
/// untouched. This is best-effort by design and never fails the load.
fn scan_metadata(root: Node, executor: &mut String, environment: &mut String) {
    let mut found_executor = false;
    let mut found_environment = false;

    for msg in root.descendants().filter(|n| n.has_tag_name("msg")) {
        let Some(text) = msg.text() else { continue };
        let text = text.trim();

        if !found_executor {
            if let Some(rest) = text.strip_prefix("Executed by:") {
                *executor = rest.trim().to_string();
                found_executor = true;
            }
        }
        if !found_environment {
            if let Some(rest) = text.strip_prefix("Environment:") {
                *environment = rest.trim().to_string();
                found_environment = true;
            }
        }
        if found_executor && found_environment {
            break;
        }
    }
}

// ============================================================================
// Suite tree
// ============================================================================

/// Build a SuiteNode from a <suite> element, recursing into nested suites.
fn parse_suite(node: Node) -> SuiteNode {
    let (status, start_time, end_time, elapsed) = parse_status(node);

    let tests = node
        .children()
        .filter(|n| n.has_tag_name("test"))
        .map(parse_test)
        .collect();

    let suites = node
        .children()
        .filter(|n| n.has_tag_name("suite"))
        .map(parse_suite)
        .collect();

    SuiteNode {
        name: node.attribute("name").unwrap_or_default().to_string(),
        id: node.attribute("id").unwrap_or_default().to_string(),
        status,
        start_time,
        end_time,
        elapsed,
        tests,
        suites,
    }
}

/// Build a TestRecord from a <test> element.
fn parse_test(node: Node) -> TestRecord {
    let (status, start_time, end_time, elapsed) = parse_status(node);

    let critical = node
        .children()
        .find(|n| n.has_tag_name("status"))
        .and_then(|s| s.attribute("critical"))
        .map(|c| c == "yes");

    TestRecord {
        name: node.attribute("name").unwrap_or_default().to_string(),
        id: node.attribute("id").unwrap_or_default().to_string(),
        status,
        start_time,
        end_time,
        elapsed,
        critical,
    }
}

/// Read status, timestamps, and formatted elapsed time from an element's
/// <status> child. A missing status child yields SKIP / "Unknown".
fn parse_status(parent: Node) -> (TestStatus, String, String, String) {
    let status_node = parent.children().find(|n| n.has_tag_name("status"));

    let status = status_node
        .and_then(|s| s.attribute("status"))
        .map(TestStatus::from_attr)
        .unwrap_or(TestStatus::Skip);

    let start_time = status_node
        .and_then(|s| s.attribute("starttime"))
        .unwrap_or(UNKNOWN)
        .to_string();
    let end_time = status_node
        .and_then(|s| s.attribute("endtime"))
        .unwrap_or(UNKNOWN)
        .to_string();

    // elapsedtime lives on the status element, or on the suite/test element
    // itself in some generator versions.
    let elapsed = status_node
        .and_then(|s| s.attribute("elapsedtime"))
        .or_else(|| parent.attribute("elapsedtime"))
        .map(format_duration)
        .unwrap_or_else(|| UNKNOWN.to_string());

    (status, start_time, end_time, elapsed)
}

// ============================================================================
// Duration formatting
// ============================================================================

/// Format a millisecond count as "XhYmZs". Non-numeric input is passed
/// through verbatim rather than treated as an error.
pub fn format_duration(raw: &str) -> String {
    match raw.trim().parse::<u64>() {
        Ok(ms) => {
            let secs = ms / 1000;
            format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
        }
        Err(_) => raw.to_string(),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn child_element<'a>(node: Node<'a, 'a>, name: &str) -> Option<Node<'a, 'a>> {
    node.children().find(|n| n.has_tag_name(name))
}

use std::path::PathBuf;

use robot_dashboard::results::model::{
    RunSummary, SuiteNode, TestRecord, TestRun, TestStatus,
};

// ============================================================================
// Shared fixtures
// ============================================================================

/// A results document with the canonical 7 passed / 2 failed / 1 skipped
/// statistics, a nested suite tree, and metadata log messages.
pub fn sample_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<robot generator="Robot 6.0.2 (Python 3.10.6 on linux)" generated="20240315 09:00:00.000">
<suite id="s1" name="Regression">
<test id="s1-t1" name="Login works">
<msg timestamp="20240315 09:00:01.100" level="INFO">Environment: staging</msg>
<status status="PASS" starttime="20240315 09:00:01.000" endtime="20240315 09:00:02.000" elapsedtime="1000"/>
</test>
<test id="s1-t2" name="Checkout fails">
<status status="FAIL" starttime="20240315 09:00:02.000" endtime="20240315 09:00:04.000" elapsedtime="2000" critical="yes"/>
</test>
<suite id="s1-s1" name="Smoke">
<test id="s1-s1-t1" name="Health check">
<msg timestamp="20240315 09:01:00.000" level="INFO">Executed by: jenkins</msg>
<status status="PASS" starttime="20240315 09:01:00.000" endtime="20240315 09:01:01.000" elapsedtime="1000"/>
</test>
<status status="PASS" starttime="20240315 09:01:00.000" endtime="20240315 09:01:01.000" elapsedtime="1000"/>
</suite>
<status status="FAIL" starttime="20240315 09:00:00.500" endtime="20240315 09:02:05.500" elapsedtime="125000"/>
</suite>
<statistics>
<total>
<stat pass="7" fail="2" skip="1">All Tests</stat>
</total>
</statistics>
<errors/>
</robot>
"#
    .to_string()
}

/// The same run, built directly in memory for renderer tests.
pub fn sample_run() -> TestRun {
    TestRun {
        summary: RunSummary {
            total: 10,
            passed: 7,
            failed: 2,
            skipped: 1,
            start_time: "20240315 09:00:00.500".to_string(),
            end_time: "20240315 09:02:05.500".to_string(),
            elapsed: "0h 2m 5s".to_string(),
            executor: "jenkins".to_string(),
            environment: "staging".to_string(),
        },
        root_suite: Some(SuiteNode {
            name: "Regression".to_string(),
            id: "s1".to_string(),
            status: TestStatus::Fail,
            start_time: "20240315 09:00:00.500".to_string(),
            end_time: "20240315 09:02:05.500".to_string(),
            elapsed: "0h 2m 5s".to_string(),
            tests: vec![
                test_record("s1-t1", "Login works", TestStatus::Pass),
                test_record("s1-t2", "Checkout fails", TestStatus::Fail),
            ],
            suites: vec![SuiteNode {
                name: "Smoke".to_string(),
                id: "s1-s1".to_string(),
                status: TestStatus::Pass,
                start_time: "20240315 09:01:00.000".to_string(),
                end_time: "20240315 09:01:01.000".to_string(),
                elapsed: "0h 0m 1s".to_string(),
                tests: vec![test_record("s1-s1-t1", "Health check", TestStatus::Pass)],
                suites: vec![],
            }],
        }),
    }
}

pub fn test_record(id: &str, name: &str, status: TestStatus) -> TestRecord {
    TestRecord {
        name: name.to_string(),
        id: id.to_string(),
        status,
        start_time: "20240315 09:00:01.000".to_string(),
        end_time: "20240315 09:00:02.000".to_string(),
        elapsed: "0h 0m 1s".to_string(),
        critical: None,
    }
}

/// Create a unique scratch directory under the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("robot_dashboard_{}", name));
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write `content` to `dir/name` and return the full path.
pub fn write_file(dir: &PathBuf, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

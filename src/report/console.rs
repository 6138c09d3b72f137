use crate::results::model::{SuiteNode, TestRun, TestStatus};

// ============================================================================
// Console reporter — formatted terminal summary
// ============================================================================

/// Format a run summary for terminal output.
///
/// Produces output like:
/// ```text
/// === Robot Framework Run ===
///
/// Passed:    7
/// Failed:    2
/// Skipped:   1
/// Total:     10
/// Pass rate: 70.00%
/// Duration:  0h 2m 5s
///
/// ✓ Top Suite (PASS)
///   ✓ Login test
///   ✗ Checkout test
///
/// === Executed by: jenkins | Environment: staging ===
/// ```
pub fn format_console_summary(run: &TestRun) -> String {
    let summary = &run.summary;
    let mut out = String::new();

    out.push_str("=== Robot Framework Run ===\n\n");
    out.push_str(&format!("Passed:    {}\n", summary.passed));
    out.push_str(&format!("Failed:    {}\n", summary.failed));
    out.push_str(&format!("Skipped:   {}\n", summary.skipped));
    out.push_str(&format!("Total:     {}\n", summary.total));
    out.push_str(&format!("Pass rate: {:.2}%\n", summary.pass_rate()));
    out.push_str(&format!("Duration:  {}\n", summary.elapsed));

    if let Some(root) = &run.root_suite {
        out.push('\n');
        format_suite_lines(root, 0, &mut out);
    }

    out.push_str(&format!(
        "\n=== Executed by: {} | Environment: {} ===\n",
        summary.executor, summary.environment
    ));

    out
}

/// Append one suite line plus its tests and sub-suites, indented by depth.
fn format_suite_lines(suite: &SuiteNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!(
        "{}{} {} ({})\n",
        indent,
        status_marker(suite.status),
        suite.name,
        suite.status.label()
    ));

    for test in &suite.tests {
        out.push_str(&format!(
            "{}  {} {}\n",
            indent,
            status_marker(test.status),
            test.name
        ));
    }
    for sub in &suite.suites {
        format_suite_lines(sub, depth + 1, out);
    }
}

fn status_marker(status: TestStatus) -> &'static str {
    match status {
        TestStatus::Pass => "\u{2713}",
        TestStatus::Fail => "\u{2717}",
        TestStatus::Skip => "-",
    }
}

use crate::assets::screenshots::ScreenshotAsset;
use crate::results::model::{SuiteNode, TestRecord, TestRun};

// ============================================================================
// HTML reporter — self-contained dashboard document
// ============================================================================

/// Indentation step (px) per suite nesting level in the result table.
const INDENT_PX: usize = 24;

/// Render the dashboard for one test run.
///
/// Structure:
/// - Gradient header with title and generation timestamp
/// - Summary cards: passed / failed / skipped / total / pass rate / duration
/// - Status doughnut chart (Chart.js from CDN)
/// - Collapsible suite/test table, rows in document order
/// - Screenshot gallery with inline base64 images (when any were collected)
///
/// The collapse script and chart invocation are inert text as far as this
/// program is concerned; they run in the viewing browser.
pub fn render_dashboard(
    run: &TestRun,
    screenshots: &[ScreenshotAsset],
    title: &str,
    generated_at: &str,
) -> String {
    let summary = &run.summary;
    let header_color = if summary.all_passed() {
        "linear-gradient(135deg, #11998e 0%, #38ef7d 100%)"
    } else {
        "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"
    };

    let suite_section = match &run.root_suite {
        Some(root) => render_suite_section(root),
        None => String::new(),
    };
    let gallery_section = render_gallery(screenshots);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>
<style>
:root {{ --passed: #28a745; --failed: #dc3545; --skipped: #ffc107; --bg: #f8f9fa; }}
body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: var(--bg); color: #333; margin: 0; padding: 20px; }}
.container {{ max-width: 1400px; margin: auto; }}
.header {{ text-align: center; padding: 30px; background: {header_color}; color: white; border-radius: 15px; margin-bottom: 30px; box-shadow: 0 10px 30px rgba(0,0,0,0.2); }}
.header h1 {{ margin: 0 0 8px 0; }}
.header p {{ margin: 0; opacity: 0.9; }}
.meta {{ color: #666; font-size: 14px; margin-bottom: 20px; }}
.stats-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 20px; margin: 30px 0; }}
.stat-card {{ background: white; padding: 25px; border-radius: 12px; text-align: center; box-shadow: 0 5px 15px rgba(0,0,0,0.1); }}
.stat-card.passed {{ border-left: 5px solid var(--passed); }}
.stat-card.failed {{ border-left: 5px solid var(--failed); }}
.stat-card.skipped {{ border-left: 5px solid var(--skipped); }}
.number {{ font-size: 2.4em; font-weight: bold; }}
.chart-box {{ background: white; border-radius: 12px; padding: 25px; margin: 30px 0; box-shadow: 0 5px 15px rgba(0,0,0,0.1); max-width: 420px; margin-left: auto; margin-right: auto; }}
table.results {{ width: 100%; border-collapse: collapse; background: white; border-radius: 12px; overflow: hidden; box-shadow: 0 5px 15px rgba(0,0,0,0.1); }}
table.results th {{ background: #343a40; color: white; padding: 12px 16px; text-align: left; }}
table.results td {{ padding: 10px 16px; border-bottom: 1px solid #eee; font-size: 14px; }}
tr.suite-row {{ background: #f1f3f5; font-weight: bold; cursor: pointer; }}
.badge {{ display: inline-block; padding: 2px 10px; border-radius: 10px; color: white; font-size: 12px; font-weight: bold; }}
.badge.pass {{ background: var(--passed); }}
.badge.fail {{ background: var(--failed); }}
.badge.skip {{ background: var(--skipped); color: #333; }}
.critical {{ color: var(--failed); font-size: 11px; margin-left: 6px; }}
.screenshots {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 20px; margin: 30px 0; }}
.screenshot {{ background: white; border-radius: 10px; overflow: hidden; box-shadow: 0 4px 15px rgba(0,0,0,0.1); }}
.screenshot img {{ width: 100%; height: auto; }}
.screenshot-caption {{ padding: 10px; background: #f1f1f1; font-weight: bold; }}
footer {{ text-align: center; margin-top: 50px; color: #666; }}
</style>
</head>
<body>
<div class="container">
<div class="header">
<h1>{title}</h1>
<p>Generated on {generated_at}</p>
</div>
<p class="meta">Executed by: {executor} &middot; Environment: {environment} &middot; Started: {start_time} &middot; Finished: {end_time}</p>
<div class="stats-grid">
<div class="stat-card passed"><div class="number" style="color:var(--passed)">{passed}</div><div>Passed</div></div>
<div class="stat-card failed"><div class="number" style="color:var(--failed)">{failed}</div><div>Failed</div></div>
<div class="stat-card skipped"><div class="number">{skipped}</div><div>Skipped</div></div>
<div class="stat-card"><div class="number">{total}</div><div>Total Tests</div></div>
<div class="stat-card"><div class="number">{pass_rate:.2}%</div><div>Pass Rate</div></div>
<div class="stat-card"><div class="number">{duration}</div><div>Duration</div></div>
</div>
<div class="chart-box"><canvas id="statusChart"></canvas></div>
{suite_section}
{gallery_section}
<footer><p>Dashboard auto-generated by robot-dashboard</p></footer>
</div>
<script>
new Chart(document.getElementById('statusChart'), {{
  type: 'doughnut',
  data: {{
    labels: ['Passed', 'Failed', 'Skipped'],
    datasets: [{{ data: [{passed}, {failed}, {skipped}],
      backgroundColor: ['#28a745', '#dc3545', '#ffc107'] }}]
  }},
  options: {{ plugins: {{ legend: {{ position: 'bottom' }} }} }}
}});
function toggleSuite(id) {{
  document.querySelectorAll('tr[data-suite="' + id + '"]').forEach(function (row) {{
    row.style.display = row.style.display === 'none' ? '' : 'none';
  }});
}}
</script>
</body>
</html>"##,
        title = escape_html(title),
        generated_at = escape_html(generated_at),
        header_color = header_color,
        executor = escape_html(&summary.executor),
        environment = escape_html(&summary.environment),
        start_time = escape_html(&summary.start_time),
        end_time = escape_html(&summary.end_time),
        passed = summary.passed,
        failed = summary.failed,
        skipped = summary.skipped,
        total = summary.total,
        pass_rate = summary.pass_rate(),
        duration = escape_html(&summary.elapsed),
        suite_section = suite_section,
        gallery_section = gallery_section,
    )
}

// ============================================================================
// Suite table
// ============================================================================

fn render_suite_section(root: &SuiteNode) -> String {
    let mut rows = String::new();
    render_suite_rows(root, 0, &mut rows);

    format!(
        r#"<h2>Suites &amp; Tests</h2>
<table class="results">
<thead><tr><th>Name</th><th>Status</th><th>Start</th><th>End</th><th>Elapsed</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
"#,
        rows = rows,
    )
}

/// Append one suite's row, its test rows, then its sub-suites, preserving
/// document order. Test rows carry the parent suite id so the inline
/// script can show/hide them.
fn render_suite_rows(suite: &SuiteNode, depth: usize, out: &mut String) {
    out.push_str(&format!(
        r#"<tr class="suite-row" onclick="toggleSuite('{id}')"><td style="padding-left:{indent}px">&#9656; {name}</td><td><span class="badge {css}">{status}</span></td><td>{start}</td><td>{end}</td><td>{elapsed}</td></tr>
"#,
        id = escape_html(&suite.id),
        indent = depth * INDENT_PX,
        name = escape_html(&suite.name),
        css = suite.status.css_class(),
        status = suite.status.label(),
        start = escape_html(&suite.start_time),
        end = escape_html(&suite.end_time),
        elapsed = escape_html(&suite.elapsed),
    ));

    for test in &suite.tests {
        render_test_row(test, &suite.id, depth + 1, out);
    }
    for sub in &suite.suites {
        render_suite_rows(sub, depth + 1, out);
    }
}

fn render_test_row(test: &TestRecord, suite_id: &str, depth: usize, out: &mut String) {
    let critical_tag = match test.critical {
        Some(true) => r#" <span class="critical">critical</span>"#,
        _ => "",
    };

    out.push_str(&format!(
        r#"<tr class="test-row" data-suite="{suite_id}"><td style="padding-left:{indent}px">{name}{critical}</td><td><span class="badge {css}">{status}</span></td><td>{start}</td><td>{end}</td><td>{elapsed}</td></tr>
"#,
        suite_id = escape_html(suite_id),
        indent = depth * INDENT_PX,
        name = escape_html(&test.name),
        critical = critical_tag,
        css = test.status.css_class(),
        status = test.status.label(),
        start = escape_html(&test.start_time),
        end = escape_html(&test.end_time),
        elapsed = escape_html(&test.elapsed),
    ));
}

// ============================================================================
// Screenshot gallery
// ============================================================================

fn render_gallery(screenshots: &[ScreenshotAsset]) -> String {
    if screenshots.is_empty() {
        return String::new();
    }

    let mut figures = String::new();
    for shot in screenshots {
        figures.push_str(&format!(
            r#"<div class="screenshot"><img src="{src}" alt="{name}"><div class="screenshot-caption">{name}</div></div>
"#,
            src = shot.to_data_uri(),
            name = escape_html(&shot.name),
        ));
    }

    format!(
        r#"<h2>Test Execution Screenshots ({count})</h2>
<div class="screenshots">
{figures}</div>
"#,
        count = screenshots.len(),
        figures = figures,
    )
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

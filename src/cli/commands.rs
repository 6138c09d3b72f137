use std::path::PathBuf;

use crate::cli::config::{AppConfig, resolve_paths};
use crate::generate_dashboard;
use crate::report::console::format_console_summary;
use crate::results::loader::load_results;

// ============================================================================
// generate subcommand
// ============================================================================

/// Generate the dashboard and print the success lines. Returns the absolute
/// path of the written file.
pub fn cmd_generate(
    results: &str,
    output: Option<&str>,
    screenshots: Option<&str>,
    title: Option<&str>,
    verbose: u8,
    config: &AppConfig,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let paths = resolve_paths(results, output, screenshots, config);
    let title = title.unwrap_or(&config.dashboard.title);
    let generated_at = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    if verbose > 0 {
        eprintln!("Parsing {}...", paths.xml.display());
    }

    let written = generate_dashboard(
        &paths.xml,
        &paths.screenshots_dir,
        &paths.output,
        title,
        &generated_at,
        verbose,
    )?;

    println!("Dashboard generated: {}", paths.output.display());
    println!("Open file://{} in your browser", written.display());

    Ok(written)
}

// ============================================================================
// summary subcommand
// ============================================================================

/// Print run statistics to stdout, either human-readable or as JSON.
pub fn cmd_summary(
    results: &str,
    format: &str,
    verbose: u8,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let paths = resolve_paths(results, None, None, config);

    if verbose > 0 {
        eprintln!("Parsing {}...", paths.xml.display());
    }

    let run = load_results(&paths.xml)?;
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&run.summary)?),
        _ => print!("{}", format_console_summary(&run)),
    }

    Ok(())
}

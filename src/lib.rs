use std::path::{Path, PathBuf};

use crate::assets::screenshots::collect_screenshots;
use crate::report::html::render_dashboard;
use crate::report::writer::write_dashboard;
use crate::results::loader::load_results;

pub mod assets;
pub mod cli;
pub mod report;
pub mod results;

/// Run the whole pipeline: load results, collect screenshots, render, write.
///
/// `generated_at` is the pre-formatted timestamp shown in the dashboard
/// header; the caller reads the clock so tests can pass a fixed value.
/// Returns the absolute path of the written file.
pub fn generate_dashboard(
    xml_path: &Path,
    screenshots_dir: &Path,
    output_path: &Path,
    title: &str,
    generated_at: &str,
    verbose: u8,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let run = load_results(xml_path)?;
    let screenshots = collect_screenshots(screenshots_dir)?;

    if verbose > 0 {
        eprintln!(
            "Loaded {} tests ({} passed, {} failed), {} screenshots",
            run.summary.total,
            run.summary.passed,
            run.summary.failed,
            screenshots.len()
        );
    }

    let html = render_dashboard(&run, &screenshots, title, generated_at);
    let written = write_dashboard(output_path, &html)?;

    Ok(written)
}

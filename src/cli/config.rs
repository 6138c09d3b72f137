use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "robot-dashboard",
    version,
    about = "Static HTML dashboard generator for Robot Framework results"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: robot-dashboard.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a results directory (or output.xml) and write the dashboard
    Generate {
        /// Results directory containing output.xml, or an output.xml path
        results: String,

        /// Output file path (default: <results dir>/dashboard.html)
        #[arg(short, long)]
        output: Option<String>,

        /// Screenshots directory (default: <results dir>/screenshots)
        #[arg(long)]
        screenshots: Option<String>,

        /// Dashboard title
        #[arg(long)]
        title: Option<String>,
    },

    /// Print run statistics without generating a dashboard
    Summary {
        /// Results directory containing output.xml, or an output.xml path
        results: String,

        /// Output format: console, json
        #[arg(long, default_value = "console")]
        format: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `robot-dashboard.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub screenshots: ScreenshotsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    pub output: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScreenshotsConfig {
    pub dir: Option<String>,
}

// Serde default helpers
fn default_title() -> String {
    "Robot Framework Test Dashboard".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("robot-dashboard.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Path resolution (merge CLI args with config file)
// ============================================================================

/// Resolved filesystem locations for one run.
#[derive(Debug, Clone)]
pub struct RunPaths {
    /// The output.xml document to parse
    pub xml: PathBuf,

    /// Directory scanned for screenshots (may not exist)
    pub screenshots_dir: PathBuf,

    /// Destination for the rendered dashboard
    pub output: PathBuf,
}

/// Resolve the results location plus CLI/config overrides into concrete
/// paths. Precedence is CLI > config file > default location.
///
/// A directory argument means `<dir>/output.xml` with sibling defaults;
/// a file argument uses its parent directory for the defaults.
pub fn resolve_paths(
    results: &str,
    output: Option<&str>,
    screenshots: Option<&str>,
    config: &AppConfig,
) -> RunPaths {
    let results_path = Path::new(results);
    let (xml, base) = if results_path.is_dir() {
        (results_path.join("output.xml"), results_path.to_path_buf())
    } else {
        let base = results_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        (results_path.to_path_buf(), base)
    };

    let screenshots_dir = screenshots
        .map(PathBuf::from)
        .or_else(|| config.screenshots.dir.as_deref().map(PathBuf::from))
        .unwrap_or_else(|| base.join("screenshots"));

    let output = output
        .map(PathBuf::from)
        .or_else(|| config.dashboard.output.as_deref().map(PathBuf::from))
        .unwrap_or_else(|| base.join("dashboard.html"));

    RunPaths {
        xml,
        screenshots_dir,
        output,
    }
}

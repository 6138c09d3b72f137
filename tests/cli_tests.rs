use clap::Parser;
use robot_dashboard::cli::config::{AppConfig, Cli, Commands, load_config, resolve_paths};
use robot_dashboard::generate_dashboard;

mod common;
use common::{sample_xml, temp_dir, write_file};

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_generate_minimal() {
    let cli = Cli::parse_from(["robot-dashboard", "generate", "robot-results"]);
    match cli.command {
        Commands::Generate {
            results,
            output,
            screenshots,
            title,
        } => {
            assert_eq!(results, "robot-results");
            assert!(output.is_none());
            assert!(screenshots.is_none());
            assert!(title.is_none());
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn cli_parse_generate_all_args() {
    let cli = Cli::parse_from([
        "robot-dashboard",
        "generate",
        "results/output.xml",
        "-o",
        "out/dashboard.html",
        "--screenshots",
        "results/captures",
        "--title",
        "Nightly Run",
    ]);
    match cli.command {
        Commands::Generate {
            results,
            output,
            screenshots,
            title,
        } => {
            assert_eq!(results, "results/output.xml");
            assert_eq!(output, Some("out/dashboard.html".to_string()));
            assert_eq!(screenshots, Some("results/captures".to_string()));
            assert_eq!(title, Some("Nightly Run".to_string()));
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn cli_parse_summary_with_format() {
    let cli = Cli::parse_from(["robot-dashboard", "summary", "robot-results", "--format", "json"]);
    match cli.command {
        Commands::Summary { results, format } => {
            assert_eq!(results, "robot-results");
            assert_eq!(format, "json");
        }
        _ => panic!("Expected Summary command"),
    }
}

#[test]
fn cli_parse_summary_default_format() {
    let cli = Cli::parse_from(["robot-dashboard", "summary", "robot-results"]);
    match cli.command {
        Commands::Summary { format, .. } => assert_eq!(format, "console"),
        _ => panic!("Expected Summary command"),
    }
}

#[test]
fn cli_parse_global_verbose() {
    let cli = Cli::parse_from(["robot-dashboard", "-v", "generate", "robot-results"]);
    assert_eq!(cli.verbose, 1);

    let cli2 = Cli::parse_from(["robot-dashboard", "-vv", "generate", "robot-results"]);
    assert_eq!(cli2.verbose, 2);
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn config_load_missing_file() {
    let config = load_config(Some("nonexistent_file_that_does_not_exist.yaml"));
    // Should return defaults without error
    assert_eq!(config.dashboard.title, "Robot Framework Test Dashboard");
    assert!(config.dashboard.output.is_none());
    assert!(config.screenshots.dir.is_none());
}

#[test]
fn config_partial_yaml() {
    let yaml = r#"
dashboard:
  title: "Nightly Regression"
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.dashboard.title, "Nightly Regression");
    // Other sections get defaults
    assert!(config.dashboard.output.is_none());
    assert!(config.screenshots.dir.is_none());
}

#[test]
fn config_yaml_roundtrip() {
    let config = AppConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: AppConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed.dashboard.title, config.dashboard.title);
    assert_eq!(parsed.screenshots.dir, config.screenshots.dir);
}

// ============================================================================
// Path Resolution Tests
// ============================================================================

#[test]
fn resolve_paths_directory_input() {
    let dir = temp_dir("cli_resolve_dir");
    let results = dir.to_str().unwrap();

    let paths = resolve_paths(results, None, None, &AppConfig::default());
    assert_eq!(paths.xml, dir.join("output.xml"));
    assert_eq!(paths.screenshots_dir, dir.join("screenshots"));
    assert_eq!(paths.output, dir.join("dashboard.html"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn resolve_paths_file_input_uses_parent() {
    let dir = temp_dir("cli_resolve_file");
    let xml = write_file(&dir, "output.xml", sample_xml().as_bytes());

    let paths = resolve_paths(xml.to_str().unwrap(), None, None, &AppConfig::default());
    assert_eq!(paths.xml, xml);
    assert_eq!(paths.screenshots_dir, dir.join("screenshots"));
    assert_eq!(paths.output, dir.join("dashboard.html"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn resolve_paths_cli_overrides_config() {
    let config: AppConfig = serde_yaml::from_str(
        r#"
dashboard:
  output: "from-config.html"
screenshots:
  dir: "config-shots"
"#,
    )
    .unwrap();

    let paths = resolve_paths("results.xml", Some("cli.html"), Some("cli-shots"), &config);
    assert_eq!(paths.output, std::path::PathBuf::from("cli.html"));
    assert_eq!(paths.screenshots_dir, std::path::PathBuf::from("cli-shots"));

    let paths = resolve_paths("results.xml", None, None, &config);
    assert_eq!(paths.output, std::path::PathBuf::from("from-config.html"));
    assert_eq!(paths.screenshots_dir, std::path::PathBuf::from("config-shots"));
}

// ============================================================================
// End-to-end pipeline
// ============================================================================

#[test]
fn generate_writes_dashboard_file() {
    let dir = temp_dir("cli_end_to_end");
    write_file(&dir, "output.xml", sample_xml().as_bytes());
    let shots = dir.join("screenshots");
    std::fs::create_dir_all(&shots).unwrap();
    std::fs::write(shots.join("failure.png"), b"png-bytes").unwrap();

    let output = dir.join("dashboard.html");
    let written = generate_dashboard(
        &dir.join("output.xml"),
        &shots,
        &output,
        "Robot Framework Test Dashboard",
        "2024-03-15 09:05:00",
        0,
    )
    .unwrap();

    assert!(written.is_absolute());
    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("70.00%"));
    assert!(html.contains(">10</div><div>Total Tests</div>"));
    assert!(html.contains("failure.png"));
    assert!(html.contains("Generated on 2024-03-15 09:05:00"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn generate_without_screenshots_directory() {
    let dir = temp_dir("cli_no_shots");
    write_file(&dir, "output.xml", sample_xml().as_bytes());

    let output = dir.join("dashboard.html");
    generate_dashboard(
        &dir.join("output.xml"),
        &dir.join("screenshots"),
        &output,
        "Robot Framework Test Dashboard",
        "2024-03-15 09:05:00",
        0,
    )
    .unwrap();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(!html.contains("Test Execution Screenshots"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn generate_missing_input_produces_no_output() {
    let dir = temp_dir("cli_missing_input");
    let xml = dir.join("output.xml");
    let output = dir.join("dashboard.html");

    let err = generate_dashboard(
        &xml,
        &dir.join("screenshots"),
        &output,
        "Robot Framework Test Dashboard",
        "2024-03-15 09:05:00",
        0,
    )
    .unwrap_err();

    assert!(err.to_string().contains("output.xml"));
    assert!(!output.exists());

    std::fs::remove_dir_all(&dir).ok();
}

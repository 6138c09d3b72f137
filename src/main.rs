use clap::Parser;
use robot_dashboard::cli::commands::{cmd_generate, cmd_summary};
use robot_dashboard::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Generate {
            results,
            output,
            screenshots,
            title,
        } => {
            cmd_generate(
                &results,
                output.as_deref(),
                screenshots.as_deref(),
                title.as_deref(),
                cli.verbose,
                &config,
            )?;
        }
        Commands::Summary { results, format } => {
            cmd_summary(&results, &format, cli.verbose, &config)?;
        }
    }

    Ok(())
}

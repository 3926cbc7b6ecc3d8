// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use rimworld_parser::utils::logging::{
    format_error, format_info, format_success, format_warning,
};
use rimworld_parser::{Config, InputFiles, PipelineOrchestrator, ProgressTracker, Validator};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rimworld_parser")]
#[command(version = "0.1.0")]
#[command(about = "Converts Twitch Toolkit exports into site-ready JSON listings", long_about = None)]
#[command(override_usage = "rimworld_parser [OPTIONS] <COMMANDS> <ITEMS> <EVENTS> <TRAITS>")]
#[command(after_help = "EX: rimworld_parser raw/Commands.json raw/StoreItems.json raw/StoreIncidents.json raw/StoreExt.json")]
struct Cli {
    /// Raw command, item, event and trait exports, in that order
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Write the listings here instead of next to the commands export
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Usage problems print help and exit cleanly.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            print_help()?;
            return Ok(());
        }
    };

    let Ok(inputs) = InputFiles::from_args(&cli.files) else {
        print_help()?;
        return Ok(());
    };

    for file in inputs.all() {
        if Validator::validate_input_file(file).is_err() {
            println!("File '{}' doesn't exist", file.display());
            println!();
            print_help()?;
            return Ok(());
        }
    }

    rimworld_parser::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
    }
    let config = Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?;

    let output_dir = cli
        .output
        .unwrap_or_else(|| inputs.default_output_dir(&config.output.directory_name));
    Validator::validate_output_directory(&output_dir).context("Invalid output directory")?;

    let orchestrator = PipelineOrchestrator::new(&config, output_dir);
    let progress = ProgressTracker::with_color(4, cli.color);
    let report = orchestrator.run(&inputs, &progress);

    for summary in &report.summaries {
        for file in &summary.files {
            let line = format!("{} ({} records)", file.path.display(), file.total);
            if file.total == 0 {
                println!("{}", format_warning(&line));
            } else {
                println!("{}", format_success(&line));
            }
        }
    }
    for (kind, err) in &report.failures {
        println!("{}", format_error(&format!("{} pipeline failed: {}", kind, err)));
    }
    println!(
        "{}",
        format_info(&format!(
            "{} records read, {} dropped, {} written",
            report.stats.records_read, report.stats.records_dropped, report.stats.records_written
        ))
    );

    if !report.is_success() {
        anyhow::bail!(
            "{} of 4 pipelines failed, output written to {}",
            report.failures.len(),
            orchestrator.output_dir().display()
        );
    }

    Ok(())
}

fn print_help() -> Result<()> {
    Cli::command()
        .print_help()
        .context("Failed to print usage help")?;
    println!();
    Ok(())
}

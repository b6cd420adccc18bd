mod commands;
mod config;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "verdict-cli")]
#[command(about = "Verdict CLI - Parse case definitions and run them against a target program", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a case file and run every case against the target program
    Run {
        /// Path to the case definition file
        #[arg(short, long)]
        file: PathBuf,

        /// Path to the target program under test
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Per-case wall-clock timeout in seconds
        #[arg(long)]
        timeout: Option<f64>,

        /// Print the result list as JSON instead of the text report
        #[arg(long, default_value = "false")]
        json: bool,

        /// Also write a standalone assertion script to this path
        #[arg(long)]
        emit: Option<PathBuf>,

        /// Path to an optional config file with defaults
        #[arg(long, default_value = "verdict.json")]
        config: PathBuf,
    },

    /// Convert a case file into a standalone assertion script, without running it
    Emit {
        /// Path to the case definition file
        #[arg(short, long)]
        file: PathBuf,

        /// Path to the target program the script will invoke
        #[arg(short, long)]
        target: PathBuf,

        /// Where to write the generated script
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            target,
            timeout,
            json,
            emit,
            config,
        } => {
            let outcome = commands::run_suite(&file, target, timeout, json, emit, &config).await;
            let code = run_exit_code(&outcome);
            if let Err(err) = &outcome {
                eprintln!("Error: {err:#}");
            }
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Emit { file, target, out } => {
            commands::emit_script(&file, &target, &out)?;
        }
    }

    Ok(())
}

/// Exit status for the `run` subcommand. Batch-level failures (parse,
/// launch, I/O) exit 2 so scripts can tell them apart from a red suite,
/// which exits 1.
fn run_exit_code(outcome: &Result<bool>) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

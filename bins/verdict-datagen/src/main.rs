mod filter;
mod generator;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "verdict-datagen")]
#[command(about = "Verdict datagen - Generate random integer tables and sum the qualifying rows", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a randomly named table file and print its filename
    Generate {
        /// Number of rows to generate
        #[arg(long, default_value_t = generator::DEFAULT_ROWS)]
        rows: usize,

        /// Length of the random part of the filename
        #[arg(long, default_value_t = 8)]
        name_len: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Sum the qualifying rows of a table, generating one first if needed
    Sum {
        /// Existing table file; omitted means generate a fresh one
        #[arg(long)]
        file: Option<PathBuf>,

        /// Number of rows when generating
        #[arg(long, default_value_t = generator::DEFAULT_ROWS)]
        rows: usize,

        /// Seed for reproducible generation
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn generate(rows: usize, name_len: usize, seed: Option<u64>) -> Result<PathBuf> {
    let mut rng = make_rng(seed);
    let filename = PathBuf::from(generator::generate_filename(name_len, &mut rng));
    generator::write_dataset(&filename, rows, &mut rng)?;
    info!(rows, file = %filename.display(), "Dataset written");
    Ok(filename)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            rows,
            name_len,
            seed,
        } => {
            let filename = generate(rows, name_len, seed)?;
            // The filename is the stdout contract: callers capture the last
            // line to locate the generated data.
            println!("{}", filename.display());
        }
        Commands::Sum { file, rows, seed } => {
            let path = match file {
                Some(path) => path,
                None => generate(rows, 8, seed)?,
            };
            let total = filter::process_file(&path)?;
            println!("{total}");
        }
    }

    Ok(())
}

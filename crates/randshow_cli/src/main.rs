//! Randshow CLI - Command Line Front End for the Randshow Engines
//!
//! # Commands
//!
//! - `randshow histogram` - Print value counts of a ranged integer draw
//! - `randshow raw` - Stream binary engine output for external test suites
//! - `randshow check` - Run the bucket-uniformity check
//! - `randshow distr zipf|benford` - Sample a discrete distribution
//! - `randshow sample` - Shuffle or reservoir-sample a population
//!
//! # Architecture
//!
//! As part of the service layer, this crate wires `randshow_core` and
//! `randshow_distr` to the command line. Results go to stdout; logs go to
//! stderr so that `raw` output can be piped.

use clap::{Parser, Subcommand};
use std::io::{self, BufWriter};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod engine;
mod error;

pub use error::{CliError, Result};

use commands::distr::DistrCommand;
use commands::sample::SampleMode;
use config::RandshowConfig;
use engine::{EngineKind, SelectedEngine};

/// Randshow pseudo-random engine CLI
#[derive(Parser)]
#[command(name = "randshow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "randshow.toml")]
    config: String,

    /// Engine to use (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    engine: Option<EngineKind>,

    /// Seed (overrides the config file); entropy seeding when absent
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print `value count` pairs for integers drawn from [low, high)
    Histogram {
        /// Inclusive lower bound
        #[arg(long, default_value = "-100", allow_hyphen_values = true)]
        low: i64,

        /// Exclusive upper bound
        #[arg(long, default_value = "100", allow_hyphen_values = true)]
        high: i64,

        /// Number of draws
        #[arg(short, long, default_value = "10000000")]
        draws: u64,
    },

    /// Write native-width little-endian words to stdout
    Raw {
        /// Stop after this many bytes (unbounded when absent)
        #[arg(short, long)]
        bytes: Option<u64>,
    },

    /// Run the bucket-uniformity check
    Check {
        /// Check every engine instead of the selected one
        #[arg(short, long)]
        all: bool,

        /// Number of buckets
        #[arg(short, long)]
        range: Option<u64>,

        /// Expected draws per bucket
        #[arg(short, long)]
        per_bucket: Option<u64>,

        /// Accepted relative deviation per bucket
        #[arg(short, long)]
        tolerance: Option<f64>,
    },

    /// Sample a discrete distribution
    Distr {
        #[command(subcommand)]
        distribution: DistrCommand,
    },

    /// Shuffle or sample the positions 0..population
    Sample {
        /// Sampling mode
        #[arg(short, long, value_enum, default_value = "reservoir")]
        mode: SampleMode,

        /// Population size
        #[arg(short, long, default_value = "100")]
        population: usize,

        /// Sample size (ignored by shuffle)
        #[arg(short = 'k', long, default_value = "10")]
        count: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = RandshowConfig::load_with_env_and_validate(Path::new(&cli.config))?;

    // Initialise tracing; RUST_LOG takes precedence over the configured level
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let kind = cli.engine.unwrap_or(config.engine);
    let seed = cli.seed.or(config.seed);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Histogram { low, high, draws } => {
            let mut engine = SelectedEngine::new(kind, seed);
            commands::histogram::run(&mut engine, low, high, draws, &mut out)?;
        }
        Commands::Raw { bytes } => {
            let mut engine = SelectedEngine::new(kind, seed);
            commands::raw::run(&mut engine, bytes, &mut out)?;
        }
        Commands::Check {
            all,
            range,
            per_bucket,
            tolerance,
        } => {
            let mut params = config.check;
            params.range = range.unwrap_or(params.range);
            params.per_bucket = per_bucket.unwrap_or(params.per_bucket);
            params.tolerance = tolerance.unwrap_or(params.tolerance);

            let kinds = if all { EngineKind::ALL.to_vec() } else { vec![kind] };
            commands::check::run(&kinds, seed, params, &mut out)?;
        }
        Commands::Distr { distribution } => {
            let mut engine = SelectedEngine::new(kind, seed);
            commands::distr::run(&mut engine, &distribution, &mut out)?;
        }
        Commands::Sample {
            mode,
            population,
            count,
        } => {
            let mut engine = SelectedEngine::new(kind, seed);
            commands::sample::run(&mut engine, mode, population, count, &mut out)?;
        }
    }

    Ok(())
}

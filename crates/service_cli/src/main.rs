//! strategy-returns - Payoff profiles for short option strategies
//!
//! Command-line entry point for the `strategy_core` library.
//!
//! # Commands
//!
//! - `strategy-returns calculate --strategy put --strike 95 --premium 2 --current 100`
//!   - Compute and print the payoff profile of one strategy
//! - `strategy-returns check` - Show the effective configuration
//!
//! Defaults come from `strategy-returns.toml` in the working directory and
//! `STRATEGY_*` environment variables.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::calculate::CalculateArgs;
use config::{CliConfig, DEFAULT_CONFIG_FILE};

/// Cash-secured put and covered call returns calculator
#[derive(Parser)]
#[command(name = "strategy-returns")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the payoff profile of a strategy
    Calculate {
        /// Strategy (put, call, cash-secured-put, covered-call)
        #[arg(short, long)]
        strategy: String,

        /// Option strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Premium received per share
        #[arg(short, long)]
        premium: f64,

        /// Current underlying price
        #[arg(short = 'u', long)]
        current: f64,

        /// Number of contracts
        #[arg(short = 'n', long, default_value = "1")]
        contracts: u32,

        /// Shares per contract (default from config)
        #[arg(long)]
        contract_size: Option<u32>,

        /// Output format: json, csv, table (default from config)
        #[arg(short, long)]
        format: Option<String>,

        /// Write results to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use the wide per-strategy price grid
        #[arg(long)]
        legacy_grid: bool,

        /// Covered-call break-even: current or strike (default from config)
        #[arg(long)]
        break_even: Option<String>,
    },

    /// Check configuration
    Check,
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: &Path) -> Result<CliConfig> {
    Ok(CliConfig::load_with_env_and_validate(path)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Calculate {
            strategy,
            strike,
            premium,
            current,
            contracts,
            contract_size,
            format,
            output,
            legacy_grid,
            break_even,
        } => commands::calculate::run(
            &CalculateArgs {
                strategy,
                strike,
                premium,
                current,
                contracts,
                contract_size,
                format,
                output,
                legacy_grid,
                break_even,
            },
            &config,
        ),
        Commands::Check => commands::check::run(&cli.config, &config),
    }
}

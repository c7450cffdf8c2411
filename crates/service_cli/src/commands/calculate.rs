//! Calculate command implementation
//!
//! Computes the payoff profile of a single strategy and renders it.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use strategy_core::calculator::{CalculatorConfig, ResultBundle, StrategyCalculator};
use strategy_core::grid::GridConfig;
use strategy_core::metrics::BreakEvenPolicy;
use strategy_core::types::{StrategyParameters, StrategyVariant};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::{write_report, OutputFormat, Report};
use crate::Result;

/// Arguments of the calculate command, as given on the command line.
#[derive(Debug, Clone)]
pub struct CalculateArgs {
    /// Strategy name (put, call, cash-secured-put, covered-call)
    pub strategy: String,
    /// Option strike price
    pub strike: f64,
    /// Premium received per share
    pub premium: f64,
    /// Current underlying price
    pub current: f64,
    /// Number of contracts
    pub contracts: u32,
    /// Shares per contract, falls back to the configured value
    pub contract_size: Option<u32>,
    /// Output format, falls back to the configured value
    pub format: Option<String>,
    /// Output file, stdout when absent
    pub output: Option<PathBuf>,
    /// Use the wide per-strategy grid instead of the configured one
    pub legacy_grid: bool,
    /// Covered-call break-even policy, falls back to the configured value
    pub break_even: Option<String>,
}

/// Run the calculate command
pub fn run(args: &CalculateArgs, config: &CliConfig) -> Result<()> {
    let format = match &args.format {
        Some(format) => format.parse::<OutputFormat>()?,
        None => config.output_format,
    };

    let bundle = calculate(args, config)?;

    info!(
        "Break-even {:.2}, current P/L {:.2}",
        bundle.break_even_price, bundle.current_payoff
    );

    let report = Report::new(&bundle);
    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_report(&report, format, &mut writer)?;
            writer.flush()?;
            info!("Results written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            write_report(&report, format, stdout.lock())?;
        }
    }

    Ok(())
}

/// Builds the calculator from `config` and `args` and computes the bundle.
pub fn calculate(args: &CalculateArgs, config: &CliConfig) -> Result<ResultBundle> {
    let variant: StrategyVariant = args.strategy.parse()?;
    let contract_size = args.contract_size.unwrap_or(config.contract_size);

    let params = StrategyParameters::new(args.strike, args.premium, args.current)
        .with_contract_size(contract_size)
        .with_contracts(args.contracts);

    let covered_call_break_even = match &args.break_even {
        Some(policy) => policy.parse::<BreakEvenPolicy>()?,
        None => config.break_even,
    };

    let grid = if args.legacy_grid {
        GridConfig::legacy_for(variant)
    } else {
        config.grid.into()
    };

    info!("Calculating {} returns...", variant);
    debug!(
        "strike={} premium={} current={} position={}x{}",
        params.strike_price,
        params.premium_per_share,
        params.current_price,
        params.number_of_contracts,
        params.contract_size
    );
    debug!(
        "grid {} x [{}, {}], break-even policy {}",
        grid.points, grid.low_multiplier, grid.high_multiplier, covered_call_break_even
    );

    let calculator = StrategyCalculator::new(CalculatorConfig {
        grid,
        covered_call_break_even,
    })?;

    Ok(calculator.compute(variant, &params)?)
}

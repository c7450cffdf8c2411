//! Check command implementation
//!
//! Prints the effective configuration after file and environment overrides.

use std::path::Path;

use strategy_core::calculator::StrategyCalculator;
use strategy_core::grid::GridConfig;
use strategy_core::types::StrategyVariant;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config_path: &Path, config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");

    let calculator = StrategyCalculator::new(config.calculator_config())?;
    let grid = calculator.config().grid;

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", config_path.display())
    };

    println!("Configuration: {}", source);
    println!("  log_level        {}", config.log_level);
    println!("  output_format    {}", config.output_format);
    println!("  contract_size    {}", config.contract_size);
    println!("  break_even       {}", config.break_even);
    println!(
        "  grid             {} x [{}, {}] of current price",
        grid.points, grid.low_multiplier, grid.high_multiplier
    );

    for variant in StrategyVariant::ALL {
        let legacy = GridConfig::legacy_for(variant);
        println!(
            "  legacy grid      {}: {} x [{}, {}]",
            variant, legacy.points, legacy.low_multiplier, legacy.high_multiplier
        );
    }

    info!("Configuration OK");
    Ok(())
}

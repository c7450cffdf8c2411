//! Rendering of result bundles as table, CSV or JSON.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;
use strategy_core::analysis::{classify_zones, compare_with_stock, PayoffZone, StockComparison};
use strategy_core::calculator::ResultBundle;
use strategy_core::types::StrategyVariant;

use crate::{CliError, Result};

/// Output format for the calculate command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Summary plus a boxed price listing
    #[default]
    Table,
    /// One row per grid price
    Csv,
    /// Full report as pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::invalid_argument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// A result bundle together with its presentation-side analysis.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Computed bundle
    #[serde(flatten)]
    pub bundle: &'a ResultBundle,
    /// Largest profit on the grid
    pub max_profit: Option<f64>,
    /// Largest loss on the grid
    pub max_loss: Option<f64>,
    /// Profit/loss zone per grid price
    pub zones: Vec<PayoffZone>,
    /// Comparison with holding the shares (covered calls only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<StockComparison>,
}

impl<'a> Report<'a> {
    /// Builds the report for `bundle`.
    pub fn new(bundle: &'a ResultBundle) -> Self {
        let comparison = match bundle.variant {
            StrategyVariant::CoveredCall => Some(compare_with_stock(bundle)),
            StrategyVariant::CashSecuredPut => None,
        };

        Self {
            bundle,
            max_profit: bundle.max_profit(),
            max_loss: bundle.max_loss(),
            zones: classify_zones(&bundle.curve),
            comparison,
        }
    }
}

#[derive(Debug, Serialize)]
struct CsvRow {
    price: f64,
    profit_loss: f64,
    zone: String,
    stock_only: Option<f64>,
    vs_holding: Option<String>,
}

/// Writes `report` to `out` in `format`.
pub fn write_report<W: Write>(report: &Report<'_>, format: OutputFormat, out: W) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(report, out),
        OutputFormat::Csv => write_csv(report, out),
        OutputFormat::Json => write_json(report, out),
    }
}

fn money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

fn write_table<W: Write>(report: &Report<'_>, mut out: W) -> Result<()> {
    let bundle = report.bundle;
    let params = &bundle.parameters;

    writeln!(out, "{} Returns", bundle.variant)?;
    writeln!(out, "  Strike price        {}", money(params.strike_price))?;
    writeln!(out, "  Premium / share     {}", money(params.premium_per_share))?;
    writeln!(out, "  Current price       {}", money(params.current_price))?;
    writeln!(
        out,
        "  Position            {} x {} shares",
        params.number_of_contracts, params.contract_size
    )?;
    writeln!(out, "  Break-even          {}", money(bundle.break_even_price))?;
    writeln!(out, "  Current P/L         {}", money(bundle.current_payoff))?;
    if let Some(max_profit) = report.max_profit {
        writeln!(out, "  Max profit (grid)   {}", money(max_profit))?;
    }
    if let Some(max_loss) = report.max_loss {
        writeln!(out, "  Max loss (grid)     {}", money(max_loss))?;
    }
    writeln!(out)?;

    match &report.comparison {
        None => {
            writeln!(out, "┌────────────┬──────────────┬────────┐")?;
            writeln!(out, "│ Price      │ P/L          │ Zone   │")?;
            writeln!(out, "├────────────┼──────────────┼────────┤")?;
            for ((price, pnl), zone) in bundle.rows().zip(&report.zones) {
                writeln!(
                    out,
                    "│ {:>10} │ {:>12} │ {:<6} │",
                    money(price),
                    money(pnl),
                    zone.to_string()
                )?;
            }
            writeln!(out, "└────────────┴──────────────┴────────┘")?;
        }
        Some(comparison) => {
            writeln!(
                out,
                "┌────────────┬──────────────┬────────┬──────────────┬─────────────────┐"
            )?;
            writeln!(
                out,
                "│ Price      │ P/L          │ Zone   │ Stock only   │ vs. holding     │"
            )?;
            writeln!(
                out,
                "├────────────┼──────────────┼────────┼──────────────┼─────────────────┤"
            )?;
            let extra = comparison.stock_only.iter().zip(&comparison.outcomes);
            for (((price, pnl), zone), (stock, outcome)) in
                bundle.rows().zip(&report.zones).zip(extra)
            {
                writeln!(
                    out,
                    "│ {:>10} │ {:>12} │ {:<6} │ {:>12} │ {:<15} │",
                    money(price),
                    money(pnl),
                    zone.to_string(),
                    money(stock),
                    outcome.to_string()
                )?;
            }
            writeln!(
                out,
                "└────────────┴──────────────┴────────┴──────────────┴─────────────────┘"
            )?;
        }
    }

    Ok(())
}

fn write_csv<W: Write>(report: &Report<'_>, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    for (i, ((price, profit_loss), zone)) in report.bundle.rows().zip(&report.zones).enumerate() {
        let (stock_only, vs_holding) = match &report.comparison {
            Some(c) => (
                c.stock_only.values().get(i).copied(),
                c.outcomes.get(i).map(|o| o.to_string()),
            ),
            None => (None, None),
        };

        writer.serialize(CsvRow {
            price,
            profit_loss,
            zone: zone.to_string(),
            stock_only,
            vs_holding,
        })?;
    }

    writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(report: &Report<'_>, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}

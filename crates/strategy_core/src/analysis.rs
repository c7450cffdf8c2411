//! Post-processing of result bundles for presentation layers.
//!
//! Classifies each grid point into a profit or loss zone and compares a
//! covered call with simply holding the shares.

use std::fmt;

use crate::calculator::ResultBundle;
use crate::grid::PriceGrid;
use crate::payoff::PayoffCurve;
use crate::types::StrategyParameters;

/// Sign of the position profit/loss at a grid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PayoffZone {
    /// Profit/loss at or above zero
    Profit,
    /// Profit/loss below zero
    Loss,
}

impl PayoffZone {
    /// Zone of a single profit/loss value. Zero counts as profit.
    #[inline]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            PayoffZone::Profit
        } else {
            PayoffZone::Loss
        }
    }
}

impl fmt::Display for PayoffZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffZone::Profit => f.write_str("profit"),
            PayoffZone::Loss => f.write_str("loss"),
        }
    }
}

/// Classifies every value of `curve`.
pub fn classify_zones(curve: &PayoffCurve) -> Vec<PayoffZone> {
    curve.iter().map(PayoffZone::of).collect()
}

/// Profit/loss of holding the position's shares, bought at the current price,
/// at every grid price.
pub fn stock_only_curve(grid: &PriceGrid, params: &StrategyParameters) -> PayoffCurve {
    let shares = params.position_multiplier();
    PayoffCurve::from_values(
        grid.iter()
            .map(|price| (price - params.current_price) * shares)
            .collect(),
    )
}

/// Covered-call outcome relative to holding the shares outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HoldingOutcome {
    /// The position loses money; selling the shares would have been better.
    BelowWater,
    /// Holding the shares alone would have earned more.
    TrailedHolding,
    /// The position is profitable and ahead of holding the shares.
    BeatHolding,
    /// Neither ahead nor behind.
    Even,
}

impl HoldingOutcome {
    /// Classifies one grid point. Precedence: `BelowWater`, `TrailedHolding`,
    /// `BeatHolding`, `Even`.
    pub fn classify(position: f64, stock_only: f64) -> Self {
        if position < 0.0 {
            HoldingOutcome::BelowWater
        } else if stock_only > position {
            HoldingOutcome::TrailedHolding
        } else if position > 0.0 && stock_only < position {
            HoldingOutcome::BeatHolding
        } else {
            HoldingOutcome::Even
        }
    }
}

impl fmt::Display for HoldingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HoldingOutcome::BelowWater => "below water",
            HoldingOutcome::TrailedHolding => "trailed holding",
            HoldingOutcome::BeatHolding => "beat holding",
            HoldingOutcome::Even => "even",
        };
        f.write_str(label)
    }
}

/// Position curve set against the stock-only curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StockComparison {
    /// Profit/loss of holding the shares alone
    pub stock_only: PayoffCurve,
    /// Per-point outcome of the position versus holding
    pub outcomes: Vec<HoldingOutcome>,
}

/// Compares a bundle's curve with holding the same number of shares.
///
/// Meaningful for covered calls; for a cash-secured put it shows what
/// owning the shares outright would have returned instead.
///
/// # Examples
/// ```
/// use strategy_core::analysis::{compare_with_stock, HoldingOutcome};
/// use strategy_core::calculator::compute_strategy_returns;
/// use strategy_core::types::{StrategyParameters, StrategyVariant};
///
/// let params = StrategyParameters::new(105.0, 2.0, 100.0);
/// let bundle = compute_strategy_returns(StrategyVariant::CoveredCall, params).unwrap();
/// let comparison = compare_with_stock(&bundle);
///
/// assert_eq!(comparison.outcomes.first(), Some(&HoldingOutcome::BelowWater));
/// assert_eq!(comparison.outcomes.last(), Some(&HoldingOutcome::TrailedHolding));
/// ```
pub fn compare_with_stock(bundle: &ResultBundle) -> StockComparison {
    let stock_only = stock_only_curve(&bundle.grid, &bundle.parameters);
    let outcomes = bundle
        .curve
        .iter()
        .zip(stock_only.iter())
        .map(|(position, stock)| HoldingOutcome::classify(position, stock))
        .collect();

    StockComparison {
        stock_only,
        outcomes,
    }
}

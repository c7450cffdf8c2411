//! End-to-end strategy calculation.
//!
//! Runs the pipeline parameters → grid → payoff curve → metrics and
//! packages the outcome as an immutable [`ResultBundle`].

use crate::grid::{generate_with, GridConfig, PriceGrid};
use crate::metrics::{derive_metrics, BreakEvenPolicy, COVERED_CALL_BREAK_EVEN};
use crate::payoff::{compute_payoff, PayoffCurve};
use crate::types::{StrategyError, StrategyParameters, StrategyVariant};

/// Tunable policies of the calculation pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculatorConfig {
    /// Price grid bounds and resolution
    pub grid: GridConfig,
    /// Break-even formula for covered calls
    pub covered_call_break_even: BreakEvenPolicy,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            covered_call_break_even: COVERED_CALL_BREAK_EVEN,
        }
    }
}

/// Complete result of one calculation request.
///
/// Only produced by [`StrategyCalculator::compute`]; serialisable for
/// output but not deserialisable, so grid and curve always stay parallel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResultBundle {
    /// Hypothetical underlying prices
    pub grid: PriceGrid,
    /// Position profit/loss at each grid price
    pub curve: PayoffCurve,
    /// Price at which the position breaks even
    pub break_even_price: f64,
    /// Profit/loss interpolated at the current price
    pub current_payoff: f64,
    /// Strategy evaluated
    pub variant: StrategyVariant,
    /// Inputs the bundle was computed from
    pub parameters: StrategyParameters,
}

impl ResultBundle {
    /// Iterates over `(price, profit_loss)` pairs in increasing price order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid.iter().zip(self.curve.iter())
    }

    /// Largest profit on the grid.
    pub fn max_profit(&self) -> Option<f64> {
        self.curve.max()
    }

    /// Largest loss on the grid (most negative value).
    pub fn max_loss(&self) -> Option<f64> {
        self.curve.min()
    }
}

/// Strategy calculator with a fixed configuration.
///
/// # Examples
/// ```
/// use strategy_core::calculator::{CalculatorConfig, StrategyCalculator};
/// use strategy_core::grid::GridConfig;
/// use strategy_core::types::{StrategyParameters, StrategyVariant};
///
/// let config = CalculatorConfig {
///     grid: GridConfig::legacy_for(StrategyVariant::CoveredCall),
///     ..CalculatorConfig::default()
/// };
/// let calculator = StrategyCalculator::new(config).unwrap();
///
/// let params = StrategyParameters::new(105.0, 1.5, 100.0);
/// let bundle = calculator.compute(StrategyVariant::CoveredCall, &params).unwrap();
/// assert_eq!(bundle.grid.len(), 200);
/// assert_eq!(bundle.break_even_price, 98.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrategyCalculator {
    config: CalculatorConfig,
}

impl StrategyCalculator {
    /// Creates a calculator after validating `config`.
    ///
    /// # Errors
    /// `StrategyError::InvalidParameter` if the grid configuration is invalid.
    pub fn new(config: CalculatorConfig) -> Result<Self, StrategyError> {
        config.grid.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Computes the result bundle for `variant` and `params`.
    ///
    /// # Errors
    /// `StrategyError::InvalidParameter` if any parameter is outside its
    /// domain. No partial result is produced.
    pub fn compute(
        &self,
        variant: StrategyVariant,
        params: &StrategyParameters,
    ) -> Result<ResultBundle, StrategyError> {
        params.validate()?;

        let grid = generate_with(params.current_price, &self.config.grid)?;
        let curve = compute_payoff(variant, &grid, params)?;
        let metrics = derive_metrics(
            variant,
            &grid,
            &curve,
            params,
            self.config.covered_call_break_even,
        )?;

        Ok(ResultBundle {
            grid,
            curve,
            break_even_price: metrics.break_even_price,
            current_payoff: metrics.current_payoff,
            variant,
            parameters: *params,
        })
    }
}

/// Computes strategy returns with the default configuration.
///
/// # Errors
/// `StrategyError::InvalidParameter` if any parameter is outside its domain.
///
/// # Examples
/// ```
/// use strategy_core::calculator::compute_strategy_returns;
/// use strategy_core::types::{StrategyParameters, StrategyVariant};
///
/// let params = StrategyParameters::new(100.0, 2.0, 100.0);
/// let bundle = compute_strategy_returns(StrategyVariant::CashSecuredPut, params).unwrap();
/// assert_eq!(bundle.grid.len(), 100);
/// assert_eq!(bundle.break_even_price, 98.0);
/// ```
pub fn compute_strategy_returns(
    variant: StrategyVariant,
    parameters: StrategyParameters,
) -> Result<ResultBundle, StrategyError> {
    StrategyCalculator::default().compute(variant, &parameters)
}

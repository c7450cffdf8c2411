//! Derived metrics: break-even price and current profit/loss.

use std::fmt;
use std::str::FromStr;

use crate::grid::PriceGrid;
use crate::math::interpolators::{Interpolator, LinearInterpolator};
use crate::payoff::PayoffCurve;
use crate::types::{StrategyError, StrategyParameters, StrategyVariant};

/// Reference price for the covered-call break-even.
///
/// Earlier revisions of the calculator disagreed on this formula; both are
/// kept so the choice is made in exactly one place
/// ([`COVERED_CALL_BREAK_EVEN`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BreakEvenPolicy {
    /// `current_price - premium`: shares are assumed bought at the current price.
    #[default]
    CurrentPriceBased,
    /// `strike_price - premium`.
    StrikeBased,
}

/// Break-even policy applied to covered calls by default.
pub const COVERED_CALL_BREAK_EVEN: BreakEvenPolicy = BreakEvenPolicy::CurrentPriceBased;

impl BreakEvenPolicy {
    /// Short identifier used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakEvenPolicy::CurrentPriceBased => "current",
            BreakEvenPolicy::StrikeBased => "strike",
        }
    }
}

impl fmt::Display for BreakEvenPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreakEvenPolicy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current" | "current-price" => Ok(BreakEvenPolicy::CurrentPriceBased),
            "strike" | "strike-price" => Ok(BreakEvenPolicy::StrikeBased),
            other => Err(StrategyError::invalid(
                "break_even_policy",
                format!("unknown policy '{}', expected current or strike", other),
            )),
        }
    }
}

/// Break-even price and profit/loss at the current price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Underlying price at which the position neither gains nor loses
    pub break_even_price: f64,
    /// Position profit/loss interpolated at the current price
    pub current_payoff: f64,
}

/// Break-even price for `variant`.
///
/// - Cash-secured put: `strike - premium`
/// - Covered call: per `policy`
pub fn break_even_price(
    variant: StrategyVariant,
    params: &StrategyParameters,
    policy: BreakEvenPolicy,
) -> f64 {
    match (variant, policy) {
        (StrategyVariant::CashSecuredPut, _)
        | (StrategyVariant::CoveredCall, BreakEvenPolicy::StrikeBased) => {
            params.strike_price - params.premium_per_share
        }
        (StrategyVariant::CoveredCall, BreakEvenPolicy::CurrentPriceBased) => {
            params.current_price - params.premium_per_share
        }
    }
}

/// Profit/loss at `price`, linearly interpolated over the grid.
///
/// Prices outside the grid take the nearest boundary value. A single-point
/// curve yields that point. A [`PriceGrid`] is never empty, so neither is a
/// curve parallel to it.
///
/// # Errors
/// `StrategyError::InvalidParameter` if grid and curve lengths differ.
pub fn interpolate_payoff(
    grid: &PriceGrid,
    curve: &PayoffCurve,
    price: f64,
) -> Result<f64, StrategyError> {
    if grid.len() != curve.len() {
        return Err(StrategyError::invalid(
            "curve",
            format!(
                "must have one value per grid price: grid has {}, curve has {}",
                grid.len(),
                curve.len()
            ),
        ));
    }

    match curve.values() {
        [only] => Ok(*only),
        values => {
            let interp = LinearInterpolator::new(grid.prices(), values)?;
            Ok(interp.interpolate_clamped(price))
        }
    }
}

/// Derives break-even and current profit/loss from a computed curve.
///
/// # Errors
/// `StrategyError::InvalidParameter` if `params` fails validation or the
/// curve is not parallel to the grid.
///
/// # Examples
/// ```
/// use strategy_core::grid::generate;
/// use strategy_core::metrics::{derive_metrics, COVERED_CALL_BREAK_EVEN};
/// use strategy_core::payoff::compute_payoff;
/// use strategy_core::types::{StrategyParameters, StrategyVariant};
///
/// let params = StrategyParameters::new(95.0, 2.0, 100.0);
/// let variant = StrategyVariant::CashSecuredPut;
/// let grid = generate(params.current_price, variant).unwrap();
/// let curve = compute_payoff(variant, &grid, &params).unwrap();
///
/// let metrics = derive_metrics(variant, &grid, &curve, &params, COVERED_CALL_BREAK_EVEN).unwrap();
/// assert_eq!(metrics.break_even_price, 93.0);
/// assert_eq!(metrics.current_payoff, 200.0);
/// ```
pub fn derive_metrics(
    variant: StrategyVariant,
    grid: &PriceGrid,
    curve: &PayoffCurve,
    params: &StrategyParameters,
    policy: BreakEvenPolicy,
) -> Result<Metrics, StrategyError> {
    params.validate()?;

    Ok(Metrics {
        break_even_price: break_even_price(variant, params, policy),
        current_payoff: interpolate_payoff(grid, curve, params.current_price)?,
    })
}

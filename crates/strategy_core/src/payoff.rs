//! Payoff engine.
//!
//! Evaluates a strategy's profit/loss at expiry for every price on a grid
//! and scales it from per-share to position dollars
//! (`contract_size × number_of_contracts` shares).

use crate::grid::PriceGrid;
use crate::types::{StrategyError, StrategyParameters, StrategyVariant};

/// Position profit/loss values parallel to a [`PriceGrid`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PayoffCurve {
    values: Vec<f64>,
}

impl PayoffCurve {
    /// Wraps precomputed values.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// The profit/loss values, one per grid price.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the curve holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the values in grid order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Largest value on the curve.
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Smallest value on the curve.
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }
}

/// Computes the position payoff of `variant` at every grid price.
///
/// # Errors
/// `StrategyError::InvalidParameter` if `params` fails validation or a
/// position value is not representable as a finite `f64`.
///
/// # Examples
/// ```
/// use strategy_core::grid::PriceGrid;
/// use strategy_core::payoff::compute_payoff;
/// use strategy_core::types::{StrategyParameters, StrategyVariant};
///
/// let grid = PriceGrid::from_prices(vec![90.0, 110.0]).unwrap();
/// let params = StrategyParameters::new(100.0, 2.0, 100.0);
///
/// let curve = compute_payoff(StrategyVariant::CashSecuredPut, &grid, &params).unwrap();
/// assert_eq!(curve.values(), &[-800.0, 200.0]);
/// ```
pub fn compute_payoff(
    variant: StrategyVariant,
    grid: &PriceGrid,
    params: &StrategyParameters,
) -> Result<PayoffCurve, StrategyError> {
    params.validate()?;

    let multiplier = params.position_multiplier();
    let values = grid
        .iter()
        .map(|price| {
            variant.payoff_per_share(
                price,
                params.strike_price,
                params.premium_per_share,
                params.current_price,
            ) * multiplier
        })
        .collect::<Vec<f64>>();

    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(StrategyError::invalid(
            "parameters",
            format!(
                "position profit/loss overflows at grid price {}",
                grid.prices()[i]
            ),
        ));
    }

    Ok(PayoffCurve { values })
}

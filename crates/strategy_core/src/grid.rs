//! Price grid generation.
//!
//! Produces the hypothetical underlying prices a payoff curve is evaluated
//! on: `points` evenly spaced values over
//! `[current × low_multiplier, current × high_multiplier]`.

use crate::types::params::ensure_positive_price;
use crate::types::{StrategyError, StrategyVariant};

/// Default lower bound as a multiple of the current price.
pub const DEFAULT_LOW_MULTIPLIER: f64 = 0.5;

/// Default upper bound as a multiple of the current price.
pub const DEFAULT_HIGH_MULTIPLIER: f64 = 1.5;

/// Default number of grid points.
pub const DEFAULT_GRID_POINTS: usize = 100;

/// Bounds and resolution of a price grid.
///
/// The default is centred on the current price and identical for both
/// strategies. [`GridConfig::legacy_for`] reproduces the wider, asymmetric
/// per-strategy ranges used by earlier revisions of the calculator.
///
/// # Examples
/// ```
/// use strategy_core::grid::GridConfig;
///
/// let config = GridConfig::default();
/// assert_eq!(config.low_multiplier, 0.5);
/// assert_eq!(config.high_multiplier, 1.5);
/// assert_eq!(config.points, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Lower bound multiplier (must be > 0)
    pub low_multiplier: f64,
    /// Upper bound multiplier (must exceed `low_multiplier`)
    pub high_multiplier: f64,
    /// Number of prices (at least 2)
    pub points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            low_multiplier: DEFAULT_LOW_MULTIPLIER,
            high_multiplier: DEFAULT_HIGH_MULTIPLIER,
            points: DEFAULT_GRID_POINTS,
        }
    }
}

impl GridConfig {
    /// Creates a grid configuration.
    pub fn new(low_multiplier: f64, high_multiplier: f64, points: usize) -> Self {
        Self {
            low_multiplier,
            high_multiplier,
            points,
        }
    }

    /// Per-strategy ranges of the earlier calculator revisions.
    ///
    /// - Cash-secured put: 0.1× to 2.0×, 200 points
    /// - Covered call: 0.5× to 2.0×, 200 points
    pub fn legacy_for(variant: StrategyVariant) -> Self {
        match variant {
            StrategyVariant::CashSecuredPut => Self::new(0.1, 2.0, 200),
            StrategyVariant::CoveredCall => Self::new(0.5, 2.0, 200),
        }
    }

    /// Validates multipliers and resolution.
    ///
    /// # Errors
    /// `StrategyError::InvalidParameter` if a multiplier is non-finite,
    /// `low_multiplier <= 0`, `high_multiplier <= low_multiplier`, or
    /// `points < 2`.
    pub fn validate(&self) -> Result<(), StrategyError> {
        if !self.low_multiplier.is_finite() || self.low_multiplier <= 0.0 {
            return Err(StrategyError::invalid(
                "low_multiplier",
                format!("must be finite and positive, got {}", self.low_multiplier),
            ));
        }

        if !self.high_multiplier.is_finite() || self.high_multiplier <= self.low_multiplier {
            return Err(StrategyError::invalid(
                "high_multiplier",
                format!(
                    "must be finite and greater than low_multiplier ({}), got {}",
                    self.low_multiplier, self.high_multiplier
                ),
            ));
        }

        if self.points < 2 {
            return Err(StrategyError::invalid(
                "points",
                format!("must be at least 2, got {}", self.points),
            ));
        }

        Ok(())
    }
}

/// Strictly increasing sequence of hypothetical underlying prices.
///
/// With the `serde` feature the grid serialises as a plain array, and
/// deserialisation goes through [`PriceGrid::from_prices`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct PriceGrid {
    prices: Vec<f64>,
}

impl TryFrom<Vec<f64>> for PriceGrid {
    type Error = StrategyError;

    fn try_from(prices: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_prices(prices)
    }
}

impl From<PriceGrid> for Vec<f64> {
    fn from(grid: PriceGrid) -> Self {
        grid.prices
    }
}

impl PriceGrid {
    /// Builds a grid from explicit prices.
    ///
    /// # Errors
    /// `StrategyError::InvalidParameter` unless the prices are non-empty,
    /// finite, positive and strictly increasing.
    ///
    /// # Examples
    /// ```
    /// use strategy_core::grid::PriceGrid;
    ///
    /// let grid = PriceGrid::from_prices(vec![90.0, 100.0, 110.0]).unwrap();
    /// assert_eq!(grid.len(), 3);
    /// assert!(PriceGrid::from_prices(vec![100.0, 90.0]).is_err());
    /// ```
    pub fn from_prices(prices: Vec<f64>) -> Result<Self, StrategyError> {
        if prices.is_empty() {
            return Err(StrategyError::invalid("grid", "must contain at least one price"));
        }

        for &price in &prices {
            ensure_positive_price("grid", price)?;
        }

        if let Some(i) = prices.windows(2).position(|w| w[1] <= w[0]) {
            return Err(StrategyError::invalid(
                "grid",
                format!(
                    "prices must be strictly increasing, got {} then {}",
                    prices[i],
                    prices[i + 1]
                ),
            ));
        }

        Ok(Self { prices })
    }

    /// The prices in increasing order.
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Number of prices.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Always false for a constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Lowest price.
    #[inline]
    pub fn first(&self) -> Option<f64> {
        self.prices.first().copied()
    }

    /// Highest price.
    #[inline]
    pub fn last(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    /// Iterates over the prices in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.prices.iter().copied()
    }
}

/// Generates the default grid around `current_price`.
///
/// The default bounds are strategy-agnostic; `variant` is accepted so that
/// callers do not need to know that.
///
/// # Errors
/// `StrategyError::InvalidParameter` if `current_price` is not positive or
/// too extreme to span distinct finite prices.
///
/// # Examples
/// ```
/// use strategy_core::grid::generate;
/// use strategy_core::types::StrategyVariant;
///
/// let grid = generate(100.0, StrategyVariant::CashSecuredPut).unwrap();
/// assert_eq!(grid.len(), 100);
/// assert_eq!(grid.first(), Some(50.0));
/// assert_eq!(grid.last(), Some(150.0));
/// ```
pub fn generate(current_price: f64, _variant: StrategyVariant) -> Result<PriceGrid, StrategyError> {
    generate_with(current_price, &GridConfig::default())
}

/// Generates a grid around `current_price` using explicit bounds.
///
/// The first and last prices equal the bounds exactly.
///
/// # Errors
/// `StrategyError::InvalidParameter` if the configuration is invalid, or if
/// `current_price` is not positive or its bounds overflow, underflow to zero,
/// or are too close to hold `points` distinct prices.
pub fn generate_with(current_price: f64, config: &GridConfig) -> Result<PriceGrid, StrategyError> {
    ensure_positive_price("current_price", current_price)?;
    config.validate()?;

    let low = current_price * config.low_multiplier;
    let high = current_price * config.high_multiplier;
    let last = config.points - 1;
    let step = (high - low) / last as f64;

    if low <= 0.0 || !high.is_finite() || step <= 0.0 {
        return Err(StrategyError::invalid(
            "current_price",
            format!(
                "{} cannot span a grid of [{} x, {} x]",
                current_price, config.low_multiplier, config.high_multiplier
            ),
        ));
    }

    let prices: Vec<f64> = (0..config.points)
        .map(|i| if i == last { high } else { low + step * i as f64 })
        .collect();

    // Subnormal spacing can still collapse neighbouring prices.
    PriceGrid::from_prices(prices).map_err(|e| {
        StrategyError::invalid(
            "current_price",
            format!("{} is too small for {} grid points: {}", current_price, config.points, e),
        )
    })
}

//! Strategy parameters.
//!
//! Plain data describing one short-option position and the market state it
//! is evaluated against. Validation is explicit and re-run by every
//! calculation entry point.

use super::error::StrategyError;

/// Market convention for shares controlled by one equity option contract.
pub const DEFAULT_CONTRACT_SIZE: u32 = 100;

/// Inputs for a single-leg strategy calculation.
///
/// # Examples
/// ```
/// use strategy_core::types::StrategyParameters;
///
/// let params = StrategyParameters::new(100.0, 2.0, 100.0).with_contracts(3);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.contract_size, 100);
/// assert_eq!(params.share_count(), 300);
///
/// let invalid = StrategyParameters::new(0.0, 2.0, 100.0);
/// assert!(invalid.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyParameters {
    /// Strike price (must be positive)
    pub strike_price: f64,
    /// Premium received per share (must be non-negative)
    pub premium_per_share: f64,
    /// Current underlying price (must be positive)
    pub current_price: f64,
    /// Shares per contract (at least 1)
    pub contract_size: u32,
    /// Number of contracts sold (at least 1)
    pub number_of_contracts: u32,
}

impl StrategyParameters {
    /// Creates parameters for one standard contract.
    pub fn new(strike_price: f64, premium_per_share: f64, current_price: f64) -> Self {
        Self {
            strike_price,
            premium_per_share,
            current_price,
            contract_size: DEFAULT_CONTRACT_SIZE,
            number_of_contracts: 1,
        }
    }

    /// Sets the number of shares per contract.
    pub fn with_contract_size(mut self, contract_size: u32) -> Self {
        self.contract_size = contract_size;
        self
    }

    /// Sets the number of contracts.
    pub fn with_contracts(mut self, number_of_contracts: u32) -> Self {
        self.number_of_contracts = number_of_contracts;
        self
    }

    /// Checks every field against its domain constraint.
    ///
    /// # Errors
    /// `StrategyError::InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<(), StrategyError> {
        ensure_positive_price("strike_price", self.strike_price)?;
        ensure_positive_price("current_price", self.current_price)?;

        if !self.premium_per_share.is_finite() || self.premium_per_share < 0.0 {
            return Err(StrategyError::invalid(
                "premium_per_share",
                format!(
                    "must be finite and non-negative, got {}",
                    self.premium_per_share
                ),
            ));
        }

        if self.contract_size < 1 {
            return Err(StrategyError::invalid(
                "contract_size",
                format!("must be at least 1, got {}", self.contract_size),
            ));
        }

        if self.number_of_contracts < 1 {
            return Err(StrategyError::invalid(
                "number_of_contracts",
                format!("must be at least 1, got {}", self.number_of_contracts),
            ));
        }

        Ok(())
    }

    /// Total shares covered by the position.
    #[inline]
    pub fn share_count(&self) -> u64 {
        u64::from(self.contract_size) * u64::from(self.number_of_contracts)
    }

    /// Multiplier converting per-share values into position dollars.
    #[inline]
    pub fn position_multiplier(&self) -> f64 {
        self.share_count() as f64
    }
}

pub(crate) fn ensure_positive_price(parameter: &'static str, value: f64) -> Result<(), StrategyError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(StrategyError::invalid(
            parameter,
            format!("must be finite and positive, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let params = StrategyParameters::new(100.0, 2.0, 100.0);
        assert_eq!(params.contract_size, DEFAULT_CONTRACT_SIZE);
        assert_eq!(params.number_of_contracts, 1);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let params = StrategyParameters::new(50.0, 1.0, 48.0)
            .with_contract_size(10)
            .with_contracts(4);
        assert_eq!(params.share_count(), 40);
        assert_eq!(params.position_multiplier(), 40.0);
    }

    #[test]
    fn test_zero_premium_is_valid() {
        assert!(StrategyParameters::new(100.0, 0.0, 100.0).validate().is_ok());
    }

    #[test]
    fn test_invalid_strike_zero() {
        let err = StrategyParameters::new(0.0, 2.0, 100.0).validate().unwrap_err();
        assert_eq!(err.parameter(), "strike_price");
    }

    #[test]
    fn test_invalid_current_negative() {
        let err = StrategyParameters::new(100.0, 2.0, -5.0).validate().unwrap_err();
        assert_eq!(err.parameter(), "current_price");
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_invalid_premium() {
        for premium in [-0.01, f64::NAN, f64::INFINITY] {
            let err = StrategyParameters::new(100.0, premium, 100.0)
                .validate()
                .unwrap_err();
            assert_eq!(err.parameter(), "premium_per_share");
        }
    }

    #[test]
    fn test_invalid_non_finite_prices() {
        let err = StrategyParameters::new(f64::NAN, 2.0, 100.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), "strike_price");

        let err = StrategyParameters::new(100.0, 2.0, f64::INFINITY)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), "current_price");
    }

    #[test]
    fn test_invalid_contract_size_zero() {
        let err = StrategyParameters::new(100.0, 2.0, 100.0)
            .with_contract_size(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), "contract_size");
    }

    #[test]
    fn test_invalid_number_of_contracts_zero() {
        let err = StrategyParameters::new(100.0, 2.0, 100.0)
            .with_contracts(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), "number_of_contracts");
    }

    #[test]
    fn test_share_count_does_not_overflow() {
        let params = StrategyParameters::new(100.0, 2.0, 100.0)
            .with_contract_size(u32::MAX)
            .with_contracts(u32::MAX);
        assert_eq!(params.share_count(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }
}

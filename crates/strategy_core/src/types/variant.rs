//! Strategy variant definitions.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::StrategyError;

/// Single-leg short option strategy.
///
/// Each variant selects a per-share payoff formula with exactly one kink
/// at the strike price.
///
/// # Variants
/// - `CashSecuredPut`: short put backed by cash to buy at the strike
/// - `CoveredCall`: short call against shares already held
///
/// # Examples
/// ```
/// use strategy_core::types::StrategyVariant;
///
/// let put = StrategyVariant::CashSecuredPut;
/// assert_eq!(put.payoff_per_share(90.0_f64, 100.0, 2.0, 100.0), -8.0);
/// assert_eq!(put.payoff_per_share(110.0_f64, 100.0, 2.0, 100.0), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StrategyVariant {
    /// Short put; assigned shares are bought at the strike.
    CashSecuredPut,
    /// Short call on owned shares; assigned shares are sold at the strike.
    CoveredCall,
}

impl StrategyVariant {
    /// All supported variants.
    pub const ALL: [StrategyVariant; 2] = [Self::CashSecuredPut, Self::CoveredCall];

    /// Evaluate the per-share profit/loss at expiry for an underlying `price`.
    ///
    /// # Formula
    ///
    /// ```text
    /// CashSecuredPut:  S >= K  ->  P
    ///                  S <  K  ->  S - K + P
    /// CoveredCall:     S <= K  ->  P + (S - S0)
    ///                  S >  K  ->  P + (K - S0)
    /// ```
    ///
    /// where `S` is the hypothetical price, `K` the strike, `P` the premium
    /// and `S0` the current price. Both branches agree at `S == K`.
    ///
    /// # Arguments
    /// * `price` - Hypothetical underlying price at expiry
    /// * `strike` - Strike price
    /// * `premium` - Premium received per share
    /// * `current` - Current underlying price (cost basis of held shares)
    #[inline]
    pub fn payoff_per_share<T: Float>(&self, price: T, strike: T, premium: T, current: T) -> T {
        match self {
            StrategyVariant::CashSecuredPut => {
                if price >= strike {
                    premium
                } else {
                    price - strike + premium
                }
            }
            StrategyVariant::CoveredCall => {
                if price <= strike {
                    premium + (price - current)
                } else {
                    premium + (strike - current)
                }
            }
        }
    }

    /// Human-readable strategy name.
    pub fn display_name(&self) -> &'static str {
        match self {
            StrategyVariant::CashSecuredPut => "Cash-Secured Put",
            StrategyVariant::CoveredCall => "Covered Call",
        }
    }

    /// Short identifier used on the command line and in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyVariant::CashSecuredPut => "cash-secured-put",
            StrategyVariant::CoveredCall => "covered-call",
        }
    }
}

impl fmt::Display for StrategyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for StrategyVariant {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "put" | "csp" | "cash-secured-put" => Ok(StrategyVariant::CashSecuredPut),
            "call" | "cc" | "covered-call" => Ok(StrategyVariant::CoveredCall),
            other => Err(StrategyError::invalid(
                "variant",
                format!("unknown strategy '{}', expected one of: put, call", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Cash-secured put

    #[test]
    fn test_put_above_strike_keeps_premium() {
        let put = StrategyVariant::CashSecuredPut;
        assert_eq!(put.payoff_per_share(120.0_f64, 100.0, 2.5, 100.0), 2.5);
    }

    #[test]
    fn test_put_at_strike_uses_upper_branch() {
        let put = StrategyVariant::CashSecuredPut;
        assert_eq!(put.payoff_per_share(100.0_f64, 100.0, 2.5, 100.0), 2.5);
    }

    #[test]
    fn test_put_below_strike_loses_intrinsic() {
        let put = StrategyVariant::CashSecuredPut;
        assert_relative_eq!(put.payoff_per_share(80.0_f64, 100.0, 2.5, 100.0), -17.5);
    }

    #[test]
    fn test_put_ignores_current_price() {
        let put = StrategyVariant::CashSecuredPut;
        let a = put.payoff_per_share(95.0_f64, 100.0, 2.0, 50.0);
        let b = put.payoff_per_share(95.0_f64, 100.0, 2.0, 150.0);
        assert_eq!(a, b);
    }

    // Covered call

    #[test]
    fn test_call_below_strike_tracks_stock() {
        let call = StrategyVariant::CoveredCall;
        assert_relative_eq!(call.payoff_per_share(90.0_f64, 105.0, 2.0, 100.0), -8.0);
    }

    #[test]
    fn test_call_above_strike_is_capped() {
        let call = StrategyVariant::CoveredCall;
        assert_relative_eq!(call.payoff_per_share(130.0_f64, 105.0, 2.0, 100.0), 7.0);
        assert_relative_eq!(call.payoff_per_share(500.0_f64, 105.0, 2.0, 100.0), 7.0);
    }

    #[test]
    fn test_call_continuous_at_strike() {
        let call = StrategyVariant::CoveredCall;
        let at = call.payoff_per_share(105.0_f64, 105.0, 2.0, 100.0);
        let above = call.payoff_per_share(105.0_f64 + 1e-9, 105.0, 2.0, 100.0);
        assert_relative_eq!(at, above, epsilon = 1e-8);
    }

    #[test]
    fn test_f32_compatibility() {
        let put = StrategyVariant::CashSecuredPut;
        let payoff = put.payoff_per_share(90.0_f32, 100.0_f32, 2.0_f32, 100.0_f32);
        assert!((payoff - (-8.0_f32)).abs() < 1e-5);
    }

    // Parsing and display

    #[test]
    fn test_from_str_aliases() {
        for s in ["put", "CSP", "cash-secured-put", "cash_secured_put"] {
            assert_eq!(
                s.parse::<StrategyVariant>().unwrap(),
                StrategyVariant::CashSecuredPut
            );
        }
        for s in ["call", "cc", "Covered-Call", " covered_call "] {
            assert_eq!(s.parse::<StrategyVariant>().unwrap(), StrategyVariant::CoveredCall);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "straddle".parse::<StrategyVariant>().unwrap_err();
        assert_eq!(err.parameter(), "variant");
        assert!(err.to_string().contains("straddle"));
    }

    #[test]
    fn test_display_and_as_str() {
        assert_eq!(StrategyVariant::CashSecuredPut.to_string(), "Cash-Secured Put");
        assert_eq!(StrategyVariant::CoveredCall.to_string(), "Covered Call");
        for variant in StrategyVariant::ALL {
            assert_eq!(variant.as_str().parse::<StrategyVariant>().unwrap(), variant);
        }
    }
}

//! Error types for strategy calculations.
//!
//! This module provides:
//! - `StrategyError`: The single error kind surfaced by the calculation pipeline
//! - `InterpolationError`: Errors from the linear interpolator

use thiserror::Error;

/// Errors surfaced by the strategy calculation pipeline.
///
/// Every failure is a parameter outside its domain. The pipeline either
/// produces a complete result or fails with this error before producing
/// any output.
///
/// # Examples
/// ```
/// use strategy_core::types::StrategyError;
///
/// let err = StrategyError::invalid("strike_price", "must be positive, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter `strike_price`: must be positive, got 0"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// An input parameter violates its domain constraint.
    #[error("Invalid parameter `{parameter}`: {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Description of the violated constraint
        message: String,
    },
}

impl StrategyError {
    /// Create an `InvalidParameter` error.
    pub fn invalid(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }

    /// Name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { parameter, .. } => parameter,
        }
    }
}

/// Interpolation errors.
///
/// # Examples
/// ```
/// use strategy_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 2 };
/// assert!(format!("{}", err).contains("need at least 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<InterpolationError> for StrategyError {
    fn from(err: InterpolationError) -> Self {
        StrategyError::invalid("curve", err.to_string())
    }
}

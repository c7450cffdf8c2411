//! Core strategy types.
//!
//! This module provides:
//! - `variant`: The supported short-option strategies and their per-share payoff
//! - `params`: Position and market-state inputs with validation
//! - `error`: Structured error types for validation and interpolation
//!
//! # Re-exports
//!
//! - [`StrategyVariant`] from `variant`
//! - [`StrategyParameters`], [`DEFAULT_CONTRACT_SIZE`] from `params`
//! - [`StrategyError`], [`InterpolationError`] from `error`

pub mod error;
pub mod params;
pub mod variant;

pub use error::{InterpolationError, StrategyError};
pub use params::{StrategyParameters, DEFAULT_CONTRACT_SIZE};
pub use variant::StrategyVariant;

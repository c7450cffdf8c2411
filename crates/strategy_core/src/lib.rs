//! # strategy_core: Payoff Profiles for Short Option Strategies
//!
//! Computes the profit/loss at expiry of two single-leg strategies, the
//! cash-secured put and the covered call, across a synthetic range of
//! underlying prices, and derives the break-even price and the profit/loss
//! at the current market price.
//!
//! ## Pipeline
//!
//! ```text
//! StrategyParameters ─▶ grid ─▶ payoff ─▶ metrics ─▶ ResultBundle
//! ```
//!
//! - [`grid`]: evenly spaced prices around the current price
//! - [`payoff`]: position profit/loss at each grid price
//! - [`metrics`]: break-even price and interpolated current profit/loss
//! - [`calculator`]: runs the pipeline and packages a [`calculator::ResultBundle`]
//! - [`analysis`]: zone classification and comparison with holding the shares
//!
//! Every stage is a pure function of its inputs. There is no I/O, logging or
//! shared state; the only failure is [`types::StrategyError::InvalidParameter`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use strategy_core::calculator::compute_strategy_returns;
//! use strategy_core::types::{StrategyParameters, StrategyVariant};
//!
//! let params = StrategyParameters::new(100.0, 2.0, 100.0);
//! let bundle = compute_strategy_returns(StrategyVariant::CashSecuredPut, params).unwrap();
//!
//! assert_eq!(bundle.break_even_price, 98.0);
//! for (price, pnl) in bundle.rows().take(3) {
//!     assert!(pnl < 0.0, "deep below the strike at {}", price);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for parameters, grids, curves and result bundles

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analysis;
pub mod calculator;
pub mod grid;
pub mod math;
pub mod metrics;
pub mod payoff;
pub mod types;

//! Numerical building blocks for payoff analysis.

pub mod interpolators;

//! Interpolation over payoff curves.
//!
//! ## Core Trait
//!
//! 1D interpolators implement [`Interpolator`]:
//! - `interpolate_clamped(x: T) -> T`: value with `x` clamped to the domain
//! - `domain() -> (T, T)`: valid interpolation range
//!
//! ## Example
//!
//! ```
//! use strategy_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs: [f64; 3] = [90.0, 100.0, 110.0];
//! let ys = [-800.0, 200.0, 200.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! assert!((interp.interpolate_clamped(95.0) - (-300.0)).abs() < 1e-10);
//! assert_eq!(interp.interpolate_clamped(50.0), -800.0);
//! ```

mod linear;
mod traits;

pub use linear::LinearInterpolator;
pub use traits::Interpolator;

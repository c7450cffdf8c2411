//! Interpolator trait.

use num_traits::Float;

/// One-dimensional interpolation over sorted knots.
pub trait Interpolator<T: Float> {
    /// Returns `(x_min, x_max)`.
    fn domain(&self) -> (T, T);

    /// Interpolate at `x` after clamping it into the domain.
    ///
    /// Points left of the domain take the first knot's value, points right
    /// of it take the last knot's value. Knots return their value exactly.
    fn interpolate_clamped(&self, x: T) -> T;
}

//! Linear interpolation implementation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Stores sorted (x, y) data points and performs linear interpolation
/// between adjacent points.
///
/// # Construction
///
/// Data points are sorted by x-coordinate during construction.
/// At least 2 data points with distinct x-coordinates are required.
///
/// # Example
///
/// ```
/// use strategy_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 2.0, 4.0, 6.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values (in same order as xs after sorting)
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y data points.
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or repeated x
    ///
    /// # Example
    ///
    /// ```
    /// use strategy_core::math::interpolators::LinearInterpolator;
    ///
    /// let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    ///
    /// let result = LinearInterpolator::new(&[0.0], &[0.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        if let Some(i) = pairs.windows(2).position(|w| w[0].0 == w[1].0) {
            return Err(InterpolationError::InvalidInput(format!(
                "x-coordinates must be distinct, repeated value at sorted index {}",
                i + 1
            )));
        }

        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        Ok(Self {
            xs: sorted_xs,
            ys: sorted_ys,
        })
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the index `i` such that `xs[i] <= x < xs[i+1]`,
    /// clamped to the segment range [0, n-2].
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);

        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }

    #[inline]
    fn evaluate_segment(&self, x: T) -> T {
        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        // y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
        let t = (x - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Piecewise linear value at `x`, flat beyond the outer knots.
    ///
    /// # Example
    ///
    /// ```
    /// use strategy_core::math::interpolators::{Interpolator, LinearInterpolator};
    ///
    /// let interp = LinearInterpolator::<f64>::new(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
    /// assert!((interp.interpolate_clamped(0.5) - 1.0).abs() < 1e-10);
    /// assert_eq!(interp.interpolate_clamped(2.5), 4.0);
    /// ```
    fn interpolate_clamped(&self, x: T) -> T {
        let (x_min, x_max) = self.domain();

        if x <= x_min {
            self.ys[0]
        } else if x >= x_max {
            self.ys[self.ys.len() - 1]
        } else {
            self.evaluate_segment(x)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_new_with_minimum_points() {
        let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(interp.len(), 2);
        assert!(!interp.is_empty());
    }

    #[test]
    fn test_new_insufficient_data() {
        let xs: [f64; 0] = [];
        let ys: [f64; 0] = [];
        match LinearInterpolator::new(&xs, &ys).unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 0);
                assert_eq!(need, 2);
            }
            _ => panic!("Expected InsufficientData error"),
        }

        match LinearInterpolator::new(&[1.0], &[2.0]).unwrap_err() {
            InterpolationError::InsufficientData { got, .. } => assert_eq!(got, 1),
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_new_mismatched_lengths() {
        match LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err() {
            InterpolationError::InvalidInput(msg) => assert!(msg.contains("same length")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_new_rejects_repeated_x() {
        match LinearInterpolator::new(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err() {
            InterpolationError::InvalidInput(msg) => assert!(msg.contains("distinct")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_new_auto_sorts_unsorted_data() {
        let interp = LinearInterpolator::new(&[3.0, 1.0, 2.0, 0.0], &[9.0, 1.0, 4.0, 0.0]).unwrap();
        assert_eq!(interp.xs(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(interp.ys(), &[0.0, 1.0, 4.0, 9.0]);
    }

    // ========================================
    // Interpolation
    // ========================================

    #[test]
    fn test_interpolate_at_knot_points_is_exact() {
        let xs = [50.0, 50.0 + 100.0 / 99.0, 50.0 + 200.0 / 99.0];
        let ys = [-5000.0, -4898.989898989899, -4797.979797979798];
        let interp = LinearInterpolator::new(&xs, &ys).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_eq!(interp.interpolate_clamped(*x), *y);
        }
    }

    #[test]
    fn test_interpolate_midpoints() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 2.0, 4.0, 6.0]).unwrap();
        assert_relative_eq!(interp.interpolate_clamped(0.5), 1.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate_clamped(1.5), 3.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate_clamped(2.5), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_across_kink() {
        // Put payoff around a 100 strike: flat above, sloped below
        let interp =
            LinearInterpolator::new(&[90.0, 100.0, 110.0], &[-800.0, 200.0, 200.0]).unwrap();
        assert_relative_eq!(interp.interpolate_clamped(95.0), -300.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate_clamped(105.0), 200.0, epsilon = 1e-10);
    }

    #[test]
    fn test_interpolate_clamped_outside_domain() {
        let interp = LinearInterpolator::new(&[1.0, 2.0, 3.0], &[10.0, 20.0, 15.0]).unwrap();
        assert_eq!(interp.interpolate_clamped(0.0), 10.0);
        assert_eq!(interp.interpolate_clamped(-1e9), 10.0);
        assert_eq!(interp.interpolate_clamped(3.5), 15.0);
        assert_eq!(interp.interpolate_clamped(f64::INFINITY), 15.0);
    }

    #[test]
    fn test_interpolate_clamped_at_domain_edges() {
        let interp = LinearInterpolator::new(&[1.0, 2.0, 3.0], &[10.0, 20.0, 15.0]).unwrap();
        assert_eq!(interp.domain(), (1.0, 3.0));
        assert_eq!(interp.interpolate_clamped(1.0), 10.0);
        assert_eq!(interp.interpolate_clamped(3.0), 15.0);
        assert_relative_eq!(interp.interpolate_clamped(2.5), 17.5, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_f32() {
        let interp = LinearInterpolator::new(&[0.0_f32, 1.0, 2.0], &[0.0_f32, 2.0, 4.0]).unwrap();
        let y = interp.interpolate_clamped(0.5_f32);
        assert!((y - 1.0_f32).abs() < 1e-6);
    }
}

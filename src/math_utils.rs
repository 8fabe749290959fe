// src/math_utils.rs
//! Standard normal distribution primitives.

use std::f64::consts::{PI, SQRT_2};

/// Standard normal probability density function
///
/// # Formula
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Standard normal cumulative distribution function
///
/// # Formula
/// ```text
/// Φ(x) = ½ (1 + erf(x/√2)) = ½ erfc(-x/√2)
/// ```
///
/// Evaluated through `erfc` so the lower tail keeps full relative precision
/// instead of cancelling against 1.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0), 0.3989422804014327, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_symmetric_and_underflows() {
        assert_eq!(norm_pdf(1.3), norm_pdf(-1.3));
        assert_eq!(norm_pdf(50.0), 0.0);
    }

    #[test]
    fn test_norm_cdf_known_values() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(norm_cdf(1.0), 0.8413447460685429, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0), 1.0 - 0.8413447460685429, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_tails() {
        // N(-8) ≈ 6.22e-16
        let tail = norm_cdf(-8.0);
        assert!(tail > 0.0);
        assert_relative_eq!(tail, 6.220960574271819e-16, max_relative = 1e-14);
        assert_relative_eq!(norm_cdf(-3.0), 1.3498980316300957e-3, max_relative = 1e-14);
        assert_eq!(norm_cdf(40.0), 1.0);
        assert_eq!(norm_cdf(-40.0), 0.0);
    }
}

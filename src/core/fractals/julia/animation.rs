use crate::core::data::complex::Complex;

/// Rotates the Julia parameter about the origin by `dt` radians.
#[must_use]
pub fn animate_coeff(coeff: Complex, dt: f64) -> Complex {
    coeff * Complex::from_angle(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(actual: Complex, expected: Complex) {
        assert!(
            (actual - expected).magnitude() < 1e-12,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let coeff = Complex::new(-0.7, 0.27);

        assert_eq!(animate_coeff(coeff, 0.0), coeff);
    }

    #[test]
    fn test_quarter_turn() {
        assert_close(animate_coeff(Complex::ONE, FRAC_PI_2), Complex::new(0.0, 1.0));
    }

    #[test]
    fn test_half_turn_negates() {
        let coeff = Complex::new(0.3, -0.4);

        assert_close(animate_coeff(coeff, PI), Complex::new(-0.3, 0.4));
    }

    #[test]
    fn test_preserves_magnitude() {
        let coeff = Complex::new(-0.7, 0.27);
        let mut rotated = coeff;

        for _ in 0..1000 {
            rotated = animate_coeff(rotated, 0.016);
        }

        assert!((rotated.magnitude() - coeff.magnitude()).abs() < 1e-9);
    }

    #[test]
    fn test_steps_compose() {
        let coeff = Complex::new(0.1, 0.6);

        let stepped = animate_coeff(animate_coeff(coeff, 0.25), 0.5);

        assert_close(stepped, animate_coeff(coeff, 0.75));
    }
}

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::errors::FractalConfigError;
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::core::fractals::julia::shading::{
    JuliaShading, log_compress, sqrt_tanh_compress, tanh_compress,
};
use crate::core::fractals::mandelbrot::algorithm::ESCAPE_RADIUS_SQUARED;
use crate::core::fractals::mandelbrot::shading::escape_time_intensity;
use crate::core::viewport::viewport::Viewport;

/// Escape-time count for plane point `z` under z ← z² + coeff.
#[must_use]
pub fn julia_iteration(z: Complex, coeff: Complex, max_iterations: u32) -> u32 {
    let mut z = z;
    let mut iteration = 0;

    while iteration < max_iterations && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
        z = z * z + coeff;
        iteration += 1;
    }

    iteration
}

/// Exterior distance estimate |z|·ln|z| / |dz| for plane point `z`.
///
/// The orbit runs until `max_iterations` or until |z|² exceeds `bailout`.
/// Points still within radius 2 at the end are interior and return 0.
#[must_use]
pub fn julia_distance_estimate(z: Complex, coeff: Complex, max_iterations: u32, bailout: f64) -> f64 {
    let mut z = z;
    let mut dz = Complex::ONE;

    for _ in 0..max_iterations {
        if z.magnitude_squared() > bailout {
            break;
        }

        dz = (z * dz).scale(2.0);
        z = z * z + coeff;
    }

    if z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED {
        return 0.0;
    }

    let magnitude = z.magnitude();
    let distance = magnitude * magnitude.ln() / dz.magnitude();

    // zero derivative (orbit through the critical point) or derivative overflow
    if distance.is_finite() { distance } else { 0.0 }
}

/// Pass-one evaluator for Julia frames: yields the shaded, not yet normalised value.
#[derive(Debug)]
pub struct JuliaAlgorithm {
    viewport: Viewport,
    coeff: Complex,
    config: JuliaConfig,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Output = f32;

    fn compute(&self, pixel: Point) -> Self::Output {
        let z = self.viewport.pixel_to_plane(pixel.x, pixel.y);
        let max_iterations = self.config.max_iterations;
        let view_height = self.viewport.height();
        let scale = self.config.shading_scale;
        let distance = || julia_distance_estimate(z, self.coeff, max_iterations, self.config.bailout);

        match self.config.shading {
            JuliaShading::Tanh => tanh_compress(distance(), view_height, scale),
            JuliaShading::Sqrt => sqrt_tanh_compress(distance(), view_height, scale),
            JuliaShading::Log => log_compress(distance()),
            JuliaShading::EscapeTime => {
                let iterations = julia_iteration(z, self.coeff, max_iterations);
                escape_time_intensity(iterations, max_iterations)
            }
        }
    }
}

impl JuliaAlgorithm {
    pub fn new(viewport: Viewport, coeff: Complex, config: JuliaConfig) -> Result<Self, FractalConfigError> {
        config.validate()?;

        Ok(Self {
            viewport,
            coeff,
            config,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn coeff(&self) -> Complex {
        self.coeff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::screen_size::ScreenSize;

    const MAX: u32 = 1024;
    const BAILOUT: f64 = 1e12;

    #[test]
    fn test_julia_iteration_unit_disk_is_filled_set_for_zero_coeff() {
        let inside = [
            Complex::ZERO,
            Complex::new(0.5, 0.0),
            Complex::new(0.3, 0.4),
            Complex::new(1.0, 0.0),
            Complex::new(-1.0, 0.0),
            Complex::new(0.0, 1.0),
            Complex::new(0.0, -1.0),
        ];

        for z in inside {
            assert_eq!(julia_iteration(z, Complex::ZERO, MAX), MAX, "z = {:?}", z);
        }
    }

    #[test]
    fn test_julia_iteration_outside_unit_disk_escapes_for_zero_coeff() {
        let outside = [
            Complex::new(1.01, 0.0),
            Complex::new(0.8, 0.8),
            Complex::new(0.0, -1.5),
            Complex::new(-3.0, 0.0),
        ];

        for z in outside {
            assert!(julia_iteration(z, Complex::ZERO, MAX) < MAX, "z = {:?}", z);
        }
    }

    #[test]
    fn test_julia_iteration_large_coeff_escapes_immediately() {
        assert_eq!(julia_iteration(Complex::ZERO, Complex::new(5.0, 0.0), MAX), 1);
    }

    #[test]
    fn test_distance_estimate_interior_is_zero() {
        assert_eq!(julia_distance_estimate(Complex::ZERO, Complex::ZERO, MAX, BAILOUT), 0.0);
        assert_eq!(
            julia_distance_estimate(Complex::new(0.5, -0.5), Complex::ZERO, MAX, BAILOUT),
            0.0
        );
        assert_eq!(
            julia_distance_estimate(Complex::ZERO, Complex::new(-1.0, 0.0), MAX, BAILOUT),
            0.0
        );
    }

    #[test]
    fn test_distance_estimate_exterior_matches_closed_form() {
        // for coeff = 0 and real z = 3 the estimate reduces to 3 ln 3 at any depth
        let distance = julia_distance_estimate(Complex::new(3.0, 0.0), Complex::ZERO, MAX, BAILOUT);

        assert!((distance - 3.0 * 3.0_f64.ln()).abs() < 1e-9, "distance = {}", distance);
    }

    #[test]
    fn test_distance_estimate_grows_away_from_set() {
        let near = julia_distance_estimate(Complex::new(1.05, 0.0), Complex::ZERO, MAX, BAILOUT);
        let far = julia_distance_estimate(Complex::new(1.5, 0.0), Complex::ZERO, MAX, BAILOUT);

        assert!(near > 0.0);
        assert!(far > near);
    }

    #[test]
    fn test_distance_estimate_zero_derivative_is_finite() {
        // the orbit starts on the critical point so dz collapses to zero
        let distance = julia_distance_estimate(Complex::ZERO, Complex::new(3.0, 0.0), MAX, BAILOUT);

        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_compute_is_zero_for_interior_pixel() {
        let size = ScreenSize::new(4, 4).unwrap();
        let mut viewport = Viewport::new(size);
        viewport.set_view(Complex::ZERO, 0.1);
        let algorithm = JuliaAlgorithm::new(viewport, Complex::ZERO, JuliaConfig::default()).unwrap();

        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), 0.0);
    }

    #[test]
    fn test_compute_escape_time_uses_iteration_count() {
        let config = JuliaConfig {
            shading: JuliaShading::EscapeTime,
            ..JuliaConfig::default()
        };
        let mut viewport = Viewport::new(ScreenSize::new(4, 4).unwrap());
        viewport.set_view(Complex::ZERO, 0.1);
        let algorithm = JuliaAlgorithm::new(viewport, Complex::ZERO, config).unwrap();

        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), 1.0);
    }

    #[test]
    fn test_compute_applies_each_distance_shading() {
        let mut viewport = Viewport::new(ScreenSize::new(4, 4).unwrap());
        viewport.set_view(Complex::new(3.0, 0.0), 0.1);
        let pixel = Point { x: 2, y: 2 };
        let z = viewport.pixel_to_plane(pixel.x, pixel.y);
        let distance = julia_distance_estimate(z, Complex::ZERO, MAX, BAILOUT);

        let shaded = |shading| {
            let config = JuliaConfig {
                shading,
                ..JuliaConfig::default()
            };
            JuliaAlgorithm::new(viewport, Complex::ZERO, config)
                .unwrap()
                .compute(pixel)
        };

        assert_eq!(shaded(JuliaShading::Tanh), tanh_compress(distance, 0.1, 4.0));
        assert_eq!(shaded(JuliaShading::Sqrt), sqrt_tanh_compress(distance, 0.1, 4.0));
        assert_eq!(shaded(JuliaShading::Log), log_compress(distance));
        assert!(shaded(JuliaShading::Log) > 0.0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = JuliaConfig {
            max_iterations: 0,
            ..JuliaConfig::default()
        };

        let result = JuliaAlgorithm::new(Viewport::default(), Complex::ZERO, config);

        assert_eq!(result.unwrap_err(), FractalConfigError::ZeroMaxIterations);
    }
}

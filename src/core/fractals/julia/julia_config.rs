use crate::core::data::complex::Complex;
use crate::core::fractals::errors::FractalConfigError;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::shading::JuliaShading;
use crate::core::fractals::mandelbrot::algorithm::ESCAPE_RADIUS_SQUARED;
use crate::core::viewport::viewport::Viewport;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1024;
pub const DEFAULT_BAILOUT: f64 = 1e12;
pub const DEFAULT_SHADING_SCALE: f64 = 4.0;
pub const DEFAULT_COEFF: Complex = Complex {
    real: -0.7,
    imag: 0.27,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaConfig {
    pub max_iterations: u32,
    /// Squared-magnitude cut-off for the distance estimator orbit.
    pub bailout: f64,
    pub shading: JuliaShading,
    /// Sharpness of the height-relative shading transforms.
    pub shading_scale: f64,
}

impl Default for JuliaConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bailout: DEFAULT_BAILOUT,
            shading: JuliaShading::default(),
            shading_scale: DEFAULT_SHADING_SCALE,
        }
    }
}

impl JuliaConfig {
    pub fn validate(&self) -> Result<(), FractalConfigError> {
        if self.max_iterations == 0 {
            return Err(FractalConfigError::ZeroMaxIterations);
        }

        if !self.bailout.is_finite() || self.bailout <= ESCAPE_RADIUS_SQUARED {
            return Err(FractalConfigError::InvalidBailout {
                bailout: self.bailout,
            });
        }

        if !self.shading_scale.is_finite() || self.shading_scale <= 0.0 {
            return Err(FractalConfigError::InvalidShadingScale {
                scale: self.shading_scale,
            });
        }

        Ok(())
    }

    pub fn build_algorithm(&self, viewport: Viewport, coeff: Complex) -> Result<JuliaAlgorithm, FractalConfigError> {
        JuliaAlgorithm::new(viewport, coeff, *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(JuliaConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = JuliaConfig {
            max_iterations: 0,
            ..JuliaConfig::default()
        };

        assert_eq!(config.validate(), Err(FractalConfigError::ZeroMaxIterations));
    }

    #[test]
    fn test_bailout_must_exceed_escape_radius() {
        let config = JuliaConfig {
            bailout: 4.0,
            ..JuliaConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(FractalConfigError::InvalidBailout { bailout: 4.0 })
        );
    }

    #[test]
    fn test_infinite_bailout_rejected() {
        let config = JuliaConfig {
            bailout: f64::INFINITY,
            ..JuliaConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_shading_scale_must_be_positive() {
        let config = JuliaConfig {
            shading_scale: 0.0,
            ..JuliaConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(FractalConfigError::InvalidShadingScale { scale: 0.0 })
        );
    }

    #[test]
    fn test_build_algorithm_carries_coeff() {
        let coeff = Complex::new(0.285, 0.01);

        let algorithm = JuliaConfig::default()
            .build_algorithm(Viewport::default(), coeff)
            .unwrap();

        assert_eq!(algorithm.coeff(), coeff);
    }
}

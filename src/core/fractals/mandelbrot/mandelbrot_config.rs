use crate::core::fractals::errors::FractalConfigError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::viewport::viewport::Viewport;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl MandelbrotConfig {
    pub fn build_algorithm(&self, viewport: Viewport) -> Result<MandelbrotAlgorithm, FractalConfigError> {
        MandelbrotAlgorithm::new(viewport, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cap_is_1024() {
        assert_eq!(MandelbrotConfig::default().max_iterations, 1024);
    }

    #[test]
    fn test_build_algorithm_carries_settings() {
        let config = MandelbrotConfig { max_iterations: 64 };

        let algorithm = config.build_algorithm(Viewport::default()).unwrap();

        assert_eq!(algorithm.max_iterations(), 64);
        assert_eq!(algorithm.viewport(), &Viewport::default());
    }

    #[test]
    fn test_build_algorithm_rejects_zero_iterations() {
        let config = MandelbrotConfig { max_iterations: 0 };

        assert!(config.build_algorithm(Viewport::default()).is_err());
    }
}

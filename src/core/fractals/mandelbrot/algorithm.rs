use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::errors::FractalConfigError;
use crate::core::viewport::viewport::Viewport;

pub(crate) const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time count for `c`, iterating z ← z² + c from z = 0.
///
/// Returns `max_iterations` when the orbit never leaves radius 2.
#[must_use]
pub fn mandelbrot_iteration(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while iteration < max_iterations && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
        z = z * z + c;
        iteration += 1;
    }

    iteration
}

#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn compute(&self, pixel: Point) -> Self::Output {
        let c = self.viewport.pixel_to_plane(pixel.x, pixel.y);

        mandelbrot_iteration(c, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(viewport: Viewport, max_iterations: u32) -> Result<Self, FractalConfigError> {
        if max_iterations == 0 {
            return Err(FractalConfigError::ZeroMaxIterations);
        }

        Ok(Self {
            viewport,
            max_iterations,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

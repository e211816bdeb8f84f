use crate::core::data::complex::Complex;

/// Axis-aligned region of the complex plane, stored as its four edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexRect {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl ComplexRect {
    /// Region of the given extents centred on `centre`. Extents are expected to be positive.
    #[must_use]
    pub fn centred(centre: Complex, width: f64, height: f64) -> Self {
        let half_width = 0.5 * width;
        let half_height = 0.5 * height;

        Self {
            x_min: centre.real - half_width,
            x_max: centre.real + half_width,
            y_min: centre.imag - half_height,
            y_max: centre.imag + half_height,
        }
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn min_corner(&self) -> Complex {
        Complex::new(self.x_min, self.y_min)
    }

    #[must_use]
    pub fn max_corner(&self) -> Complex {
        Complex::new(self.x_max, self.y_max)
    }
}

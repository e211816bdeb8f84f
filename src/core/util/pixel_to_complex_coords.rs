use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::screen_size::ScreenSize;

// a * (1 - t) + b * t is exact at both t = 0 and t = 1
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Maps a (possibly fractional) pixel position to the plane. Row 0 maps to `y_min`.
///
/// The mapping is linear and unclamped: `(0, 0)` lands on the min corner and
/// `(width, height)` on the max corner.
#[must_use]
pub fn pixel_to_complex_coords(x: f64, y: f64, size: ScreenSize, region: ComplexRect) -> Complex {
    let tx = x / f64::from(size.width());
    let ty = y / f64::from(size.height());

    Complex {
        real: lerp(region.x_min(), region.x_max(), tx),
        imag: lerp(region.y_min(), region.y_max(), ty),
    }
}

/// Maps a window position (origin top-left, y pointing down) to the plane.
#[must_use]
pub fn window_to_complex_coords(x: f64, y: f64, size: ScreenSize, region: ComplexRect) -> Complex {
    let tx = x / f64::from(size.width());
    let ty = y / f64::from(size.height());

    Complex {
        real: lerp(region.x_min(), region.x_max(), tx),
        imag: lerp(region.y_max(), region.y_min(), ty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_region() -> ComplexRect {
        ComplexRect::centred(Complex::new(-0.5, 0.0), 3.0, 2.0)
    }

    fn create_size() -> ScreenSize {
        ScreenSize::new(600, 400).unwrap()
    }

    #[test]
    fn test_pixel_to_complex_min_corner() {
        let result = pixel_to_complex_coords(0.0, 0.0, create_size(), create_region());

        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, -1.0);
    }

    #[test]
    fn test_pixel_to_complex_max_corner() {
        let result = pixel_to_complex_coords(600.0, 400.0, create_size(), create_region());

        assert_eq!(result.real, 1.0);
        assert_eq!(result.imag, 1.0);
    }

    #[test]
    fn test_pixel_to_complex_centre() {
        let result = pixel_to_complex_coords(300.0, 200.0, create_size(), create_region());

        assert_eq!(result.real, -0.5);
        assert_eq!(result.imag, 0.0);
    }

    #[test]
    fn test_pixel_to_complex_is_unclamped() {
        let result = pixel_to_complex_coords(-600.0, 800.0, create_size(), create_region());

        assert_eq!(result.real, -5.0);
        assert_eq!(result.imag, 3.0);
    }

    #[test]
    fn test_window_to_complex_top_left_is_y_max() {
        let result = window_to_complex_coords(0.0, 0.0, create_size(), create_region());

        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, 1.0);
    }

    #[test]
    fn test_window_to_complex_bottom_right_is_y_min() {
        let result = window_to_complex_coords(600.0, 400.0, create_size(), create_region());

        assert_eq!(result.real, 1.0);
        assert_eq!(result.imag, -1.0);
    }
}

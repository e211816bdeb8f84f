use crate::core::data::colour::Colour;

/// Logarithmic grey level for an escape count: ln(1 + it) / ln(1 + max).
///
/// Keeps fast-escaping exterior points from collapsing to black. Interior
/// points (`iterations == max_iterations`) map to 1.
#[must_use]
pub fn escape_time_intensity(iterations: u32, max_iterations: u32) -> f32 {
    let numerator = f64::from(iterations).ln_1p();
    let denominator = f64::from(max_iterations).ln_1p();

    if denominator == 0.0 {
        return 0.0;
    }

    (numerator / denominator) as f32
}

#[must_use]
pub fn mandelbrot_colour(iterations: u32, max_iterations: u32) -> Colour {
    Colour::grey(escape_time_intensity(iterations, max_iterations))
}

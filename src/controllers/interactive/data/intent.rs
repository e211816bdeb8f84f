use crate::core::data::complex::Complex;
use crate::core::data::screen_size::ScreenSize;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::shading::JuliaShading;

/// User input, already translated out of window-system terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerIntent {
    /// Drag by a window-space delta in pixels.
    Pan { dx: f64, dy: f64 },
    /// Mouse wheel steps, positive zooms in.
    Zoom { wheel_delta: f64 },
    /// Replace the Julia parameter.
    SetParameter(Complex),
    /// Rotate the Julia parameter by `dt` seconds of animation.
    Animate { dt: f64 },
    Resize(ScreenSize),
    SelectFractal(FractalKinds),
    SetShading(JuliaShading),
    /// Iteration cap of the selected fractal.
    SetMaxIterations(u32),
    ResetView,
}

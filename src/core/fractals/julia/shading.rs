//! Compressive transforms applied to Julia distance estimates before frame
//! normalisation. All of them are monotonic and map 0 to 0.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JuliaShading {
    /// tanh of the distance measured in view heights.
    #[default]
    Tanh,
    /// Square root of the `Tanh` value, lifting thin filaments.
    Sqrt,
    /// ln(1 + distance), independent of zoom.
    Log,
    /// Logarithmic escape-time count instead of the distance estimate.
    EscapeTime,
}

impl JuliaShading {
    pub const ALL: &'static [Self] = &[Self::Tanh, Self::Sqrt, Self::Log, Self::EscapeTime];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Tanh => "Tanh distance",
            Self::Sqrt => "Sqrt tanh distance",
            Self::Log => "Log distance",
            Self::EscapeTime => "Escape time",
        }
    }
}

#[must_use]
pub fn tanh_compress(distance: f64, view_height: f64, scale: f64) -> f32 {
    (distance * scale / view_height).tanh() as f32
}

#[must_use]
pub fn sqrt_tanh_compress(distance: f64, view_height: f64, scale: f64) -> f32 {
    tanh_compress(distance, view_height, scale).sqrt()
}

#[must_use]
pub fn log_compress(distance: f64) -> f32 {
    distance.ln_1p() as f32
}

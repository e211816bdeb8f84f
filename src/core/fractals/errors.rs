use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalConfigError {
    ZeroMaxIterations,
    InvalidBailout { bailout: f64 },
    InvalidShadingScale { scale: f64 },
}

impl fmt::Display for FractalConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidBailout { bailout } => {
                write!(
                    f,
                    "Bailout {} must be finite and greater than the escape radius squared (4)",
                    bailout
                )
            }
            Self::InvalidShadingScale { scale } => {
                write!(f, "Shading scale {} must be finite and positive", scale)
            }
        }
    }
}

impl Error for FractalConfigError {}

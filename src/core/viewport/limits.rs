use std::error::Error;
use std::fmt;

pub const DEFAULT_MIN_HEIGHT: f64 = 1e-6;
pub const DEFAULT_MAX_HEIGHT: f64 = 6.0;
pub const DEFAULT_ZOOM_SENSITIVITY: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportLimitsError {
    InvalidMinHeight { min_height: f64 },
    InvalidMaxHeight { min_height: f64, max_height: f64 },
    InvalidZoomSensitivity { sensitivity: f64 },
}

impl fmt::Display for ViewportLimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMinHeight { min_height } => {
                write!(f, "Minimum view height {} must be finite and positive", min_height)
            }
            Self::InvalidMaxHeight {
                min_height,
                max_height,
            } => {
                write!(
                    f,
                    "Maximum view height {} must be finite and at least the minimum {}",
                    max_height, min_height
                )
            }
            Self::InvalidZoomSensitivity { sensitivity } => {
                write!(f, "Zoom sensitivity {} must be finite and positive", sensitivity)
            }
        }
    }
}

impl Error for ViewportLimitsError {}

/// Zoom bounds and wheel response of a [`Viewport`](super::viewport::Viewport).
///
/// Always holds `0 < min_height <= max_height` with finite values, so
/// [`ViewportLimits::clamp_height`] never sees an empty range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLimits {
    min_height: f64,
    max_height: f64,
    zoom_sensitivity: f64,
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
        }
    }
}

impl ViewportLimits {
    pub fn new(
        min_height: f64,
        max_height: f64,
        zoom_sensitivity: f64,
    ) -> Result<Self, ViewportLimitsError> {
        if !min_height.is_finite() || min_height <= 0.0 {
            return Err(ViewportLimitsError::InvalidMinHeight { min_height });
        }

        if !max_height.is_finite() || max_height < min_height {
            return Err(ViewportLimitsError::InvalidMaxHeight {
                min_height,
                max_height,
            });
        }

        if !zoom_sensitivity.is_finite() || zoom_sensitivity <= 0.0 {
            return Err(ViewportLimitsError::InvalidZoomSensitivity {
                sensitivity: zoom_sensitivity,
            });
        }

        Ok(Self {
            min_height,
            max_height,
            zoom_sensitivity,
        })
    }

    #[must_use]
    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    #[must_use]
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    #[must_use]
    pub fn zoom_sensitivity(&self) -> f64 {
        self.zoom_sensitivity
    }

    #[must_use]
    pub fn clamp_height(&self, height: f64) -> f64 {
        height.clamp(self.min_height, self.max_height)
    }
}

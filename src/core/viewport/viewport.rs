use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::screen_size::ScreenSize;
use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, window_to_complex_coords,
};
use crate::core::viewport::limits::ViewportLimits;

pub const DEFAULT_ORIGIN: Complex = Complex {
    real: -0.5,
    imag: 0.0,
};
pub const DEFAULT_HEIGHT: f64 = 2.0;

/// Pan and zoom state mapping screen pixels onto the complex plane.
///
/// `height` is the vertical extent of the visible region; the horizontal
/// extent follows from the screen aspect ratio. Bounds are cached and kept in
/// step with every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    origin: Complex,
    height: f64,
    size: ScreenSize,
    limits: ViewportLimits,
    bounds: ComplexRect,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ScreenSize::default())
    }
}

impl Viewport {
    #[must_use]
    pub fn new(size: ScreenSize) -> Self {
        Self::with_limits(size, ViewportLimits::default())
    }

    #[must_use]
    pub fn with_limits(size: ScreenSize, limits: ViewportLimits) -> Self {
        let height = limits.clamp_height(DEFAULT_HEIGHT);

        Self {
            origin: DEFAULT_ORIGIN,
            height,
            size,
            limits,
            bounds: compute_bounds(DEFAULT_ORIGIN, height, size),
        }
    }

    /// Moves the view to `origin` with the given vertical extent (clamped).
    pub fn set_view(&mut self, origin: Complex, height: f64) {
        self.origin = origin;
        self.height = self.limits.clamp_height(height);
        self.recompute_bounds();
    }

    #[must_use]
    pub fn origin(&self) -> Complex {
        self.origin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Horizontal extent of the visible region.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.aspect_ratio() * self.height
    }

    #[must_use]
    pub fn screen_size(&self) -> ScreenSize {
        self.size
    }

    #[must_use]
    pub fn bounds(&self) -> ComplexRect {
        self.bounds
    }

    #[must_use]
    pub fn limits(&self) -> ViewportLimits {
        self.limits
    }

    pub fn recompute_bounds(&mut self) {
        self.bounds = compute_bounds(self.origin, self.height, self.size);
    }

    #[must_use]
    pub fn pixel_to_plane(&self, x: u32, y: u32) -> Complex {
        pixel_to_complex_coords(f64::from(x), f64::from(y), self.size, self.bounds)
    }

    /// Plane position under a window cursor (origin top-left, y down).
    #[must_use]
    pub fn window_to_plane(&self, x: f64, y: f64) -> Complex {
        window_to_complex_coords(x, y, self.size, self.bounds)
    }

    /// Drags the view by a screen-space delta in window coordinates.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.origin.real -= dx / f64::from(self.size.width()) * self.width();
        self.origin.imag += dy / f64::from(self.size.height()) * self.height;
        self.recompute_bounds();
    }

    /// Positive deltas zoom in.
    pub fn zoom(&mut self, wheel_delta: f64) {
        let scaled = self.height * (-wheel_delta * self.limits.zoom_sensitivity()).exp();
        self.height = self.limits.clamp_height(scaled);
        self.recompute_bounds();
    }

    /// Returns `true` when the screen size changed and the pixel buffer must be
    /// reallocated and redrawn.
    pub fn resize(&mut self, size: ScreenSize) -> bool {
        if size == self.size {
            return false;
        }

        self.size = size;
        self.recompute_bounds();
        true
    }

    pub fn reset(&mut self) {
        self.set_view(DEFAULT_ORIGIN, DEFAULT_HEIGHT);
    }
}

fn compute_bounds(origin: Complex, height: f64, size: ScreenSize) -> ComplexRect {
    ComplexRect::centred(origin, size.aspect_ratio() * height, height)
}

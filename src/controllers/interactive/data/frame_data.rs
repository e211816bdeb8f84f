use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// A finished frame, owned by whoever receives it.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub kind: FractalKinds,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

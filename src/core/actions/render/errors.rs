use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::fractals::errors::FractalConfigError;
use rayon::ThreadPoolBuildError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RendererBuildError {
    ZeroThreads,
    ThreadPool(ThreadPoolBuildError),
}

impl fmt::Display for RendererBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroThreads => write!(f, "render thread count must be greater than zero"),
            Self::ThreadPool(err) => write!(f, "failed to build render thread pool: {}", err),
        }
    }
}

impl Error for RendererBuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroThreads => None,
            Self::ThreadPool(err) => Some(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FractalRenderError {
    Config(FractalConfigError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for FractalRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid fractal settings: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for FractalRenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<FractalConfigError> for FractalRenderError {
    fn from(err: FractalConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<PixelBufferError> for FractalRenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, ValueEnum};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::controllers::interactive::data::intent::ViewerIntent;
use crate::controllers::interactive::state::ViewerState;
use crate::core::actions::render::renderer::RendererConfig;
use crate::core::data::complex::Complex;
use crate::core::data::screen_size::{
    DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, ScreenSize, ScreenSizeError,
};
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::julia_config::DEFAULT_COEFF;
use crate::core::fractals::julia::shading::JuliaShading;
use crate::core::viewport::viewport::{DEFAULT_HEIGHT, DEFAULT_ORIGIN, Viewport};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum FractalArg {
    Mandelbrot,
    #[default]
    Julia,
}

impl From<FractalArg> for FractalKinds {
    fn from(arg: FractalArg) -> Self {
        match arg {
            FractalArg::Mandelbrot => Self::Mandelbrot,
            FractalArg::Julia => Self::Julia,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum ShadingArg {
    #[default]
    Tanh,
    Sqrt,
    Log,
    #[value(alias = "iterations")]
    EscapeTime,
}

impl From<ShadingArg> for JuliaShading {
    fn from(arg: ShadingArg) -> Self {
        match arg {
            ShadingArg::Tanh => Self::Tanh,
            ShadingArg::Sqrt => Self::Sqrt,
            ShadingArg::Log => Self::Log,
            ShadingArg::EscapeTime => Self::EscapeTime,
        }
    }
}

/// View settings shared by the headless renderer and the window.
#[derive(Debug, Clone, Args)]
pub struct ViewerArgs {
    /// Fractal to show
    #[arg(long, value_enum, default_value_t)]
    pub fractal: FractalArg,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_SCREEN_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_SCREEN_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Real part of the view centre
    #[arg(long, default_value_t = DEFAULT_ORIGIN.real)]
    pub origin_re: f64,

    /// Imaginary part of the view centre
    #[arg(long, default_value_t = DEFAULT_ORIGIN.imag)]
    pub origin_im: f64,

    /// Vertical extent of the view in the plane (smaller is deeper)
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub view_height: f64,

    /// Real part of the Julia parameter
    #[arg(long, default_value_t = DEFAULT_COEFF.real)]
    pub coeff_re: f64,

    /// Imaginary part of the Julia parameter
    #[arg(long, default_value_t = DEFAULT_COEFF.imag)]
    pub coeff_im: f64,

    /// Iteration cap for the selected fractal
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_iterations: Option<u32>,

    /// Julia shading policy
    #[arg(long, value_enum, default_value_t)]
    pub shading: ShadingArg,

    /// Render threads (defaults to one per core)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerArgsError {
    InvalidScreenSize(ScreenSizeError),
    NonFinite { arg: &'static str, value: f64 },
}

impl fmt::Display for ViewerArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScreenSize(err) => write!(f, "invalid image size: {}", err),
            Self::NonFinite { arg, value } => {
                write!(f, "{} must be a finite number, got {}", arg, value)
            }
        }
    }
}

impl Error for ViewerArgsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidScreenSize(err) => Some(err),
            Self::NonFinite { .. } => None,
        }
    }
}

impl From<ScreenSizeError> for ViewerArgsError {
    fn from(err: ScreenSizeError) -> Self {
        Self::InvalidScreenSize(err)
    }
}

impl ViewerArgs {
    pub fn screen_size(&self) -> Result<ScreenSize, ScreenSizeError> {
        ScreenSize::new(self.width, self.height)
    }

    pub fn viewer_state(&self) -> Result<ViewerState, ViewerArgsError> {
        for (arg, value) in [
            ("--origin-re", self.origin_re),
            ("--origin-im", self.origin_im),
            ("--view-height", self.view_height),
            ("--coeff-re", self.coeff_re),
            ("--coeff-im", self.coeff_im),
        ] {
            if !value.is_finite() {
                return Err(ViewerArgsError::NonFinite { arg, value });
            }
        }

        let mut viewport = Viewport::new(self.screen_size()?);
        viewport.set_view(Complex::new(self.origin_re, self.origin_im), self.view_height);

        let mut state = ViewerState::new(viewport);
        state.apply(ViewerIntent::SelectFractal(self.fractal.into()));
        state.apply(ViewerIntent::SetParameter(Complex::new(self.coeff_re, self.coeff_im)));
        state.apply(ViewerIntent::SetShading(self.shading.into()));

        if let Some(max_iterations) = self.max_iterations {
            state.apply(ViewerIntent::SetMaxIterations(max_iterations));
        }

        Ok(state)
    }

    #[must_use]
    pub fn renderer_config(&self) -> RendererConfig {
        RendererConfig {
            threads: self.threads,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fractal_viewer",
    about = "Render a Mandelbrot or Julia set to a PPM image",
    version,
    allow_negative_numbers = true
)]
pub struct RenderArgs {
    #[command(flatten)]
    pub viewer: ViewerArgs,

    /// Output file
    #[arg(short, long, value_name = "FILE", default_value = "output/fractal.ppm")]
    pub output: PathBuf,
}

#[derive(Debug, Parser)]
#[command(
    name = "gui",
    about = "Explore Mandelbrot and Julia sets interactively",
    version,
    allow_negative_numbers = true
)]
pub struct GuiArgs {
    #[command(flatten)]
    pub viewer: ViewerArgs,
}

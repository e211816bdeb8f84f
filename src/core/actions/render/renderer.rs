use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::render::errors::{FractalRenderError, RendererBuildError};
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::fractals::mandelbrot::shading::mandelbrot_colour;
use crate::core::viewport::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RendererConfig {
    /// Worker count for the render pool. `None` lets rayon pick one per core.
    pub threads: Option<usize>,
}

/// Turns a viewport snapshot into a finished frame on a dedicated rayon pool.
///
/// The pool is built once and reused for every frame.
pub struct FractalRenderer {
    pool: ThreadPool,
}

impl FractalRenderer {
    pub fn new(config: RendererConfig) -> Result<Self, RendererBuildError> {
        let mut builder =
            ThreadPoolBuilder::new().thread_name(|index| format!("fractal-render-{}", index));

        // rayon treats zero as the per-core default
        match config.threads {
            Some(0) => return Err(RendererBuildError::ZeroThreads),
            Some(threads) => builder = builder.num_threads(threads),
            None => {}
        }

        let pool = builder.build().map_err(RendererBuildError::ThreadPool)?;
        info!("render pool ready with {} threads", pool.current_num_threads());

        Ok(Self { pool })
    }

    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn render_mandelbrot(
        &self,
        viewport: &Viewport,
        config: &MandelbrotConfig,
    ) -> Result<PixelBuffer, FractalRenderError> {
        let algorithm = config.build_algorithm(*viewport)?;
        let max_iterations = algorithm.max_iterations();
        let size = viewport.screen_size();
        let start = Instant::now();

        let colours: Vec<Colour> = self.pool.install(|| {
            generate_fractal_parallel_rayon(size, &algorithm)
                .into_par_iter()
                .map(|iterations| mandelbrot_colour(iterations, max_iterations))
                .collect()
        });

        debug!(
            "mandelbrot {}x{} rendered in {:?}",
            size.width(),
            size.height(),
            start.elapsed()
        );

        Ok(PixelBuffer::from_data(size, colours)?)
    }

    /// Two-pass Julia render. Pass one shades every pixel and reduces the
    /// per-row maxima; pass two normalises by the frame maximum and inverts.
    pub fn render_julia(
        &self,
        viewport: &Viewport,
        coeff: Complex,
        config: &JuliaConfig,
    ) -> Result<PixelBuffer, FractalRenderError> {
        let algorithm = config.build_algorithm(*viewport, coeff)?;
        let size = viewport.screen_size();
        let width = size.width() as usize;
        let start = Instant::now();

        let colours: Vec<Colour> = self.pool.install(|| {
            let shaded = generate_fractal_parallel_rayon(size, &algorithm);

            let frame_max = shaded
                .par_chunks(width)
                .map(|row| row.iter().copied().fold(0.0_f32, f32::max))
                .reduce(|| 0.0_f32, f32::max);

            shaded
                .par_iter()
                .map(|&value| Colour::grey(1.0 - normalise(value, frame_max)))
                .collect()
        });

        debug!(
            "julia {}x{} c={:?} rendered in {:?}",
            size.width(),
            size.height(),
            coeff,
            start.elapsed()
        );

        Ok(PixelBuffer::from_data(size, colours)?)
    }
}

fn normalise(value: f32, frame_max: f32) -> f32 {
    if frame_max > 0.0 { value / frame_max } else { 0.0 }
}

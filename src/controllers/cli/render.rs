use std::path::Path;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::errors::FractalRenderError;
use crate::core::actions::render::renderer::FractalRenderer;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Renders a single frame synchronously and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    renderer: FractalRenderer,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, renderer: FractalRenderer) -> Self {
        Self {
            presenter,
            renderer,
            buffer: None,
        }
    }

    pub fn generate(&mut self, request: &RenderRequest) -> Result<Duration, FractalRenderError> {
        let size = request.viewport().screen_size();
        info!(
            "rendering {} at {}x{}",
            request.kind().display_name(),
            size.width(),
            size.height()
        );

        let start = Instant::now();
        let buffer = request.render(&self.renderer)?;
        let duration = start.elapsed();

        info!("rendered in {:?}", duration);
        self.buffer = Some(buffer);

        Ok(duration)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: &Path) -> std::io::Result<()> {
        match &self.buffer {
            Some(buffer) => {
                self.presenter.present(buffer, filepath)?;
                info!("saved to {}", filepath.display());
            }
            None => warn!("nothing rendered yet, skipping write to {}", filepath.display()),
        }

        Ok(())
    }
}

use crate::core::actions::render::errors::FractalRenderError;
use crate::core::actions::render::renderer::FractalRenderer;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::viewport::viewport::Viewport;

/// Immutable snapshot of everything one frame depends on.
///
/// `PartialEq` lets callers skip submitting a frame identical to the last one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderRequest {
    Mandelbrot {
        viewport: Viewport,
        config: MandelbrotConfig,
    },
    Julia {
        viewport: Viewport,
        coeff: Complex,
        config: JuliaConfig,
    },
}

impl RenderRequest {
    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot { .. } => FractalKinds::Mandelbrot,
            Self::Julia { .. } => FractalKinds::Julia,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        match self {
            Self::Mandelbrot { viewport, .. } | Self::Julia { viewport, .. } => viewport,
        }
    }

    pub fn render(&self, renderer: &FractalRenderer) -> Result<PixelBuffer, FractalRenderError> {
        match self {
            Self::Mandelbrot { viewport, config } => renderer.render_mandelbrot(viewport, config),
            Self::Julia {
                viewport,
                coeff,
                config,
            } => renderer.render_julia(viewport, *coeff, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render::renderer::RendererConfig;
    use crate::core::data::screen_size::ScreenSize;

    fn small_viewport() -> Viewport {
        Viewport::new(ScreenSize::new(12, 8).unwrap())
    }

    #[test]
    fn test_kind_matches_variant() {
        let mandelbrot = RenderRequest::Mandelbrot {
            viewport: small_viewport(),
            config: MandelbrotConfig::default(),
        };
        let julia = RenderRequest::Julia {
            viewport: small_viewport(),
            coeff: Complex::ZERO,
            config: JuliaConfig::default(),
        };

        assert_eq!(mandelbrot.kind(), FractalKinds::Mandelbrot);
        assert_eq!(julia.kind(), FractalKinds::Julia);
    }

    #[test]
    fn test_render_dispatches_to_renderer() {
        let renderer = FractalRenderer::new(RendererConfig { threads: Some(1) }).unwrap();
        let request = RenderRequest::Mandelbrot {
            viewport: small_viewport(),
            config: MandelbrotConfig::default(),
        };

        let from_request = request.render(&renderer).unwrap();
        let direct = renderer
            .render_mandelbrot(&small_viewport(), &MandelbrotConfig::default())
            .unwrap();

        assert_eq!(from_request, direct);
    }

    #[test]
    fn test_requests_differing_only_in_coeff_are_not_equal() {
        let a = RenderRequest::Julia {
            viewport: small_viewport(),
            coeff: Complex::new(0.1, 0.2),
            config: JuliaConfig::default(),
        };
        let b = RenderRequest::Julia {
            viewport: small_viewport(),
            coeff: Complex::new(0.1, 0.3),
            config: JuliaConfig::default(),
        };

        assert_ne!(a, b);
    }
}

use log::debug;

use crate::controllers::interactive::data::intent::ViewerIntent;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::animation::animate_coeff;
use crate::core::fractals::julia::julia_config::{DEFAULT_COEFF, JuliaConfig};
use crate::core::fractals::julia::shading::JuliaShading;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::viewport::viewport::Viewport;

/// Everything the viewer shows, mutated only through [`ViewerIntent`]s.
///
/// Intents mark the state dirty; [`ViewerState::take_render_request`] folds
/// however many arrived since the last tick into at most one request.
#[derive(Debug, Clone)]
pub struct ViewerState {
    viewport: Viewport,
    coeff: Complex,
    selected_fractal: FractalKinds,
    mandelbrot: MandelbrotConfig,
    julia: JuliaConfig,
    dirty: bool,
    last_request: Option<RenderRequest>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ViewerState {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            coeff: DEFAULT_COEFF,
            selected_fractal: FractalKinds::default(),
            mandelbrot: MandelbrotConfig::default(),
            julia: JuliaConfig::default(),
            dirty: true,
            last_request: None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn coeff(&self) -> Complex {
        self.coeff
    }

    #[must_use]
    pub fn selected_fractal(&self) -> FractalKinds {
        self.selected_fractal
    }

    #[must_use]
    pub fn shading(&self) -> JuliaShading {
        self.julia.shading
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        match self.selected_fractal {
            FractalKinds::Mandelbrot => self.mandelbrot.max_iterations,
            FractalKinds::Julia => self.julia.max_iterations,
        }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn apply(&mut self, intent: ViewerIntent) {
        match intent {
            ViewerIntent::Pan { dx, dy } => {
                if dx == 0.0 && dy == 0.0 {
                    return;
                }
                self.viewport.pan(dx, dy);
            }
            ViewerIntent::Zoom { wheel_delta } => self.viewport.zoom(wheel_delta),
            ViewerIntent::SetParameter(coeff) => self.coeff = coeff,
            ViewerIntent::Animate { dt } => self.coeff = animate_coeff(self.coeff, dt),
            ViewerIntent::Resize(size) => {
                if !self.viewport.resize(size) {
                    return;
                }
                debug!("viewport resized to {}x{}", size.width(), size.height());
            }
            ViewerIntent::SelectFractal(kind) => self.selected_fractal = kind,
            ViewerIntent::SetShading(shading) => self.julia.shading = shading,
            ViewerIntent::SetMaxIterations(max_iterations) => match self.selected_fractal {
                FractalKinds::Mandelbrot => self.mandelbrot.max_iterations = max_iterations,
                FractalKinds::Julia => self.julia.max_iterations = max_iterations,
            },
            ViewerIntent::ResetView => self.viewport.reset(),
        }

        self.dirty = true;
    }

    /// Snapshot of the current state, whether or not it changed.
    #[must_use]
    pub fn current_request(&self) -> RenderRequest {
        match self.selected_fractal {
            FractalKinds::Mandelbrot => RenderRequest::Mandelbrot {
                viewport: self.viewport,
                config: self.mandelbrot,
            },
            FractalKinds::Julia => RenderRequest::Julia {
                viewport: self.viewport,
                coeff: self.coeff,
                config: self.julia,
            },
        }
    }

    /// Clears the dirty flag and returns a request if the frame would differ
    /// from the last one handed out.
    pub fn take_render_request(&mut self) -> Option<RenderRequest> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;

        let request = self.current_request();

        if self.last_request == Some(request) {
            return None;
        }

        self.last_request = Some(request);
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::screen_size::ScreenSize;

    fn drained_state() -> ViewerState {
        let mut state = ViewerState::default();
        let _ = state.take_render_request();
        state
    }

    #[test]
    fn test_new_state_is_dirty_and_yields_request() {
        let mut state = ViewerState::default();

        assert!(state.is_dirty());
        assert!(state.take_render_request().is_some());
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_no_intents_no_request() {
        let mut state = drained_state();

        assert_eq!(state.take_render_request(), None);
    }

    #[test]
    fn test_intents_within_one_tick_coalesce() {
        let mut state = drained_state();

        state.apply(ViewerIntent::Pan { dx: 10.0, dy: 0.0 });
        state.apply(ViewerIntent::Zoom { wheel_delta: 1.0 });
        state.apply(ViewerIntent::Animate { dt: 0.1 });

        let request = state.take_render_request();

        assert!(request.is_some());
        assert_eq!(state.take_render_request(), None);
        assert_eq!(request.unwrap(), state.current_request());
    }

    #[test]
    fn test_unchanged_result_is_not_requested_again() {
        let mut state = drained_state();

        state.apply(ViewerIntent::SelectFractal(FractalKinds::Julia));

        assert!(state.is_dirty());
        assert_eq!(state.take_render_request(), None);
    }

    #[test]
    fn test_zero_pan_does_not_dirty() {
        let mut state = drained_state();

        state.apply(ViewerIntent::Pan { dx: 0.0, dy: 0.0 });

        assert!(!state.is_dirty());
    }

    #[test]
    fn test_same_size_resize_does_not_dirty() {
        let mut state = drained_state();

        state.apply(ViewerIntent::Resize(ScreenSize::default()));

        assert!(!state.is_dirty());
    }

    #[test]
    fn test_resize_yields_request_with_new_size() {
        let mut state = drained_state();
        let size = ScreenSize::new(300, 200).unwrap();

        state.apply(ViewerIntent::Resize(size));
        let request = state.take_render_request().unwrap();

        assert_eq!(request.viewport().screen_size(), size);
    }

    #[test]
    fn test_set_parameter_replaces_coeff() {
        let mut state = drained_state();
        let coeff = Complex::new(0.285, 0.01);

        state.apply(ViewerIntent::SetParameter(coeff));

        assert_eq!(state.coeff(), coeff);
        assert!(matches!(
            state.take_render_request(),
            Some(RenderRequest::Julia { coeff: c, .. }) if c == coeff
        ));
    }

    #[test]
    fn test_animate_rotates_coeff() {
        let mut state = drained_state();
        let before = state.coeff();

        state.apply(ViewerIntent::Animate { dt: 0.5 });

        assert_eq!(state.coeff(), animate_coeff(before, 0.5));
    }

    #[test]
    fn test_select_fractal_switches_request_variant() {
        let mut state = drained_state();

        state.apply(ViewerIntent::SelectFractal(FractalKinds::Mandelbrot));

        assert_eq!(
            state.take_render_request().map(|r| r.kind()),
            Some(FractalKinds::Mandelbrot)
        );
    }

    #[test]
    fn test_max_iterations_targets_selected_fractal() {
        let mut state = drained_state();

        state.apply(ViewerIntent::SetMaxIterations(111));
        state.apply(ViewerIntent::SelectFractal(FractalKinds::Mandelbrot));
        state.apply(ViewerIntent::SetMaxIterations(222));

        assert_eq!(state.max_iterations(), 222);
        state.apply(ViewerIntent::SelectFractal(FractalKinds::Julia));
        assert_eq!(state.max_iterations(), 111);
    }

    #[test]
    fn test_set_shading() {
        let mut state = drained_state();

        state.apply(ViewerIntent::SetShading(JuliaShading::Log));

        assert_eq!(state.shading(), JuliaShading::Log);
        assert!(state.take_render_request().is_some());
    }

    #[test]
    fn test_reset_view_restores_viewport() {
        let mut state = drained_state();

        state.apply(ViewerIntent::Pan { dx: 50.0, dy: 25.0 });
        state.apply(ViewerIntent::Zoom { wheel_delta: 12.0 });
        state.apply(ViewerIntent::ResetView);

        assert_eq!(state.viewport(), &Viewport::default());
    }
}

use log::info;
use std::error::Error;
use std::marker::PhantomData;
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::{InteractiveController, ViewerIntent, ViewerState};
use crate::core::actions::render::renderer::{FractalRenderer, RendererConfig};
use crate::core::data::screen_size::ScreenSize;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    state: ViewerState,
    renderer_config: RendererConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, state: ViewerState, renderer_config: RendererConfig) -> Self {
        Self {
            presenter_factory,
            state,
            renderer_config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let requested = self.state.viewport().screen_size();

        // pixels needs a 'static surface owner
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Fractal Viewer")
                .with_inner_size(PhysicalSize::new(requested.width(), requested.height()))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy)?;
        let renderer = FractalRenderer::new(self.renderer_config)?;
        let controller = InteractiveController::new(presenter.share_adapter(), renderer);

        let mut state = self.state;
        let actual = window.inner_size();
        if let Ok(size) = ScreenSize::new(actual.width, actual.height) {
            state.apply(ViewerIntent::Resize(size));
        }

        info!("window opened at {}x{}", actual.width, actual.height);

        let app = GuiApp::new(window, &event_loop, presenter, controller, state);
        app.run(event_loop)?;

        Ok(())
    }
}

pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::controllers::cli::render::CliRenderController;
pub use crate::controllers::interactive::{
    InteractiveController, RenderRequest, ViewerIntent, ViewerState,
};
pub use crate::core::actions::render::renderer::{FractalRenderer, RendererConfig};
pub use crate::core::viewport::viewport::Viewport;
pub use crate::input::cli::args::{GuiArgs, RenderArgs, ViewerArgs};
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;

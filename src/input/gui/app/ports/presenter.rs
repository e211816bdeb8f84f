use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;

/// Draws fractal frames and the egui overlay into the window.
pub trait GuiPresenterPort {
    /// Port handed to the controller so the worker can deliver frames.
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    /// Takes any delivered event. Returns true if a new frame was copied in.
    fn poll(&mut self) -> bool;

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;

    fn last_presented_generation(&self) -> u64;
    fn last_render_duration(&self) -> Option<Duration>;
    fn last_error_message(&self) -> Option<&str>;
}

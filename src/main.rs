use clap::Parser;

use fractal_viewer::{CliRenderController, FractalRenderer, PpmFilePresenter, RenderArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = RenderArgs::parse();
    let state = args.viewer.viewer_state()?;
    let renderer = FractalRenderer::new(args.viewer.renderer_config())?;

    let mut controller = CliRenderController::new(PpmFilePresenter::new(), renderer);

    controller.generate(&state.current_request())?;
    controller.write(&args.output)?;

    Ok(())
}

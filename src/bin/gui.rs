use clap::Parser;

use fractal_viewer::{GuiArgs, PixelsPresenterFactory, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = GuiArgs::parse();
    let state = args.viewer.viewer_state()?;

    let command = RunGuiCommand::new(
        PixelsPresenterFactory::new(),
        state,
        args.viewer.renderer_config(),
    );

    command.execute()
}

use std::process::ExitCode;

use mandelbrot_viewer::{RunGuiCommand, ViewerConfig, WgpuPresenterFactory};

fn main() -> ExitCode {
    mandelbrot_viewer::init_logging();

    let command = RunGuiCommand::new(WgpuPresenterFactory::new(), ViewerConfig::default());

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "viewer stopped");
            ExitCode::FAILURE
        }
    }
}

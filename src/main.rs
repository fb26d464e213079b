use std::process::ExitCode;

use mandelbrot_viewer::{PpmFilePresenter, SnapshotConfig, SnapshotController, SnapshotError};

fn run(config: &SnapshotConfig) -> Result<(), SnapshotError> {
    let mut controller = SnapshotController::new(PpmFilePresenter::new());

    controller.generate(config)?;
    controller.write(&config.output)?;

    Ok(())
}

fn main() -> ExitCode {
    mandelbrot_viewer::init_logging();

    match run(&SnapshotConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "snapshot failed");
            ExitCode::FAILURE
        }
    }
}

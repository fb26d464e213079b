use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::config::SnapshotConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_view::render_view_rayon;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::errors::SnapshotError;

/// Renders a view on the CPU and hands the image to a file presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self, config: &SnapshotConfig) -> Result<(), SnapshotError> {
        info!(
            width = config.dimensions.width,
            height = config.dimensions.height,
            iterations = config.view.iterations(),
            zoom = config.view.zoom(),
            "rendering snapshot"
        );

        let start = Instant::now();
        let buffer = render_view_rayon(&config.view, config.dimensions)?;
        info!(duration = ?start.elapsed(), "snapshot rendered");

        self.buffer = Some(buffer);
        Ok(())
    }

    /// Writes the last generated image. Does nothing if nothing was generated.
    pub fn write(&self, filepath: &Path) -> Result<(), SnapshotError> {
        let Some(buffer) = &self.buffer else {
            return Ok(());
        };

        self.presenter
            .present(buffer, filepath)
            .map_err(|source| SnapshotError::Write {
                path: filepath.to_path_buf(),
                source,
            })?;

        info!(path = %filepath.display(), "snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use super::*;
    use crate::core::data::window_dimensions::WindowDimensions;
    use crate::core::view::view_state::ViewState;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, usize)>>,
        fail: bool,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            if self.fail {
                return Err(std::io::Error::other("disk full"));
            }
            self.written
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.buffer().len()));
            Ok(())
        }
    }

    fn small_config() -> SnapshotConfig {
        SnapshotConfig::default()
            .with_dimensions(WindowDimensions::new(8, 6))
            .with_view(ViewState::new(0.5, 0.0, 2.0, 20))
    }

    #[test]
    fn generate_then_write_hands_buffer_to_presenter() {
        let mut controller = SnapshotController::new(RecordingPresenter::default());

        controller.generate(&small_config()).unwrap();
        controller.write(Path::new("out.ppm")).unwrap();

        assert_eq!(
            *controller.presenter.written.borrow(),
            [(PathBuf::from("out.ppm"), 8 * 6 * 3)]
        );
    }

    #[test]
    fn write_without_generate_is_a_no_op() {
        let controller = SnapshotController::new(RecordingPresenter::default());

        controller.write(Path::new("out.ppm")).unwrap();

        assert!(controller.presenter.written.borrow().is_empty());
    }

    #[test]
    fn presenter_failure_reports_path() {
        let mut controller = SnapshotController::new(RecordingPresenter {
            fail: true,
            ..RecordingPresenter::default()
        });

        controller.generate(&small_config()).unwrap();
        let result = controller.write(Path::new("x/out.ppm"));

        assert!(matches!(result, Err(SnapshotError::Write { path, .. }) if path == Path::new("x/out.ppm")));
    }

    #[test]
    fn empty_dimensions_fail_to_generate() {
        let mut controller = SnapshotController::new(RecordingPresenter::default());
        let config = small_config().with_dimensions(WindowDimensions::new(0, 0));

        assert!(matches!(controller.generate(&config), Err(SnapshotError::Render(_))));
        assert!(controller.buffer().is_none());
    }
}

use std::path::{Path, PathBuf};

use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::view::view_state::ViewState;

pub const DEFAULT_TITLE: &str = "Mandelbrot";
pub const DEFAULT_SNAPSHOT_PATH: &str = "output/mandelbrot.ppm";

/// Settings of the interactive viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub dimensions: WindowDimensions,
    /// Append the iteration count and frame rate to the window title.
    pub show_diagnostics_in_title: bool,
    /// Show the egui diagnostics window at startup; F1 toggles it.
    pub show_overlay: bool,
    /// Use `f64` shader arithmetic when the adapter supports it.
    pub prefer_double_precision: bool,
    /// Read the shader pair from this directory instead of the embedded copies.
    pub shader_dir: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            dimensions: WindowDimensions::default(),
            show_diagnostics_in_title: true,
            show_overlay: false,
            prefer_double_precision: true,
            shader_dir: None,
        }
    }
}

impl ViewerConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: WindowDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    #[must_use]
    pub fn with_diagnostics_in_title(mut self, show: bool) -> Self {
        self.show_diagnostics_in_title = show;
        self
    }

    #[must_use]
    pub fn with_overlay(mut self, show: bool) -> Self {
        self.show_overlay = show;
        self
    }

    #[must_use]
    pub fn with_double_precision(mut self, prefer: bool) -> Self {
        self.prefer_double_precision = prefer;
        self
    }

    #[must_use]
    pub fn with_shader_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.shader_dir = Some(dir.into());
        self
    }
}

/// Settings of the headless snapshot renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotConfig {
    pub dimensions: WindowDimensions,
    pub view: ViewState,
    pub output: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            dimensions: WindowDimensions::default(),
            view: ViewState::default(),
            output: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
        }
    }
}

impl SnapshotConfig {
    #[must_use]
    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = output.as_ref().to_path_buf();
        self
    }

    #[must_use]
    pub fn with_view(mut self, view: ViewState) -> Self {
        self.view = view;
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: WindowDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }
}

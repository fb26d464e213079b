use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::view::view_state::ViewState;

pub const SCREEN_SIZE_UNIFORM: &str = "screenSize";
pub const OFFSET_UNIFORM: &str = "offset";
pub const ZOOM_UNIFORM: &str = "zoom";
pub const ITERATIONS_UNIFORM: &str = "iterations";

/// A named shader parameter together with its value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue {
    ScreenSize([f64; 2]),
    Offset([f64; 2]),
    Zoom(f64),
    Iterations(i32),
}

impl UniformValue {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ScreenSize(_) => SCREEN_SIZE_UNIFORM,
            Self::Offset(_) => OFFSET_UNIFORM,
            Self::Zoom(_) => ZOOM_UNIFORM,
            Self::Iterations(_) => ITERATIONS_UNIFORM,
        }
    }

    #[must_use]
    pub fn screen_size(window: WindowDimensions) -> Self {
        Self::ScreenSize(window.as_f64_pair())
    }

    #[must_use]
    pub fn offset(view: &ViewState) -> Self {
        Self::Offset([view.offset_x(), view.offset_y()])
    }

    #[must_use]
    pub fn zoom(view: &ViewState) -> Self {
        Self::Zoom(view.zoom())
    }

    #[must_use]
    pub fn iterations(view: &ViewState) -> Self {
        Self::Iterations(view.iterations())
    }

    /// The full uniform set for a window and view, in upload order.
    #[must_use]
    pub fn all(window: WindowDimensions, view: &ViewState) -> [Self; 4] {
        [
            Self::screen_size(window),
            Self::offset(view),
            Self::zoom(view),
            Self::iterations(view),
        ]
    }
}

/// Receives shader parameters as soon as the view changes.
pub trait UniformSinkPort {
    fn set_uniform(&mut self, value: UniformValue);

    /// Called when the drawable size changes, after the `screenSize` uniform.
    fn set_viewport(&mut self, _window: WindowDimensions) {}
}

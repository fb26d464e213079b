use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::view::view_state::ViewState;

/// Everything the input handlers and the render loop share.
///
/// One instance lives on the event-loop thread and is passed by reference to
/// whoever needs it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerContext {
    pub view: ViewState,
    pub window: WindowDimensions,
    pub close_requested: bool,
    pub overlay_visible: bool,
}

impl ViewerContext {
    #[must_use]
    pub fn new(window: WindowDimensions) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_overlay(mut self, visible: bool) -> Self {
        self.overlay_visible = visible;
        self
    }
}

use crate::core::data::points::ScreenPoint;

/// Left-button drag tracking.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { last_cursor: ScreenPoint },
}

impl DragState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

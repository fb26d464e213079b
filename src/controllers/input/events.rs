use crate::core::data::points::ScreenPoint;
use crate::core::data::window_dimensions::WindowDimensions;

/// Keys the viewer reacts to. Anything else is dropped during translation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Numpad0,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    NumpadMultiply,
    NumpadDivide,
    NumpadAdd,
    NumpadSubtract,
    F1,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// One input event, independent of the windowing library that produced it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    KeyPressed(Key),
    MouseButton { button: MouseButton, state: ButtonState },
    CursorMoved(ScreenPoint),
    /// Vertical wheel movement; positive scrolls up.
    Scroll { delta_y: f64 },
    Resized(WindowDimensions),
}

/// What a handled event changed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Ignored,
    ViewChanged,
    WindowChanged,
    OverlayToggled,
    CloseRequested,
}

impl EventOutcome {
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        matches!(
            self,
            Self::ViewChanged | Self::WindowChanged | Self::OverlayToggled
        )
    }
}

use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controllers::input::events::{ButtonState, InputEvent, Key, MouseButton};
use crate::core::data::points::ScreenPoint;
use crate::core::data::window_dimensions::WindowDimensions;

/// Converts a winit window event into the viewer's own input vocabulary.
/// Events the viewer does not react to come back as `None`.
pub fn translate(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => translate_key(event),
        WindowEvent::MouseInput { state, button, .. } => Some(InputEvent::MouseButton {
            button: map_mouse_button(*button),
            state: map_element_state(*state),
        }),
        WindowEvent::CursorMoved { position, .. } => {
            Some(InputEvent::CursorMoved(ScreenPoint::new(position.x, position.y)))
        }
        WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Scroll {
            delta_y: scroll_delta_y(*delta),
        }),
        WindowEvent::Resized(size) => Some(InputEvent::Resized(WindowDimensions::from_physical(
            size.width,
            size.height,
        ))),
        _ => None,
    }
}

// Auto-repeat is dropped so a held key acts once.
fn translate_key(event: &KeyEvent) -> Option<InputEvent> {
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }

    match event.physical_key {
        PhysicalKey::Code(code) => map_key_code(code).map(InputEvent::KeyPressed),
        PhysicalKey::Unidentified(_) => None,
    }
}

#[must_use]
pub fn map_key_code(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Numpad0 => Key::Numpad0,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::NumpadMultiply => Key::NumpadMultiply,
        KeyCode::NumpadDivide => Key::NumpadDivide,
        KeyCode::NumpadAdd => Key::NumpadAdd,
        KeyCode::NumpadSubtract => Key::NumpadSubtract,
        KeyCode::F1 => Key::F1,
        _ => return None,
    };

    Some(key)
}

#[must_use]
pub fn map_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

#[must_use]
pub fn map_element_state(state: ElementState) -> ButtonState {
    match state {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}

/// Vertical wheel movement, positive when scrolling up. Line and pixel deltas
/// are passed through unscaled; only the sign matters downstream.
#[must_use]
pub fn scroll_delta_y(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    }
}

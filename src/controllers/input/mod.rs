pub mod controller;
pub mod drag_state;
pub mod events;

pub use controller::InputController;
pub use drag_state::DragState;
pub use events::{ButtonState, EventOutcome, InputEvent, Key, MouseButton};

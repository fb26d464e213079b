pub mod coordinate_mapper;
pub mod view_state;

pub use coordinate_mapper::{screen_to_world, world_to_screen};
pub use view_state::ViewState;

pub mod render_view_rayon;

pub use render_view_rayon::{RenderViewError, render_view_rayon};

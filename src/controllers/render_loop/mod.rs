pub mod frame_stats;
pub mod render_loop;

pub use frame_stats::FrameStats;
pub use render_loop::{QUAD_VERTEX_COUNT, RenderLoop, diagnostics_title};

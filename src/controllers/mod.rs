pub mod context;
pub mod input;
pub mod ports;
pub mod render_loop;
pub mod snapshot;

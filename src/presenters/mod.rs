pub mod file;
#[cfg(feature = "gui")]
pub mod gpu;
pub mod shader;

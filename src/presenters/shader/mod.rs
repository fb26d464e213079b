pub mod quad;
pub mod sources;
pub mod uniform_block;

pub use quad::{QUAD_VERTEX_STRIDE, QUAD_VERTICES, quad_bytes};
pub use sources::{ShaderPrecision, ShaderSources};
pub use uniform_block::{UNIFORM_BUFFER_SIZE, UniformBlock};

use bytemuck::{Pod, Zeroable};

use crate::controllers::ports::uniform_sink::{UniformSinkPort, UniformValue};
use crate::presenters::shader::sources::ShaderPrecision;

/// Size of the GPU buffer backing the `Params` uniform; large enough for either
/// precision.
pub const UNIFORM_BUFFER_SIZE: u64 = std::mem::size_of::<DoubleParams>() as u64;

/// `Params` with `f64` members, laid out per WGSL uniform rules.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct DoubleParams {
    screen_size: [f64; 2],
    offset: [f64; 2],
    zoom: f64,
    iterations: i32,
    _pad: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct SingleParams {
    screen_size: [f32; 2],
    offset: [f32; 2],
    zoom: f32,
    iterations: i32,
    _pad: [u32; 2],
}

/// Host-side copy of the shader uniforms, serialisable for either precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UniformBlock {
    pub screen_size: [f64; 2],
    pub offset: [f64; 2],
    pub zoom: f64,
    pub iterations: i32,
}

impl Default for UniformBlock {
    fn default() -> Self {
        Self {
            screen_size: [0.0, 0.0],
            offset: [0.0, 0.0],
            zoom: 1.0,
            iterations: 1,
        }
    }
}

impl UniformSinkPort for UniformBlock {
    fn set_uniform(&mut self, value: UniformValue) {
        match value {
            UniformValue::ScreenSize(size) => self.screen_size = size,
            UniformValue::Offset(offset) => self.offset = offset,
            UniformValue::Zoom(zoom) => self.zoom = zoom,
            UniformValue::Iterations(iterations) => self.iterations = iterations,
        }
    }
}

impl UniformBlock {
    /// Bytes to upload into the uniform buffer, always `UNIFORM_BUFFER_SIZE` long.
    #[must_use]
    pub fn to_bytes(&self, precision: ShaderPrecision) -> Vec<u8> {
        let mut bytes = match precision {
            ShaderPrecision::Double => bytemuck::bytes_of(&DoubleParams {
                screen_size: self.screen_size,
                offset: self.offset,
                zoom: self.zoom,
                iterations: self.iterations,
                _pad: 0,
            })
            .to_vec(),
            ShaderPrecision::Single => bytemuck::bytes_of(&SingleParams {
                screen_size: self.screen_size.map(|v| v as f32),
                offset: self.offset.map(|v| v as f32),
                zoom: self.zoom as f32,
                iterations: self.iterations,
                _pad: [0; 2],
            })
            .to_vec(),
        };

        bytes.resize(UNIFORM_BUFFER_SIZE as usize, 0);
        bytes
    }
}

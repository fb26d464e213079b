use crate::controllers::render_loop::QUAD_VERTEX_COUNT;

/// Two clip-space triangles covering the whole viewport.
pub static QUAD_VERTICES: [[f32; 2]; QUAD_VERTEX_COUNT as usize] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [1.0, 1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
    [-1.0, -1.0],
];

pub const QUAD_VERTEX_STRIDE: u64 = std::mem::size_of::<[f32; 2]>() as u64;

#[must_use]
pub fn quad_bytes() -> &'static [u8] {
    bytemuck::cast_slice(&QUAD_VERTICES)
}

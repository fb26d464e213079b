use crate::errors::ViewerError;

/// Something that can clear, draw and present one frame of the full-screen quad.
pub trait FrameTargetPort {
    fn draw_frame(&mut self, vertex_count: u32) -> Result<(), ViewerError>;

    fn set_title(&mut self, _title: &str) {}
}

use crate::controllers::ports::frame_target::FrameTargetPort;
use crate::controllers::ports::uniform_sink::UniformSinkPort;
use crate::presenters::shader::ShaderPrecision;

/// A tessellated egui frame waiting to be drawn over the fractal.
pub struct OverlayFrame {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

pub trait GuiPresenterPort: UniformSinkPort + FrameTargetPort {
    /// Draw `frame` on top of the next frame only.
    fn queue_overlay(&mut self, frame: OverlayFrame);

    fn precision(&self) -> ShaderPrecision;
}

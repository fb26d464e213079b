use std::time::Instant;

use tracing::trace;

use crate::controllers::context::ViewerContext;
use crate::controllers::ports::frame_target::FrameTargetPort;
use crate::controllers::render_loop::frame_stats::FrameStats;
use crate::errors::ViewerError;

/// Two triangles covering the whole viewport.
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Per-frame orchestration: draw the quad, present, and keep the frame-rate
/// sample (and optionally the window title) current.
#[derive(Debug)]
pub struct RenderLoop {
    stats: FrameStats,
    base_title: String,
    show_diagnostics_in_title: bool,
}

impl RenderLoop {
    #[must_use]
    pub fn new(base_title: impl Into<String>, show_diagnostics_in_title: bool, now: Instant) -> Self {
        Self {
            stats: FrameStats::new(now),
            base_title: base_title.into(),
            show_diagnostics_in_title,
        }
    }

    #[must_use]
    pub fn fps(&self) -> Option<f64> {
        self.stats.fps()
    }

    /// Renders one frame. Minimised windows are skipped without counting a frame.
    pub fn frame<T>(&mut self, context: &ViewerContext, target: &mut T, now: Instant) -> Result<(), ViewerError>
    where
        T: FrameTargetPort + ?Sized,
    {
        if !context.window.is_drawable() {
            return Ok(());
        }

        target.draw_frame(QUAD_VERTEX_COUNT)?;

        if let Some(fps) = self.stats.tick(now) {
            trace!(fps, "frame rate sample");

            if self.show_diagnostics_in_title {
                target.set_title(&diagnostics_title(&self.base_title, context.view.iterations(), fps));
            }
        }

        Ok(())
    }
}

#[must_use]
pub fn diagnostics_title(base_title: &str, iterations: i32, fps: f64) -> String {
    format!("{base_title} (iterations: {iterations}; FPS: {fps:.1})")
}

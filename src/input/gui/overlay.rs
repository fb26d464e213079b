use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::context::ViewerContext;
use crate::core::data::complex::WorldPoint;
use crate::core::data::points::ScreenPoint;
use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::view::coordinate_mapper::screen_to_world;
use crate::input::gui::app::ports::presenter::OverlayFrame;
use crate::presenters::shader::ShaderPrecision;

pub const KEY_HELP: &[(&str, &str)] = &[
    ("Drag", "pan"),
    ("Wheel", "zoom at cursor"),
    ("Arrows", "pan"),
    ("Num * /", "zoom in / out"),
    ("Num + -", "iterations"),
    ("Num 0", "reset view"),
    ("F1", "toggle this window"),
    ("Esc", "quit"),
];

/// What the diagnostics window shows for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayData {
    pub iterations: i32,
    pub zoom: f64,
    pub offset: WorldPoint,
    pub cursor_world: Option<WorldPoint>,
    pub window: WindowDimensions,
    pub precision: ShaderPrecision,
    pub fps: Option<f64>,
}

impl OverlayData {
    #[must_use]
    pub fn capture(
        context: &ViewerContext,
        cursor: Option<ScreenPoint>,
        precision: ShaderPrecision,
        fps: Option<f64>,
    ) -> Self {
        Self {
            iterations: context.view.iterations(),
            zoom: context.view.zoom(),
            offset: context.view.offset(),
            cursor_world: cursor.map(|cursor| screen_to_world(cursor, context.window, &context.view)),
            window: context.window,
            precision,
            fps,
        }
    }
}

/// egui state for the diagnostics window.
pub struct DiagnosticsOverlay {
    egui_ctx: egui::Context,
    egui_state: EguiWinitState,
}

impl DiagnosticsOverlay {
    pub fn new<T>(event_loop: &EventLoop<T>, scale_factor: f64) -> Self {
        let egui_ctx = egui::Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Self {
            egui_ctx,
            egui_state,
        }
    }

    /// Feeds `event` to egui. Returns true when egui wants it for itself.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }

    /// Runs the UI once and tessellates the result.
    pub fn run(&mut self, window: &Window, data: &OverlayData) -> OverlayFrame {
        let raw_input = self.egui_state.take_egui_input(window);

        let output = self.egui_ctx.run(raw_input, |ctx| draw_diagnostics(ctx, data));

        self.egui_state
            .handle_platform_output(window, output.platform_output);

        OverlayFrame {
            primitives: self.egui_ctx.tessellate(output.shapes, output.pixels_per_point),
            textures_delta: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
        }
    }
}

fn draw_diagnostics(ctx: &egui::Context, data: &OverlayData) {
    egui::Window::new("Diagnostics")
        .default_pos([10.0, 10.0])
        .default_size([240.0, 260.0])
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("diagnostics_grid")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Iterations:");
                    ui.label(data.iterations.to_string());
                    ui.end_row();

                    ui.label("Zoom:");
                    ui.label(format!("{:.3e}", data.zoom));
                    ui.end_row();

                    ui.label("Offset:");
                    ui.label(format!("{:.10}, {:.10}", data.offset.real, data.offset.imag));
                    ui.end_row();

                    ui.label("Cursor:");
                    ui.label(data.cursor_world.map_or_else(
                        || "-".to_string(),
                        |world| format!("{:.10}, {:.10}", world.real, world.imag),
                    ));
                    ui.end_row();

                    ui.label("Window:");
                    ui.label(format!("{} x {}", data.window.width, data.window.height));
                    ui.end_row();

                    ui.label("Precision:");
                    ui.label(data.precision.to_string());
                    ui.end_row();

                    ui.label("FPS:");
                    ui.label(data.fps.map_or_else(|| "-".to_string(), |fps| format!("{fps:.1}")));
                    ui.end_row();
                });

            ui.separator();

            egui::Grid::new("key_help_grid")
                .num_columns(2)
                .show(ui, |ui| {
                    for (key, action) in KEY_HELP {
                        ui.monospace(*key);
                        ui.label(*action);
                        ui.end_row();
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::view_state::ViewState;

    #[test]
    fn capture_reports_world_point_under_cursor() {
        let mut context = ViewerContext::new(WindowDimensions::new(800, 600));
        context.view = ViewState::new(0.5, 0.0, 100.0, 200);

        let data = OverlayData::capture(
            &context,
            Some(ScreenPoint::new(500.0, 200.0)),
            ShaderPrecision::Double,
            Some(60.0),
        );

        assert_eq!(data.cursor_world, Some(WorldPoint::new(0.5, 1.0)));
        assert_eq!(data.offset, WorldPoint::new(0.5, 0.0));
        assert_eq!(data.iterations, 200);
        assert_eq!(data.fps, Some(60.0));
    }

    #[test]
    fn capture_without_cursor_has_no_world_point() {
        let context = ViewerContext::new(WindowDimensions::new(800, 600));

        let data = OverlayData::capture(&context, None, ShaderPrecision::Single, None);

        assert_eq!(data.cursor_world, None);
    }

    #[test]
    fn help_lists_every_binding() {
        let keys: Vec<&str> = KEY_HELP.iter().map(|(key, _)| *key).collect();

        assert!(keys.contains(&"F1"));
        assert!(keys.contains(&"Esc"));
        assert_eq!(keys.len(), 8);
    }
}

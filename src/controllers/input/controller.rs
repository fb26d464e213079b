use tracing::debug;

use crate::controllers::context::ViewerContext;
use crate::controllers::input::drag_state::DragState;
use crate::controllers::input::events::{ButtonState, EventOutcome, InputEvent, Key, MouseButton};
use crate::controllers::ports::uniform_sink::{UniformSinkPort, UniformValue};
use crate::core::data::points::ScreenPoint;
use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::view::coordinate_mapper::{screen_to_centre_relative, screen_to_world};

/// Screen pixels moved by one arrow key press.
pub const PAN_STEP_PIXELS: f64 = 20.0;
pub const KEY_ZOOM_FACTOR: f64 = 2.0;
pub const SCROLL_ZOOM_FACTOR: f64 = 1.1;
pub const ITERATION_STEP: i32 = 10;

/// Turns input events into view changes and pushes the affected uniforms.
///
/// The controller owns the transient pointer state (drag and last cursor
/// position); the view itself lives in the [`ViewerContext`] passed to
/// [`InputController::handle`]. The cursor is unknown until the first
/// `CursorMoved`: a press before that starts no drag, and a scroll zooms
/// around the window centre.
#[derive(Debug, Default)]
pub struct InputController {
    drag: DragState,
    cursor: Option<ScreenPoint>,
}

impl InputController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn cursor(&self) -> Option<ScreenPoint> {
        self.cursor
    }

    /// Uploads every uniform, used once the backend is ready.
    pub fn push_all<S>(context: &ViewerContext, sink: &mut S)
    where
        S: UniformSinkPort + ?Sized,
    {
        for value in UniformValue::all(context.window, &context.view) {
            sink.set_uniform(value);
        }
        sink.set_viewport(context.window);
    }

    pub fn handle<S>(&mut self, context: &mut ViewerContext, event: InputEvent, sink: &mut S) -> EventOutcome
    where
        S: UniformSinkPort + ?Sized,
    {
        match event {
            InputEvent::KeyPressed(key) => Self::handle_key(context, key, sink),
            InputEvent::MouseButton { button, state } => self.handle_mouse_button(button, state),
            InputEvent::CursorMoved(position) => self.handle_cursor_moved(context, position, sink),
            InputEvent::Scroll { delta_y } => self.handle_scroll(context, delta_y, sink),
            InputEvent::Resized(window) => Self::handle_resize(context, window, sink),
        }
    }

    fn handle_key<S>(context: &mut ViewerContext, key: Key, sink: &mut S) -> EventOutcome
    where
        S: UniformSinkPort + ?Sized,
    {
        let view = &mut context.view;
        let pan_step = PAN_STEP_PIXELS / view.zoom();

        match key {
            Key::Escape => {
                context.close_requested = true;
                return EventOutcome::CloseRequested;
            }
            Key::F1 => {
                context.overlay_visible = !context.overlay_visible;
                return EventOutcome::OverlayToggled;
            }
            Key::Numpad0 => view.reset(),
            Key::ArrowLeft => view.pan(pan_step, 0.0),
            Key::ArrowRight => view.pan(-pan_step, 0.0),
            Key::ArrowUp => view.pan(0.0, -pan_step),
            Key::ArrowDown => view.pan(0.0, pan_step),
            Key::NumpadMultiply => view.scale_zoom(KEY_ZOOM_FACTOR),
            Key::NumpadDivide => view.scale_zoom(1.0 / KEY_ZOOM_FACTOR),
            Key::NumpadAdd => view.adjust_iterations(ITERATION_STEP),
            Key::NumpadSubtract => view.adjust_iterations(-ITERATION_STEP),
        }

        debug!(?key, view = ?context.view, "key changed view");

        sink.set_uniform(UniformValue::iterations(&context.view));
        sink.set_uniform(UniformValue::zoom(&context.view));
        sink.set_uniform(UniformValue::offset(&context.view));

        EventOutcome::ViewChanged
    }

    fn handle_mouse_button(&mut self, button: MouseButton, state: ButtonState) -> EventOutcome {
        if button != MouseButton::Left {
            return EventOutcome::Ignored;
        }

        self.drag = match (state, self.cursor) {
            (ButtonState::Pressed, Some(last_cursor)) => DragState::Dragging { last_cursor },
            _ => DragState::Idle,
        };

        EventOutcome::Ignored
    }

    fn handle_cursor_moved<S>(&mut self, context: &mut ViewerContext, position: ScreenPoint, sink: &mut S) -> EventOutcome
    where
        S: UniformSinkPort + ?Sized,
    {
        self.cursor = Some(position);

        let DragState::Dragging { last_cursor } = self.drag else {
            return EventOutcome::Ignored;
        };

        let zoom = context.view.zoom();
        context.view.pan(
            (position.x - last_cursor.x) / zoom,
            (last_cursor.y - position.y) / zoom,
        );
        self.drag = DragState::Dragging {
            last_cursor: position,
        };

        sink.set_uniform(UniformValue::offset(&context.view));

        EventOutcome::ViewChanged
    }

    /// Zooms by one step while keeping the world point under the cursor fixed.
    fn handle_scroll<S>(&mut self, context: &mut ViewerContext, delta_y: f64, sink: &mut S) -> EventOutcome
    where
        S: UniformSinkPort + ?Sized,
    {
        if delta_y == 0.0 || delta_y.is_nan() {
            return EventOutcome::Ignored;
        }

        let window = context.window;
        let view = &mut context.view;
        let cursor = self
            .cursor
            .unwrap_or_else(|| ScreenPoint::new(window.half_width(), window.half_height()));

        // Re-centre on the point under the cursor, then rescale around it.
        let anchor = screen_to_world(cursor, window, view);
        view.set_offset(-anchor);

        if delta_y < 0.0 {
            view.scale_zoom(1.0 / SCROLL_ZOOM_FACTOR);
        } else {
            view.scale_zoom(SCROLL_ZOOM_FACTOR);
        }

        let relative = screen_to_centre_relative(cursor, window, view.zoom());
        view.pan(relative.real, relative.imag);

        debug!(zoom = view.zoom(), offset = ?view.offset(), "scroll zoom");

        sink.set_uniform(UniformValue::zoom(&context.view));
        sink.set_uniform(UniformValue::offset(&context.view));

        EventOutcome::ViewChanged
    }

    fn handle_resize<S>(context: &mut ViewerContext, window: WindowDimensions, sink: &mut S) -> EventOutcome
    where
        S: UniformSinkPort + ?Sized,
    {
        context.window = window;

        sink.set_uniform(UniformValue::screen_size(window));
        sink.set_viewport(window);

        EventOutcome::WindowChanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::view::view_state::{MIN_ZOOM, ViewState};

    const EPSILON: f64 = 1e-9;

    #[derive(Default)]
    struct RecordingSink {
        uniforms: Vec<UniformValue>,
        viewports: Vec<WindowDimensions>,
    }

    impl UniformSinkPort for RecordingSink {
        fn set_uniform(&mut self, value: UniformValue) {
            self.uniforms.push(value);
        }

        fn set_viewport(&mut self, window: WindowDimensions) {
            self.viewports.push(window);
        }
    }

    fn setup() -> (InputController, ViewerContext, RecordingSink) {
        (
            InputController::new(),
            ViewerContext::new(WindowDimensions::new(800, 600)),
            RecordingSink::default(),
        )
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::KeyPressed(key)
    }

    fn left(state: ButtonState) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            state,
        }
    }

    fn move_to(x: f64, y: f64) -> InputEvent {
        InputEvent::CursorMoved(ScreenPoint::new(x, y))
    }

    fn assert_close(a: Complex, b: Complex) {
        assert!(
            (a.real - b.real).abs() < EPSILON && (a.imag - b.imag).abs() < EPSILON,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn escape_requests_close() {
        let (mut controller, mut context, mut sink) = setup();

        let outcome = controller.handle(&mut context, press(Key::Escape), &mut sink);

        assert_eq!(outcome, EventOutcome::CloseRequested);
        assert!(context.close_requested);
        assert!(sink.uniforms.is_empty());
    }

    #[test]
    fn numpad_zero_resets_from_any_state() {
        let (mut controller, mut context, mut sink) = setup();
        context.view = ViewState::new(3.0, -7.5, 0.001, 9_999);

        controller.handle(&mut context, press(Key::Numpad0), &mut sink);

        assert_eq!(context.view.iterations(), 200);
        assert_eq!(context.view.zoom(), 100.0);
        assert_eq!(context.view.offset_x(), 0.0);
        assert_eq!(context.view.offset_y(), 0.0);
    }

    #[test]
    fn arrow_keys_pan_by_twenty_pixels() {
        let (mut controller, mut context, mut sink) = setup();
        context.view.set_zoom(40.0);

        controller.handle(&mut context, press(Key::ArrowLeft), &mut sink);
        assert_close(context.view.offset(), Complex::new(0.5, 0.0));

        controller.handle(&mut context, press(Key::ArrowUp), &mut sink);
        assert_close(context.view.offset(), Complex::new(0.5, -0.5));

        controller.handle(&mut context, press(Key::ArrowRight), &mut sink);
        controller.handle(&mut context, press(Key::ArrowDown), &mut sink);
        assert_close(context.view.offset(), Complex::ZERO);
    }

    #[test]
    fn numpad_multiply_and_divide_double_and_halve_zoom() {
        let (mut controller, mut context, mut sink) = setup();

        controller.handle(&mut context, press(Key::NumpadMultiply), &mut sink);
        assert_eq!(context.view.zoom(), 200.0);

        controller.handle(&mut context, press(Key::NumpadDivide), &mut sink);
        controller.handle(&mut context, press(Key::NumpadDivide), &mut sink);
        assert_eq!(context.view.zoom(), 50.0);
    }

    #[test]
    fn numpad_plus_adds_ten_iterations() {
        let (mut controller, mut context, mut sink) = setup();

        controller.handle(&mut context, press(Key::NumpadAdd), &mut sink);

        assert_eq!(context.view.iterations(), 210);
    }

    #[test]
    fn numpad_minus_ten_times_from_five_clamps_to_one() {
        let (mut controller, mut context, mut sink) = setup();
        context.view = ViewState::new(0.0, 0.0, 100.0, 5);

        for _ in 0..10 {
            controller.handle(&mut context, press(Key::NumpadSubtract), &mut sink);
        }

        assert_eq!(context.view.iterations(), 1);
    }

    #[test]
    fn key_changes_push_iterations_zoom_and_offset() {
        let (mut controller, mut context, mut sink) = setup();

        controller.handle(&mut context, press(Key::NumpadAdd), &mut sink);

        assert_eq!(
            sink.uniforms,
            [
                UniformValue::Iterations(210),
                UniformValue::Zoom(100.0),
                UniformValue::Offset([0.0, 0.0]),
            ]
        );
    }

    #[test]
    fn f1_toggles_overlay_without_touching_view() {
        let (mut controller, mut context, mut sink) = setup();

        let outcome = controller.handle(&mut context, press(Key::F1), &mut sink);

        assert_eq!(outcome, EventOutcome::OverlayToggled);
        assert!(context.overlay_visible);
        assert_eq!(context.view, ViewState::default());

        controller.handle(&mut context, press(Key::F1), &mut sink);
        assert!(!context.overlay_visible);
    }

    #[test]
    fn left_press_and_release_toggle_drag_state() {
        let (mut controller, mut context, mut sink) = setup();

        controller.handle(&mut context, move_to(10.0, 20.0), &mut sink);
        controller.handle(&mut context, left(ButtonState::Pressed), &mut sink);

        assert_eq!(
            controller.drag_state(),
            DragState::Dragging {
                last_cursor: ScreenPoint::new(10.0, 20.0)
            }
        );

        controller.handle(&mut context, left(ButtonState::Released), &mut sink);
        assert_eq!(controller.drag_state(), DragState::Idle);
    }

    #[test]
    fn other_buttons_do_not_start_a_drag() {
        let (mut controller, mut context, mut sink) = setup();

        controller.handle(
            &mut context,
            InputEvent::MouseButton {
                button: MouseButton::Right,
                state: ButtonState::Pressed,
            },
            &mut sink,
        );

        assert!(!controller.drag_state().is_active());
    }

    #[test]
    fn cursor_moves_without_drag_do_not_pan() {
        let (mut controller, mut context, mut sink) = setup();

        let outcome = controller.handle(&mut context, move_to(100.0, 100.0), &mut sink);

        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(context.view.offset(), Complex::ZERO);
        assert!(sink.uniforms.is_empty());
        assert_eq!(controller.cursor(), Some(ScreenPoint::new(100.0, 100.0)));
    }

    #[test]
    fn drag_pans_scaled_by_zoom_with_inverted_y() {
        let (mut controller, mut context, mut sink) = setup();
        context.view.set_zoom(50.0);

        controller.handle(&mut context, move_to(100.0, 100.0), &mut sink);
        controller.handle(&mut context, left(ButtonState::Pressed), &mut sink);
        controller.handle(&mut context, move_to(150.0, 200.0), &mut sink);

        assert_close(context.view.offset(), Complex::new(1.0, -2.0));
        assert_eq!(sink.uniforms.last(), Some(&UniformValue::offset(&context.view)));
    }

    #[test]
    fn dragged_content_follows_the_cursor() {
        let (mut controller, mut context, mut sink) = setup();
        let start = ScreenPoint::new(300.0, 250.0);
        let end = ScreenPoint::new(420.0, 130.0);
        let grabbed = screen_to_world(start, context.window, &context.view);

        controller.handle(&mut context, InputEvent::CursorMoved(start), &mut sink);
        controller.handle(&mut context, left(ButtonState::Pressed), &mut sink);
        controller.handle(&mut context, InputEvent::CursorMoved(end), &mut sink);

        assert_close(screen_to_world(end, context.window, &context.view), grabbed);
    }

    #[test]
    fn drag_there_and_back_restores_offset() {
        let (mut controller, mut context, mut sink) = setup();
        context.view = ViewState::new(-0.75, 0.1, 3_333.0, 200);
        let original = context.view.offset();

        controller.handle(&mut context, move_to(120.0, 80.0), &mut sink);
        controller.handle(&mut context, left(ButtonState::Pressed), &mut sink);
        controller.handle(&mut context, move_to(555.5, 432.25), &mut sink);
        controller.handle(&mut context, move_to(120.0, 80.0), &mut sink);
        controller.handle(&mut context, left(ButtonState::Released), &mut sink);

        assert_close(context.view.offset(), original);
    }

    #[test]
    fn release_stops_panning() {
        let (mut controller, mut context, mut sink) = setup();

        controller.handle(&mut context, left(ButtonState::Pressed), &mut sink);
        controller.handle(&mut context, left(ButtonState::Released), &mut sink);
        controller.handle(&mut context, move_to(300.0, 300.0), &mut sink);

        assert_eq!(context.view.offset(), Complex::ZERO);
    }

    #[test]
    fn scroll_up_at_centre_from_defaults() {
        let (mut controller, mut context, mut sink) = setup();

        controller.handle(&mut context, move_to(400.0, 300.0), &mut sink);
        controller.handle(&mut context, InputEvent::Scroll { delta_y: 1.0 }, &mut sink);

        assert!((context.view.zoom() - 110.0).abs() < EPSILON);
        assert_eq!(context.view.offset_x(), 0.0);
        assert_eq!(context.view.offset_y(), 0.0);
    }

    #[test]
    fn scroll_down_divides_zoom() {
        let (mut controller, mut context, mut sink) = setup();

        controller.handle(&mut context, InputEvent::Scroll { delta_y: -3.0 }, &mut sink);

        assert!((context.view.zoom() - 100.0 / 1.1).abs() < EPSILON);
    }

    #[test]
    fn scroll_before_any_cursor_move_zooms_around_centre() {
        let (mut controller, mut context, mut sink) = setup();
        context.view = ViewState::new(0.25, -1.5, 100.0, 200);

        controller.handle(&mut context, InputEvent::Scroll { delta_y: 1.0 }, &mut sink);

        assert!((context.view.zoom() - 110.0).abs() < EPSILON);
        assert_close(context.view.offset(), Complex::new(0.25, -1.5));
    }

    #[test]
    fn press_before_any_cursor_move_starts_no_drag() {
        let (mut controller, mut context, mut sink) = setup();

        controller.handle(&mut context, left(ButtonState::Pressed), &mut sink);

        assert!(!controller.drag_state().is_active());
        assert_eq!(controller.cursor(), None);
    }

    #[test]
    fn offset_stays_finite_at_minimum_zoom() {
        let (mut controller, mut context, mut sink) = setup();

        for _ in 0..1_100 {
            controller.handle(&mut context, press(Key::NumpadDivide), &mut sink);
        }
        assert_eq!(context.view.zoom(), MIN_ZOOM);

        controller.handle(&mut context, press(Key::ArrowLeft), &mut sink);
        controller.handle(&mut context, press(Key::ArrowRight), &mut sink);
        controller.handle(&mut context, press(Key::ArrowUp), &mut sink);

        controller.handle(&mut context, move_to(0.0, 0.0), &mut sink);
        controller.handle(&mut context, left(ButtonState::Pressed), &mut sink);
        controller.handle(&mut context, move_to(799.0, 599.0), &mut sink);
        controller.handle(&mut context, left(ButtonState::Released), &mut sink);

        controller.handle(&mut context, move_to(700.0, 100.0), &mut sink);
        controller.handle(&mut context, InputEvent::Scroll { delta_y: -1.0 }, &mut sink);
        controller.handle(&mut context, InputEvent::Scroll { delta_y: 1.0 }, &mut sink);

        let offset = context.view.offset();
        assert!(offset.real.is_finite() && offset.imag.is_finite(), "{offset:?}");
        assert!(context.view.zoom() >= MIN_ZOOM);
    }

    #[test]
    fn scroll_keeps_world_point_under_cursor() {
        let cursors = [
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(799.0, 599.0),
            ScreenPoint::new(123.4, 456.7),
            ScreenPoint::new(400.0, 10.0),
        ];
        let views = [
            ViewState::default(),
            ViewState::new(0.75, -0.1, 12_000.0, 200),
            ViewState::new(-1.25, 2.5, 0.5, 50),
        ];

        for view in views {
            for cursor in cursors {
                for delta_y in [1.0, -1.0, 0.25, -120.0] {
                    let (mut controller, mut context, mut sink) = setup();
                    context.view = view;
                    let before = screen_to_world(cursor, context.window, &context.view);

                    controller.handle(&mut context, InputEvent::CursorMoved(cursor), &mut sink);
                    controller.handle(&mut context, InputEvent::Scroll { delta_y }, &mut sink);

                    let after = screen_to_world(cursor, context.window, &context.view);
                    let tolerance = 1e-9 * (1.0 + before.real.abs() + before.imag.abs());
                    assert!(
                        (after.real - before.real).abs() < tolerance
                            && (after.imag - before.imag).abs() < tolerance,
                        "cursor {cursor:?}, delta {delta_y}: {before:?} -> {after:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn zero_scroll_is_ignored() {
        let (mut controller, mut context, mut sink) = setup();

        let outcome = controller.handle(&mut context, InputEvent::Scroll { delta_y: 0.0 }, &mut sink);

        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(context.view, ViewState::default());
        assert!(sink.uniforms.is_empty());
    }

    #[test]
    fn scroll_pushes_zoom_and_offset() {
        let (mut controller, mut context, mut sink) = setup();

        controller.handle(&mut context, InputEvent::Scroll { delta_y: 1.0 }, &mut sink);

        assert_eq!(
            sink.uniforms,
            [
                UniformValue::zoom(&context.view),
                UniformValue::offset(&context.view),
            ]
        );
    }

    #[test]
    fn resize_updates_mapping_and_pushes_screen_size() {
        let (mut controller, mut context, mut sink) = setup();
        let pixel = ScreenPoint::new(512.0, 384.0);
        let before = screen_to_world(pixel, context.window, &context.view);

        let outcome = controller.handle(
            &mut context,
            InputEvent::Resized(WindowDimensions::new(1024, 768)),
            &mut sink,
        );

        assert_eq!(outcome, EventOutcome::WindowChanged);
        assert_eq!(context.window, WindowDimensions::new(1024, 768));
        assert_close(before, Complex::new(1.12, -0.84));
        assert_close(screen_to_world(pixel, context.window, &context.view), Complex::ZERO);
        assert_eq!(sink.uniforms, [UniformValue::ScreenSize([1024.0, 768.0])]);
        assert_eq!(sink.viewports, [WindowDimensions::new(1024, 768)]);
    }

    #[test]
    fn resize_keeps_zoom_and_offset() {
        let (mut controller, mut context, mut sink) = setup();
        context.view = ViewState::new(0.3, 0.4, 250.0, 200);

        controller.handle(
            &mut context,
            InputEvent::Resized(WindowDimensions::new(320, 240)),
            &mut sink,
        );

        assert_eq!(context.view, ViewState::new(0.3, 0.4, 250.0, 200));
    }

    #[test]
    fn push_all_uploads_every_uniform_and_viewport() {
        let (_, context, mut sink) = setup();

        InputController::push_all(&context, &mut sink);

        assert_eq!(
            sink.uniforms,
            UniformValue::all(context.window, &context.view).to_vec()
        );
        assert_eq!(sink.viewports, [context.window]);
    }
}

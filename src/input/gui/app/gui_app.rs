use std::time::Instant;

use tracing::debug;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::config::ViewerConfig;
use crate::controllers::context::ViewerContext;
use crate::controllers::input::controller::InputController;
use crate::controllers::input::events::{ButtonState, EventOutcome, InputEvent};
use crate::controllers::render_loop::render_loop::RenderLoop;
use crate::core::data::window_dimensions::WindowDimensions;
use crate::errors::ViewerError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::overlay::{DiagnosticsOverlay, OverlayData};
use crate::input::gui::translate::translate;

/// Owns the viewer state on the event-loop thread and routes window events
/// through the input controller to the presenter.
pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    context: ViewerContext,
    controller: InputController,
    render_loop: RenderLoop,
    overlay: DiagnosticsOverlay,
    show_diagnostics_in_title: bool,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        presenter: T,
        overlay: DiagnosticsOverlay,
        config: &ViewerConfig,
    ) -> Self {
        let size = window.inner_size();
        let context = ViewerContext::new(WindowDimensions::from_physical(size.width, size.height))
            .with_overlay(config.show_overlay);

        let mut app = Self {
            window,
            presenter,
            context,
            controller: InputController::new(),
            render_loop: RenderLoop::new(
                config.title.clone(),
                config.show_diagnostics_in_title,
                Instant::now(),
            ),
            overlay,
            show_diagnostics_in_title: config.show_diagnostics_in_title,
        };

        InputController::push_all(&app.context, &mut app.presenter);

        app
    }

    #[must_use]
    pub fn close_requested(&self) -> bool {
        self.context.close_requested
    }

    /// Whether frames are drawn back to back rather than only after a change.
    /// Frame-rate readouts need a steady stream of frames.
    #[must_use]
    pub fn redraws_continuously(&self) -> bool {
        redraws_continuously(self.show_diagnostics_in_title, &self.context)
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> EventOutcome {
        let consumed = self.overlay.on_window_event(self.window, event);

        let Some(input) = translate(event) else {
            return EventOutcome::Ignored;
        };

        if consumed && self.context.overlay_visible && overlay_claims(input) {
            return EventOutcome::Ignored;
        }

        self.dispatch(input)
    }

    /// Re-reads the window size, for events that change it without a `Resized`.
    pub fn sync_window_size(&mut self) -> EventOutcome {
        let size = self.window.inner_size();
        self.dispatch(InputEvent::Resized(WindowDimensions::from_physical(
            size.width,
            size.height,
        )))
    }

    pub fn redraw(&mut self) -> Result<(), ViewerError> {
        if self.context.overlay_visible && self.context.window.is_drawable() {
            let data = OverlayData::capture(
                &self.context,
                self.controller.cursor(),
                self.presenter.precision(),
                self.render_loop.fps(),
            );
            let frame = self.overlay.run(self.window, &data);
            self.presenter.queue_overlay(frame);
        }

        self.render_loop
            .frame(&self.context, &mut self.presenter, Instant::now())
    }

    fn dispatch(&mut self, input: InputEvent) -> EventOutcome {
        let outcome = self
            .controller
            .handle(&mut self.context, input, &mut self.presenter);

        if outcome != EventOutcome::Ignored {
            debug!(?input, ?outcome, "input handled");
        }

        outcome
    }
}

fn redraws_continuously(show_diagnostics_in_title: bool, context: &ViewerContext) -> bool {
    show_diagnostics_in_title || context.overlay_visible
}

/// Events egui keeps when the pointer is over the overlay. Releases and cursor
/// motion always reach the viewer so a drag that ends over the window stops.
fn overlay_claims(input: InputEvent) -> bool {
    matches!(
        input,
        InputEvent::MouseButton {
            state: ButtonState::Pressed,
            ..
        } | InputEvent::Scroll { .. }
    )
}

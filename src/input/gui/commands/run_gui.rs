use std::marker::PhantomData;

use tracing::{error, info};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::config::ViewerConfig;
use crate::errors::ViewerError;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::overlay::DiagnosticsOverlay;

const MIN_WINDOW_SIZE: f64 = 200.0;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ViewerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ViewerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs until it is closed. Returns the error that
    /// stopped the loop, if any.
    pub fn execute(&self) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new().map_err(|e| ViewerError::EventLoop(e.to_string()))?;

        let (width, height) = self.config.dimensions.as_u32_pair();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(&self.config.title)
                .with_inner_size(LogicalSize::new(f64::from(width), f64::from(height)))
                .with_min_inner_size(LogicalSize::new(MIN_WINDOW_SIZE, MIN_WINDOW_SIZE))
                .build(&event_loop)
                .map_err(|e| ViewerError::Window(e.to_string()))?,
        ));

        let presenter: P = self.presenter_factory.build(window, &self.config)?;
        let overlay = DiagnosticsOverlay::new(&event_loop, window.scale_factor());
        let mut app = GuiApp::new(window, presenter, overlay, &self.config);

        info!(title = %self.config.title, width, height, "viewer started");

        let mut failure: Option<ViewerError> = None;

        event_loop
            .run(|event, target| match event {
                Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => target.exit(),
                    WindowEvent::RedrawRequested => {
                        if let Err(e) = app.redraw() {
                            error!(error = %e, "frame failed");
                            failure = Some(e);
                            target.exit();
                        }
                    }
                    WindowEvent::ScaleFactorChanged { .. } => {
                        app.handle_window_event(&event);
                        if app.sync_window_size().needs_redraw() {
                            window.request_redraw();
                        }
                    }
                    other => {
                        if app.handle_window_event(&other).needs_redraw() {
                            window.request_redraw();
                        }
                    }
                },
                Event::AboutToWait => {
                    if app.close_requested() {
                        target.exit();
                    } else if app.redraws_continuously() {
                        target.set_control_flow(ControlFlow::Poll);
                        window.request_redraw();
                    } else {
                        target.set_control_flow(ControlFlow::Wait);
                    }
                }
                _ => {}
            })
            .map_err(|e| ViewerError::EventLoop(e.to_string()))?;

        info!("viewer closed");

        failure.map_or(Ok(()), Err)
    }
}

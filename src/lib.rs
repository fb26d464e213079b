mod config;
mod controllers;
mod core;
mod errors;
#[cfg(feature = "gui")]
mod input;
mod logging;
mod presenters;

pub use config::{SnapshotConfig, ViewerConfig};
pub use controllers::context::ViewerContext;
pub use controllers::input::{ButtonState, EventOutcome, InputController, InputEvent, Key, MouseButton};
pub use controllers::ports::{FrameTargetPort, UniformSinkPort, UniformValue};
pub use controllers::render_loop::RenderLoop;
pub use controllers::snapshot::SnapshotController;
pub use crate::core::actions::render_view::{RenderViewError, render_view_rayon};
pub use crate::core::data::complex::{Complex, WorldPoint};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::points::ScreenPoint;
pub use crate::core::data::window_dimensions::WindowDimensions;
pub use crate::core::view::{ViewState, screen_to_world, world_to_screen};
pub use errors::{SnapshotError, ViewerError};
pub use logging::init_logging;
pub use presenters::file::PpmFilePresenter;
pub use presenters::shader::{ShaderPrecision, ShaderSources, UniformBlock};

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::gpu::WgpuPresenterFactory;

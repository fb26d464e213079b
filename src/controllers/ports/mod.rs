pub mod file_presenter;
pub mod frame_target;
pub mod uniform_sink;

pub use file_presenter::FilePresenterPort;
pub use frame_target::FrameTargetPort;
pub use uniform_sink::{UniformSinkPort, UniformValue};

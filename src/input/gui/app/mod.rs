pub mod gui_app;
pub mod ports;

pub use gui_app::GuiApp;

use winit::window::Window;

use crate::config::ViewerConfig;
use crate::errors::ViewerError;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::gpu::presenter::WgpuPresenter;
use crate::presenters::shader::ShaderSources;

#[derive(Debug, Default)]
pub struct WgpuPresenterFactory {}

impl WgpuPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<WgpuPresenter> for WgpuPresenterFactory {
    fn build(&self, window: &'static Window, config: &ViewerConfig) -> Result<WgpuPresenter, ViewerError> {
        let sources = match &config.shader_dir {
            Some(dir) => ShaderSources::load(dir)?,
            None => ShaderSources::embedded(),
        };

        WgpuPresenter::new(window, &sources, config.prefer_double_precision)
    }
}

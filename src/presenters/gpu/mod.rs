pub mod factory;
pub mod presenter;
pub mod program;

pub use factory::WgpuPresenterFactory;
pub use presenter::WgpuPresenter;

use std::path::PathBuf;

use crate::core::actions::render_view::RenderViewError;

/// Failures of the interactive viewer. All of them are fatal: startup errors end
/// the process and a failed frame stops the event loop.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("failed to create event loop: {0}")]
    EventLoop(String),
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to create rendering surface: {0}")]
    Surface(String),
    #[error("failed to read shader {path}: {source}")]
    ShaderLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("shader {name} failed to compile: {message}")]
    ShaderCompile { name: String, message: String },
    #[error("shader program failed to link: {0}")]
    ShaderLink(String),
    #[error("render failed: {0}")]
    Render(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Render(#[from] RenderViewError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::ViewerError;

pub const VERTEX_SHADER_FILE: &str = "mandelbrot.vert.wgsl";
pub const FRAGMENT_SHADER_FILE: &str = "mandelbrot.frag.wgsl";

const EMBEDDED_VERTEX_SHADER: &str = include_str!("../../../shaders/mandelbrot.vert.wgsl");
const EMBEDDED_FRAGMENT_SHADER: &str = include_str!("../../../shaders/mandelbrot.frag.wgsl");

/// Floating-point width of the fragment shader arithmetic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderPrecision {
    Double,
    Single,
}

impl ShaderPrecision {
    /// Type aliases the fragment shader is written against.
    #[must_use]
    pub fn prelude(self) -> &'static str {
        match self {
            Self::Double => "alias real = f64;\nalias real2 = vec2<f64>;\n",
            Self::Single => "alias real = f32;\nalias real2 = vec2<f32>;\n",
        }
    }
}

impl fmt::Display for ShaderPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double => write!(f, "f64"),
            Self::Single => write!(f, "f32"),
        }
    }
}

/// The vertex and fragment shader text of the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// The copies compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            vertex: EMBEDDED_VERTEX_SHADER.to_string(),
            fragment: EMBEDDED_FRAGMENT_SHADER.to_string(),
        }
    }

    /// Reads both shader files from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ViewerError> {
        let sources = Self {
            vertex: read_shader(dir.join(VERTEX_SHADER_FILE))?,
            fragment: read_shader(dir.join(FRAGMENT_SHADER_FILE))?,
        };

        info!(dir = %dir.display(), "loaded shader sources");
        Ok(sources)
    }

    /// Fragment source with the precision aliases prepended.
    #[must_use]
    pub fn fragment_for(&self, precision: ShaderPrecision) -> String {
        format!("{}{}", precision.prelude(), self.fragment)
    }
}

fn read_shader(path: PathBuf) -> Result<String, ViewerError> {
    std::fs::read_to_string(&path).map_err(|source| ViewerError::ShaderLoad { path, source })
}

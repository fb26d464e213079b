use rayon::prelude::*;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::points::ScreenPoint;
use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, MandelbrotAlgorithmError};
use crate::core::fractals::mandelbrot::colour_map::{BlueWhiteGradient, ColourMapError};
use crate::core::view::coordinate_mapper::screen_to_world;
use crate::core::view::view_state::ViewState;

#[derive(Debug, thiserror::Error)]
pub enum RenderViewError {
    #[error("window {width}x{height} has no pixels to render")]
    EmptyWindow { width: i32, height: i32 },
    #[error(transparent)]
    Algorithm(#[from] MandelbrotAlgorithmError),
    #[error(transparent)]
    ColourMap(#[from] ColourMapError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}

/// Renders `view` on the CPU, sampling every pixel at its centre exactly as the
/// fragment shader does. Rows are evaluated in parallel with rayon.
pub fn render_view_rayon(
    view: &ViewState,
    window: WindowDimensions,
) -> Result<PixelBuffer, RenderViewError> {
    if !window.is_drawable() {
        return Err(RenderViewError::EmptyWindow {
            width: window.width,
            height: window.height,
        });
    }

    let algorithm = MandelbrotAlgorithm::new(view.iterations())?;
    let gradient = BlueWhiteGradient::new(algorithm.max_iterations());
    let (width, height) = window.as_u32_pair();

    let rows: Vec<Vec<Colour>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| {
                    let centre = ScreenPoint::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                    let c = screen_to_world(centre, window, view);
                    gradient.map(algorithm.escape_time(c))
                })
                .collect::<Result<Vec<Colour>, ColourMapError>>()
        })
        .collect::<Result<_, _>>()?;

    let colours: Vec<Colour> = rows.into_iter().flatten().collect();

    Ok(PixelBuffer::from_colours(window, &colours)?)
}

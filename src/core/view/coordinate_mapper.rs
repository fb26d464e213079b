//! Affine map between window pixels and world coordinates.
//!
//! The window centre shows `-offset`; one world unit spans `zoom` pixels. Screen
//! `y` grows downward and world `imag` grows upward, so the vertical axis flips.
//! The fragment shader evaluates the same formula for every pixel centre.

use crate::core::data::complex::WorldPoint;
use crate::core::data::points::ScreenPoint;
use crate::core::data::window_dimensions::WindowDimensions;
use crate::core::view::view_state::ViewState;

/// Position of `point` relative to the window centre, in world units, with the
/// vertical axis pointing up. Offset is not applied.
#[must_use]
pub fn screen_to_centre_relative(
    point: ScreenPoint,
    window: WindowDimensions,
    zoom: f64,
) -> WorldPoint {
    let height = f64::from(window.height);

    WorldPoint {
        real: (point.x - window.half_width()) / zoom,
        imag: (height - point.y - window.half_height()) / zoom,
    }
}

#[must_use]
pub fn screen_to_world(point: ScreenPoint, window: WindowDimensions, view: &ViewState) -> WorldPoint {
    screen_to_centre_relative(point, window, view.zoom()) - view.offset()
}

#[must_use]
pub fn world_to_screen(point: WorldPoint, window: WindowDimensions, view: &ViewState) -> ScreenPoint {
    let shifted = point + view.offset();
    let height = f64::from(window.height);

    ScreenPoint {
        x: shifted.real * view.zoom() + window.half_width(),
        y: height - window.half_height() - shifted.imag * view.zoom(),
    }
}

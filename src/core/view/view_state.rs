use crate::core::data::complex::Complex;

pub const DEFAULT_ZOOM: f64 = 100.0;
pub const DEFAULT_ITERATIONS: i32 = 200;
pub const MIN_ITERATIONS: i32 = 1;
/// Zoom bounds. Window-sized screen distances divided by the zoom, and world
/// distances multiplied by it, stay finite inside this range.
pub const MIN_ZOOM: f64 = 1e-300;
pub const MAX_ZOOM: f64 = 1e300;

/// Pan, zoom and iteration budget of the current view.
///
/// `offset` is in world units, `zoom` is pixels per world unit. Every mutator
/// clamps its input so the state stays valid: the offset is finite, zoom lies in
/// `[MIN_ZOOM, MAX_ZOOM]` and iterations never drop below one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub(crate) offset_x: f64,
    pub(crate) offset_y: f64,
    pub(crate) zoom: f64,
    pub(crate) iterations: i32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: DEFAULT_ZOOM,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl ViewState {
    /// Builds a view from raw values, clamping them the same way the mutators do.
    #[must_use]
    pub fn new(offset_x: f64, offset_y: f64, zoom: f64, iterations: i32) -> Self {
        let mut view = Self::default();
        view.set_offset(Complex::new(offset_x, offset_y));
        view.set_zoom(zoom);
        view.iterations = iterations.max(MIN_ITERATIONS);
        view
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    #[must_use]
    pub fn offset(&self) -> Complex {
        Complex::new(self.offset_x, self.offset_y)
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn iterations(&self) -> i32 {
        self.iterations
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves the view by world-space deltas. Callers scale screen distances by
    /// `1 / zoom` before calling.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x = finite_or(self.offset_x + dx, self.offset_x);
        self.offset_y = finite_or(self.offset_y + dy, self.offset_y);
    }

    /// Overflowing components saturate at `±f64::MAX`; NaN components are ignored.
    pub fn set_offset(&mut self, offset: Complex) {
        self.offset_x = finite_or(offset.real, self.offset_x);
        self.offset_y = finite_or(offset.imag, self.offset_y);
    }

    /// Sets the zoom factor, clamped into `[MIN_ZOOM, MAX_ZOOM]`. NaN is ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_nan() {
            return;
        }

        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn scale_zoom(&mut self, factor: f64) {
        self.set_zoom(self.zoom * factor);
    }

    /// Changes the iteration budget.
    ///
    /// Increases saturate. A decrease by `d` only applies while the budget is
    /// above `d`; otherwise the budget snaps to exactly one. The threshold is
    /// the step size, not a fixed floor: with the numpad step of 10, 15 goes to
    /// 5 and anything up to 10 goes to 1, while a step of 1 takes 11 to 10.
    pub fn adjust_iterations(&mut self, delta: i32) {
        if delta >= 0 {
            self.iterations = self.iterations.saturating_add(delta);
            return;
        }

        let step = delta.unsigned_abs();
        self.iterations = match u32::try_from(self.iterations) {
            Ok(current) if current > step => self.iterations.saturating_add(delta),
            _ => MIN_ITERATIONS,
        };
    }
}

fn finite_or(value: f64, previous: f64) -> f64 {
    if value.is_nan() {
        previous
    } else {
        value.clamp(-f64::MAX, f64::MAX)
    }
}

pub const DEFAULT_WIDTH: i32 = 800;
pub const DEFAULT_HEIGHT: i32 = 600;

/// Size of the drawable area in physical pixels.
///
/// A minimised window reports zero in either axis; that is a valid value here and
/// callers that allocate surfaces must check [`WindowDimensions::is_drawable`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl WindowDimensions {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Builds dimensions from the unsigned sizes reported by windowing and GPU
    /// libraries, saturating at `i32::MAX`.
    #[must_use]
    pub fn from_physical(width: u32, height: u32) -> Self {
        Self {
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        f64::from(self.width) / 2.0
    }

    #[must_use]
    pub fn half_height(&self) -> f64 {
        f64::from(self.height) / 2.0
    }

    #[must_use]
    pub fn as_f64_pair(&self) -> [f64; 2] {
        [f64::from(self.width), f64::from(self.height)]
    }

    /// Width and height as `u32`, with negative values clamped to zero.
    #[must_use]
    pub fn as_u32_pair(&self) -> (u32, u32) {
        (
            u32::try_from(self.width).unwrap_or(0),
            u32::try_from(self.height).unwrap_or(0),
        )
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        let (width, height) = self.as_u32_pair();
        width as usize * height as usize
    }
}

use crate::core::data::colour::Colour;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColourMapError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax { iterations: u32, max_iterations: u32 },
}

/// Blue-white polynomial gradient shared with the fragment shader.
///
/// Points that used the whole budget are inside the set and map to black.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BlueWhiteGradient {
    max_iterations: u32,
}

impl BlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    pub fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        if iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let t = f64::from(iterations) / f64::from(self.max_iterations);
        let s = 1.0 - t;

        Ok(Colour {
            r: (9.0 * s * t * t * t * 255.0) as u8,
            g: (15.0 * s * s * t * t * 255.0) as u8,
            b: (8.5 * s * s * s * t * 255.0) as u8,
        })
    }
}

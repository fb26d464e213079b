use crate::core::data::complex::Complex;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MandelbrotAlgorithmError {
    #[error("maximum iterations must be greater than zero, got {0}")]
    NonPositiveMaxIterations(i32),
}

/// CPU evaluation of the escape-time iteration run by the fragment shader.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: i32) -> Result<Self, MandelbrotAlgorithmError> {
        match u32::try_from(max_iterations) {
            Ok(max_iterations) if max_iterations > 0 => Ok(Self { max_iterations }),
            _ => Err(MandelbrotAlgorithmError::NonPositiveMaxIterations(max_iterations)),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Number of `z ← z² + c` steps taken before `|z| > 2`, starting from zero.
    /// Returns `max_iterations` for points that never escape.
    #[must_use]
    pub fn escape_time(&self, c: Complex) -> u32 {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return iteration;
            }
            z = z * z + c;
        }

        self.max_iterations
    }
}

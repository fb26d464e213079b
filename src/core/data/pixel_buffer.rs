use crate::core::data::colour::Colour;
use crate::core::data::window_dimensions::WindowDimensions;

const BYTES_PER_PIXEL: usize = 3;

fn dimensions_to_buffer_size(dimensions: WindowDimensions) -> usize {
    dimensions.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{x}, y:{y} is outside a {width}x{height} buffer")]
    PixelOutsideBounds { x: u32, y: u32, width: i32, height: i32 },
    #[error("dimensions need {expected} bytes but the buffer holds {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Tightly packed RGB8 image, row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    dimensions: WindowDimensions,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(dimensions: WindowDimensions) -> Self {
        Self {
            dimensions,
            buffer: vec![0; dimensions_to_buffer_size(dimensions)],
        }
    }

    pub fn from_data(
        dimensions: WindowDimensions,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = dimensions_to_buffer_size(dimensions);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { dimensions, buffer })
    }

    pub fn from_colours(
        dimensions: WindowDimensions,
        colours: &[Colour],
    ) -> Result<Self, PixelBufferError> {
        let buffer = colours.iter().flat_map(|c| [c.r, c.g, c.b]).collect();

        Self::from_data(dimensions, buffer)
    }

    #[must_use]
    pub fn dimensions(&self) -> WindowDimensions {
        self.dimensions
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        let (width, height) = self.dimensions.as_u32_pair();

        if x >= width || y >= height {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.dimensions.width,
                height: self.dimensions.height,
            });
        }

        let index = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        let (width, height) = self.dimensions.as_u32_pair();

        if x >= width || y >= height {
            return None;
        }

        let index = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black() {
        let buffer = PixelBuffer::new(WindowDimensions::new(4, 3));

        assert_eq!(buffer.buffer().len(), 36);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn from_data_rejects_wrong_length() {
        let result = PixelBuffer::from_data(WindowDimensions::new(2, 2), vec![0; 11]);

        assert_eq!(
            result,
            Err(PixelBufferError::BoundsMismatch {
                expected: 12,
                actual: 11
            })
        );
    }

    #[test]
    fn set_pixel_writes_row_major() {
        let mut buffer = PixelBuffer::new(WindowDimensions::new(3, 2));
        let colour = Colour { r: 1, g: 2, b: 3 };

        buffer.set_pixel(2, 1, colour).unwrap();

        assert_eq!(&buffer.buffer()[15..18], &[1, 2, 3]);
        assert_eq!(buffer.pixel(2, 1), Some(colour));
    }

    #[test]
    fn set_pixel_outside_bounds_fails() {
        let mut buffer = PixelBuffer::new(WindowDimensions::new(3, 2));

        let result = buffer.set_pixel(3, 0, Colour::BLACK);

        assert!(matches!(
            result,
            Err(PixelBufferError::PixelOutsideBounds { x: 3, y: 0, .. })
        ));
        assert_eq!(buffer.pixel(0, 2), None);
    }

    #[test]
    fn from_colours_packs_rgb_triplets() {
        let colours = [Colour { r: 9, g: 8, b: 7 }, Colour { r: 6, g: 5, b: 4 }];

        let buffer = PixelBuffer::from_colours(WindowDimensions::new(2, 1), &colours).unwrap();

        assert_eq!(buffer.buffer(), &[9, 8, 7, 6, 5, 4]);
    }
}

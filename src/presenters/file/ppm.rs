use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes binary (P6) PPM images, creating missing parent directories.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(File::create(filepath)?);
        write_ppm(&mut file, buffer)?;
        file.flush()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm(out: &mut impl Write, buffer: &PixelBuffer) -> std::io::Result<()> {
    let dimensions = buffer.dimensions();

    // P6: binary RGB, then width, height and the maximum channel value
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", dimensions.width, dimensions.height)?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::window_dimensions::WindowDimensions;

    #[test]
    fn header_then_raw_rgb() {
        let mut buffer = PixelBuffer::new(WindowDimensions::new(2, 1));
        buffer.set_pixel(1, 0, Colour { r: 255, g: 128, b: 1 }).unwrap();
        let mut out = Vec::new();

        write_ppm(&mut out, &buffer).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 255, 128, 1]);
        assert_eq!(out, expected);
    }
}

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6) writer. Rows are written top-down, so the image appears upright.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(File::create(filepath)?);
        write_ppm(&mut file, buffer)?;
        file.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm<W: Write>(out: &mut W, buffer: &PixelBuffer) -> std::io::Result<()> {
    let size = buffer.size();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", size.width(), size.height())?;
    writeln!(out, "255")?;

    for row in buffer.rows_top_down() {
        let bytes: Vec<u8> = row.iter().flat_map(|colour| colour.to_rgb8()).collect();
        out.write_all(&bytes)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::screen_size::ScreenSize;

    fn two_row_buffer() -> PixelBuffer {
        let size = ScreenSize::new(2, 2).unwrap();
        let data = vec![
            Colour::BLACK,
            Colour::grey(0.5), // bottom row
            Colour::WHITE,
            Colour {
                r: 1.0,
                g: 0.0,
                b: 0.0,
                a: 1.0,
            }, // top row
        ];

        PixelBuffer::from_data(size, data).unwrap()
    }

    #[test]
    fn test_write_ppm_header_and_top_down_rows() {
        let mut out = Vec::new();

        write_ppm(&mut out, &two_row_buffer()).unwrap();

        let mut expected = b"P6\n2 2\n255\n".to_vec();
        expected.extend_from_slice(&[255, 255, 255, 255, 0, 0]);
        expected.extend_from_slice(&[0, 0, 0, 128, 128, 128]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("fractal_viewer_ppm_{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");

        PpmFilePresenter::new().present(&two_row_buffer(), &path).unwrap();
        let written = std::fs::read(&path).unwrap();

        assert!(written.starts_with(b"P6\n2 2\n255\n"));
        assert_eq!(written.len(), 11 + 12);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

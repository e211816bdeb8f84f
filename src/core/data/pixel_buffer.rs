use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        size: ScreenSize,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "screen size {} does not match buffer size {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of screen bounds width:{}, height:{}",
                    pixel.x,
                    pixel.y,
                    size.width(),
                    size.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<Colour>;

/// Row-major colour buffer. Row 0 holds the bottom of the view (`y_min`),
/// so top-down consumers walk it with [`PixelBuffer::rows_top_down`].
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: ScreenSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(size: ScreenSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_size = size.pixel_count();

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> ScreenSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(self.buffer[index])
    }

    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Colour]> {
        self.buffer.chunks_exact(self.size.width() as usize).rev()
    }

    /// 8-bit RGBA bytes in top-down row order.
    #[must_use]
    pub fn to_rgba8_top_down(&self) -> Vec<u8> {
        self.rows_top_down()
            .flat_map(|row| row.iter().flat_map(|colour| colour.to_rgba8()))
            .collect()
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.size.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        Ok(pixel.y as usize * self.size.width() as usize + pixel.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_size(width: u32, height: u32) -> ScreenSize {
        ScreenSize::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let size = create_size(2, 1);
        let data = vec![Colour::WHITE, Colour::grey(0.5)];

        let buffer = PixelBuffer::from_data(size, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let size = create_size(2, 2);

        let result = PixelBuffer::from_data(size, vec![Colour::BLACK; 3]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 4,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let size = create_size(2, 2);

        let result = PixelBuffer::from_data(size, vec![Colour::BLACK; 8]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 4,
                buffer_size: 8
            }
        );
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let size = create_size(3, 3);
        let grey = Colour::grey(0.75);
        let mut data = vec![Colour::BLACK; 9];
        data[7] = grey;
        let buffer = PixelBuffer::from_data(size, data).unwrap();

        assert_eq!(buffer.size(), size);
        assert_eq!(buffer.buffer_size(), 9);
        assert_eq!(buffer.pixel(Point { x: 1, y: 2 }).unwrap(), grey);
        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let size = create_size(2, 2);
        let buffer = PixelBuffer::from_data(size, vec![Colour::BLACK; 4]).unwrap();

        assert_eq!(
            buffer.pixel(Point { x: 0, y: 2 }),
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 0, y: 2 },
                size
            })
        );
    }

    #[test]
    fn test_rows_top_down_reverses_row_order() {
        let size = create_size(2, 3);
        let data = vec![
            Colour::grey(0.0),
            Colour::grey(0.0), // row 0, bottom
            Colour::grey(0.5),
            Colour::grey(0.5),
            Colour::grey(1.0),
            Colour::grey(1.0), // row 2, top
        ];
        let buffer = PixelBuffer::from_data(size, data).unwrap();

        let rows: Vec<&[Colour]> = buffer.rows_top_down().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], &[Colour::grey(1.0), Colour::grey(1.0)]);
        assert_eq!(rows[2], &[Colour::grey(0.0), Colour::grey(0.0)]);
    }

    #[test]
    fn test_to_rgba8_top_down() {
        let size = create_size(1, 2);
        let buffer = PixelBuffer::from_data(size, vec![Colour::BLACK, Colour::WHITE]).unwrap();

        assert_eq!(
            buffer.to_rgba8_top_down(),
            vec![255, 255, 255, 255, 0, 0, 0, 255]
        );
    }
}

//! RGBA pixel storage and borrowed cell views.

use crate::error::{GlyphError, Result};

/// Bytes per RGBA sample.
const CHANNELS: usize = 4;

/// A fully decoded RGBA8 image, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap a raw RGBA byte vector.
    ///
    /// `data` must hold exactly `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .unwrap_or(usize::MAX);

        if data.len() != expected {
            return Err(GlyphError::BufferSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer where every pixel is `rgba`.
    #[must_use]
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let data = rgba.iter().copied().cycle().take(count * CHANNELS).collect();
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Sample at `(x, y)`. Panics if the coordinate is outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = self.offset(x, y);
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]
    }

    /// Overwrite the sample at `(x, y)`. Panics if the coordinate is outside the buffer.
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let offset = self.offset(x, y);
        self.data[offset..offset + CHANNELS].copy_from_slice(&rgba);
    }

    /// Fill the rectangle at `(x, y)` of size `width x height`, clipped to the buffer.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: [u8; 4]) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for py in y..y_end {
            for px in x..x_end {
                self.put_pixel(px, py, rgba);
            }
        }
    }

    /// Borrow the `width x height` block at `(x, y)`.
    ///
    /// Returns `None` unless the whole block lies inside the buffer.
    pub fn block(&self, x: u32, y: u32, width: u32, height: u32) -> Option<SubBlock<'_>> {
        let fits_x = u64::from(x) + u64::from(width) <= u64::from(self.width);
        let fits_y = u64::from(y) + u64::from(height) <= u64::from(self.height);
        (fits_x && fits_y).then_some(SubBlock {
            buffer: self,
            x,
            y,
            width,
            height,
        })
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

impl From<image::RgbaImage> for PixelBuffer {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

/// A borrowed, in-bounds view of one grid cell.
#[derive(Debug, Clone, Copy)]
pub struct SubBlock<'a> {
    buffer: &'a PixelBuffer,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl SubBlock<'_> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Top-left corner in buffer coordinates.
    pub fn origin(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Sample at `(col, row)` relative to the block's corner.
    pub fn pixel(&self, col: u32, row: u32) -> [u8; 4] {
        debug_assert!(col < self.width && row < self.height);
        self.buffer.pixel(self.x + col, self.y + row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_rejects_wrong_length() {
        let err = PixelBuffer::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            GlyphError::BufferSize {
                expected: 16,
                actual: 15,
                ..
            }
        ));
    }

    #[test]
    fn pixel_reads_row_major() {
        let data: Vec<u8> = (0..24).collect();
        let buf = PixelBuffer::from_rgba(3, 2, data).unwrap();
        assert_eq!(buf.pixel(0, 0), [0, 1, 2, 3]);
        assert_eq!(buf.pixel(2, 0), [8, 9, 10, 11]);
        assert_eq!(buf.pixel(0, 1), [12, 13, 14, 15]);
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut buf = PixelBuffer::filled(4, 4, [255, 255, 255, 255]);
        buf.fill_rect(2, 2, 10, 10, [0, 0, 0, 255]);
        assert_eq!(buf.pixel(1, 1), [255, 255, 255, 255]);
        assert_eq!(buf.pixel(3, 3), [0, 0, 0, 255]);
    }

    #[test]
    fn block_requires_full_containment() {
        let buf = PixelBuffer::filled(10, 8, [0, 0, 0, 255]);
        assert!(buf.block(5, 0, 5, 8).is_some());
        assert!(buf.block(6, 0, 5, 8).is_none());
        assert!(buf.block(0, 1, 5, 8).is_none());
        assert!(buf.block(u32::MAX, 0, 5, 8).is_none());
    }

    #[test]
    fn block_pixel_is_relative_to_origin() {
        let mut buf = PixelBuffer::filled(10, 10, [255, 255, 255, 255]);
        buf.put_pixel(6, 3, [1, 2, 3, 4]);
        let block = buf.block(5, 2, 5, 8).unwrap();
        assert_eq!(block.origin(), (5, 2));
        assert_eq!(block.pixel(1, 1), [1, 2, 3, 4]);
    }

    #[test]
    fn converts_from_rgba_image() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([9, 8, 7, 6]));
        let buf = PixelBuffer::from(img);
        assert_eq!((buf.width(), buf.height()), (3, 2));
        assert_eq!(buf.pixel(2, 1), [9, 8, 7, 6]);
    }
}

//! 1-bit packing of a single cell.
//!
//! Each pixel row becomes one byte. Column 0 always lands on bit 7 (MSB), so
//! cells narrower than 8 pixels leave their low bits clear:
//!
//! ```text
//! width 5:  b7 b6 b5 b4 b3  0  0  0
//!           c0 c1 c2 c3 c4
//! ```

use super::buffer::SubBlock;

/// Widest cell a single byte per row can hold.
pub const MAX_CELL_WIDTH: u32 = 8;

/// Encodes cells against a fixed brightness threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphEncoder {
    threshold: u8,
}

impl GlyphEncoder {
    #[must_use]
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Pack `block` into `block.height()` bytes, MSB-first and left-aligned.
    ///
    /// Columns past [`MAX_CELL_WIDTH`] are never read.
    pub fn encode(&self, block: &SubBlock<'_>) -> Vec<u8> {
        let columns = block.width().min(MAX_CELL_WIDTH);

        (0..block.height())
            .map(|y| {
                (0..columns)
                    .filter(|&x| is_ink(block.pixel(x, y), self.threshold))
                    .fold(0u8, |byte, x| byte | (0x80u8 >> x))
            })
            .collect()
    }
}

/// A pixel is ink when the unweighted RGB mean is strictly below `threshold`.
///
/// Compared as `r + g + b < 3 * threshold` so no division or rounding is involved.
/// Alpha is ignored.
pub fn is_ink([r, g, b, _]: [u8; 4], threshold: u8) -> bool {
    let sum = u16::from(r) + u16::from(g) + u16::from(b);
    sum < u16::from(threshold) * 3
}

//! Glyph extraction from a font grid image
//!
//! Pipeline:
//! - [`GridSampler`] walks the grid row-major and yields in-bounds cells
//! - [`GlyphEncoder`] packs each cell into one byte per pixel row
//! - The ordered [`Glyph`] list is collected as an [`ExtractionResult`]
//!
//! # Example
//!
//! ```rust
//! use glyphgrid::extract::{extract, GridConfig, PixelBuffer};
//!
//! let mut sheet = PixelBuffer::filled(80, 128, [255, 255, 255, 255]);
//! sheet.fill_rect(0, 0, 5, 8, [0, 0, 0, 255]);
//!
//! let result = extract(&sheet, &GridConfig::default()).unwrap();
//! assert_eq!(result.glyphs[0].rows, vec![0xF8; 8]);
//! assert_eq!(result.glyphs[1].rows, vec![0x00; 8]);
//! ```

pub mod buffer;
pub mod encoder;
pub mod sampler;

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GlyphError, Result};

pub use buffer::{PixelBuffer, SubBlock};
pub use encoder::{GlyphEncoder, MAX_CELL_WIDTH};
pub use sampler::{GridSampler, SampledCell};

/// Grid geometry and threshold for one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub cells_per_row: u32,
    pub row_count: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub origin_x: u32,
    pub origin_y: u32,
    /// Horizontal gap between adjacent cells
    pub padding_x: u32,
    /// Vertical gap between adjacent rows
    pub padding_y: u32,
    /// Pixels with RGB mean strictly below this are ink
    pub threshold: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cells_per_row: 16,
            row_count: 16,
            cell_width: 5,
            cell_height: 8,
            origin_x: 0,
            origin_y: 0,
            padding_x: 0,
            padding_y: 0,
            threshold: 128,
        }
    }
}

impl GridConfig {
    /// Reject geometry the sampler and encoder cannot honor.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("cells_per_row", self.cells_per_row),
            ("row_count", self.row_count),
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(GlyphError::config(field, "positive", 0));
            }
        }

        if self.cell_width > MAX_CELL_WIDTH {
            return Err(GlyphError::config(
                "cell_width",
                "at most 8 (one byte per row)",
                i64::from(self.cell_width),
            ));
        }

        Ok(())
    }

    /// Number of grid positions, including ones that may fall outside the image.
    pub fn total_cells(&self) -> usize {
        (self.cells_per_row as usize).saturating_mul(self.row_count as usize)
    }

    /// Top-left pixel of the cell at `(row, col)`.
    pub fn cell_origin(&self, row: u32, col: u32) -> (u64, u64) {
        let step_x = u64::from(self.cell_width) + u64::from(self.padding_x);
        let step_y = u64::from(self.cell_height) + u64::from(self.padding_y);
        (
            u64::from(self.origin_x) + u64::from(col) * step_x,
            u64::from(self.origin_y) + u64::from(row) * step_y,
        )
    }
}

/// One extracted character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Row-major grid position, doubling as the character code
    pub index: usize,
    /// One byte per pixel row, MSB = leftmost column
    pub rows: Vec<u8>,
}

impl Glyph {
    /// Whether the pixel at `(col, row)` is ink.
    pub fn is_ink(&self, col: u32, row: usize) -> bool {
        col < MAX_CELL_WIDTH
            && self
                .rows
                .get(row)
                .is_some_and(|byte| byte & (0x80u8 >> col) != 0)
    }

    /// Printable ASCII character for this glyph's index, if any.
    pub fn ascii(&self) -> Option<char> {
        ascii_label(self.index)
    }
}

/// Printable ASCII character for `index` (32..=126), otherwise `None`.
pub fn ascii_label(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|code| (32..=126).contains(code))
        .map(char::from)
}

/// Ordered glyphs from one run, plus the indices that were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Ascending by index, with gaps where cells were skipped
    pub glyphs: Vec<Glyph>,
    /// Indices whose cell fell outside the image, as ascending half-open ranges
    pub skipped: Vec<Range<usize>>,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl ExtractionResult {
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Number of grid cells that fell outside the image.
    pub fn skipped_count(&self) -> usize {
        self.skipped.iter().map(|r| r.end - r.start).sum()
    }

    /// Look up a glyph by grid index.
    pub fn get(&self, index: usize) -> Option<&Glyph> {
        self.glyphs
            .binary_search_by_key(&index, |g| g.index)
            .ok()
            .map(|pos| &self.glyphs[pos])
    }
}

/// Run the full extraction over `buffer`.
///
/// Fails only on invalid configuration, before any cell is sampled.
pub fn extract(buffer: &PixelBuffer, config: &GridConfig) -> Result<ExtractionResult> {
    config.validate()?;

    let encoder = GlyphEncoder::new(config.threshold);
    let sampler = GridSampler::new(buffer, config);
    let skipped = sampler.skipped();

    let glyphs: Vec<Glyph> = sampler
        .map(|cell| Glyph {
            index: cell.index,
            rows: encoder.encode(&cell.block),
        })
        .collect();

    let result = ExtractionResult {
        glyphs,
        skipped,
        cell_width: config.cell_width,
        cell_height: config.cell_height,
    };
    debug!(
        "Extracted {} glyphs from {}x{} image ({} cells skipped)",
        result.len(),
        buffer.width(),
        buffer.height(),
        result.skipped_count()
    );
    Ok(result)
}

//! Row-major enumeration of grid cells.
//!
//! A cell fits when `origin + k * step + size <= extent`, which is monotonic
//! in `k` along each axis. The in-bounds cells therefore form a rectangle of
//! `fit_rows x fit_cols` at the top-left of the grid, and everything else is
//! skipped without being visited.

use std::ops::Range;

use tracing::trace;

use super::buffer::{PixelBuffer, SubBlock};
use super::GridConfig;

/// One in-bounds cell produced by [`GridSampler`].
#[derive(Debug, Clone, Copy)]
pub struct SampledCell<'a> {
    /// Row-major grid position (`row * cells_per_row + col`).
    pub index: usize,
    pub row: u32,
    pub col: u32,
    pub block: SubBlock<'a>,
}

/// Lazily walks the grid, yielding only cells that fit inside the image.
///
/// Out-of-bounds cells are skipped silently but still consume their index,
/// so downstream indices keep matching grid positions.
pub struct GridSampler<'a> {
    buffer: &'a PixelBuffer,
    config: &'a GridConfig,
    fit_cols: u32,
    fit_rows: u32,
    row: u32,
    col: u32,
}

impl<'a> GridSampler<'a> {
    pub fn new(buffer: &'a PixelBuffer, config: &'a GridConfig) -> Self {
        let fit_cols = fitting(
            config.origin_x,
            config.cell_width,
            config.padding_x,
            buffer.width(),
            config.cells_per_row,
        );
        let fit_rows = fitting(
            config.origin_y,
            config.cell_height,
            config.padding_y,
            buffer.height(),
            config.row_count,
        );
        trace!(fit_cols, fit_rows, "in-bounds grid extent");

        Self {
            buffer,
            config,
            fit_cols,
            fit_rows,
            row: 0,
            col: 0,
        }
    }

    /// Columns (per row) and rows whose cells lie inside the image.
    pub fn extent(&self) -> (u32, u32) {
        (self.fit_cols, self.fit_rows)
    }

    /// Skipped indices as ascending, non-overlapping half-open ranges.
    ///
    /// Holds at most one range per in-bounds row plus the tail.
    pub fn skipped(&self) -> Vec<Range<usize>> {
        let total = self.config.total_cells();
        let per_row = self.config.cells_per_row as usize;
        let fit_cols = self.fit_cols as usize;
        let fit_rows = if fit_cols == 0 {
            0
        } else {
            self.fit_rows as usize
        };

        let mut ranges: Vec<Range<usize>> = Vec::new();
        if fit_cols < per_row {
            for row in 0..fit_rows {
                ranges.push(row * per_row + fit_cols..(row + 1) * per_row);
            }
        }

        let tail = fit_rows * per_row;
        if tail < total {
            match ranges.last_mut() {
                Some(last) if last.end == tail => last.end = total,
                _ => ranges.push(tail..total),
            }
        }
        ranges
    }

    fn remaining(&self) -> usize {
        if self.fit_cols == 0 || self.row >= self.fit_rows {
            return 0;
        }
        let rows_left = (self.fit_rows - self.row) as usize;
        rows_left * self.fit_cols as usize - self.col as usize
    }
}

/// How many of `count` cells starting at `origin` fit within `extent`.
fn fitting(origin: u32, size: u32, padding: u32, extent: u32, count: u32) -> u32 {
    let (origin, size, extent) = (u64::from(origin), u64::from(size), u64::from(extent));
    if size == 0 || origin + size > extent {
        return 0;
    }
    let step = size + u64::from(padding);
    let fit = (extent - origin - size) / step + 1;
    u32::try_from(fit).map_or(count, |fit| fit.min(count))
}

impl<'a> Iterator for GridSampler<'a> {
    type Item = SampledCell<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        let (row, col) = (self.row, self.col);
        self.col += 1;
        if self.col == self.fit_cols {
            self.col = 0;
            self.row += 1;
        }

        let cfg = self.config;
        let index = usize::try_from(
            u64::from(row) * u64::from(cfg.cells_per_row) + u64::from(col),
        )
        .ok()?;
        let (x, y) = cfg.cell_origin(row, col);
        let block = self.buffer.block(
            u32::try_from(x).ok()?,
            u32::try_from(y).ok()?,
            cfg.cell_width,
            cfg.cell_height,
        )?;

        Some(SampledCell {
            index,
            row,
            col,
            block,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

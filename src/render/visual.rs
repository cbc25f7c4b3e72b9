//! Two-glyph text visualization of extracted bitmaps.

use std::fmt::Write as FmtWrite;

use super::RenderOptions;
use crate::error::Result;
use crate::extract::{ExtractionResult, Glyph, MAX_CELL_WIDTH};

/// Gap between adjacent glyph columns.
const COLUMN_GAP: &str = "  ";

/// Draw every glyph, `glyphs_per_line` to a band, each under its label.
pub fn render(result: &ExtractionResult, options: &RenderOptions) -> Result<String> {
    let mut out = String::new();
    let per_line = options.glyphs_per_line.max(1);
    let width = result.cell_width.min(MAX_CELL_WIDTH);

    for (band_no, band) in result.glyphs.chunks(per_line).enumerate() {
        if band_no > 0 {
            writeln!(out)?;
        }

        let labels: Vec<String> = band.iter().map(label).collect();
        let column = labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max(width as usize);

        write_line(&mut out, &labels, column)?;

        for row in 0..result.cell_height as usize {
            let cells: Vec<String> = band
                .iter()
                .map(|glyph| glyph_row(glyph, row, width, options))
                .collect();
            write_line(&mut out, &cells, column)?;
        }
    }

    Ok(out)
}

/// `Char 41 'A'`
pub fn label(glyph: &Glyph) -> String {
    match glyph.ascii() {
        Some(c) => format!("Char {:02x} '{c}'", glyph.index),
        None => format!("Char {:02x}", glyph.index),
    }
}

/// One pixel row, bit 7 first, `width` characters long.
pub fn glyph_row(glyph: &Glyph, row: usize, width: u32, options: &RenderOptions) -> String {
    (0..width)
        .map(|col| {
            if glyph.is_ink(col, row) {
                options.ink
            } else {
                options.background
            }
        })
        .collect()
}

fn write_line(out: &mut String, cells: &[String], column: usize) -> std::fmt::Result {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        write!(line, "{cell:<column$}")?;
    }
    writeln!(out, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(index: usize, rows: &[u8]) -> Glyph {
        Glyph {
            index,
            rows: rows.to_vec(),
        }
    }

    fn result(glyphs: Vec<Glyph>, width: u32, height: u32) -> ExtractionResult {
        ExtractionResult {
            glyphs,
            skipped: vec![],
            cell_width: width,
            cell_height: height,
        }
    }

    #[test]
    fn labels_use_hex_and_printable_char() {
        assert_eq!(label(&glyph(65, &[])), "Char 41 'A'");
        assert_eq!(label(&glyph(10, &[])), "Char 0a");
        assert_eq!(label(&glyph(127, &[])), "Char 7f");
    }

    #[test]
    fn row_inspects_only_width_bits() {
        let opts = RenderOptions::default();
        let g = glyph(0, &[0xFF]);
        assert_eq!(glyph_row(&g, 0, 5, &opts), "█████");
        let g = glyph(0, &[0x88]);
        assert_eq!(glyph_row(&g, 0, 5, &opts), "█···█");
        assert_eq!(glyph_row(&g, 0, 8, &opts), "█···█···");
    }

    #[test]
    fn glyphs_sit_side_by_side_under_labels() {
        let r = result(vec![glyph(65, &[0x20, 0x50]), glyph(0, &[0xF8, 0x00])], 5, 2);
        let text = render(&r, &RenderOptions::default()).unwrap();
        assert_eq!(
            text,
            "Char 41 'A'  Char 00\n\
             ··█··        █████\n\
             ·█·█·        ·····\n"
        );
    }

    #[test]
    fn wraps_after_glyphs_per_line() {
        let glyphs = (0..5).map(|i| glyph(i, &[0x80])).collect();
        let opts = RenderOptions {
            glyphs_per_line: 2,
            ..RenderOptions::default()
        };
        let text = render(&result(glyphs, 5, 1), &opts).unwrap();
        let bands: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(bands.len(), 3);
        assert!(bands[0].starts_with("Char 00  Char 01"));
        assert!(bands[2].starts_with("Char 04"));
        assert!(!bands[2].contains("Char 05"));
    }

    #[test]
    fn custom_ink_and_background() {
        let opts = RenderOptions {
            ink: '#',
            background: '.',
            ..RenderOptions::default()
        };
        let text = render(&result(vec![glyph(1, &[0xA0])], 3, 1), &opts).unwrap();
        assert_eq!(text, "Char 01\n#.#\n");
    }

    #[test]
    fn empty_result_renders_nothing() {
        let text = render(&result(vec![], 5, 8), &RenderOptions::default()).unwrap();
        assert!(text.is_empty());
    }
}

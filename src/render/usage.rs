//! Drawing helper emitted alongside the listing.
//!
//! The helper is written in the listing's language, takes a character code,
//! and tests bit `7 - col` of each row byte. When skipped cells leave gaps,
//! array positions no longer equal character codes, so a code table is emitted
//! next to the helper and searched first.

use std::fmt::Write as FmtWrite;

use super::naming::{compose, NameKind};
use super::Language;
use crate::error::Result;
use crate::extract::{ExtractionResult, MAX_CELL_WIDTH};

const CODES_PER_LINE: usize = 16;

/// Render a drawing helper for the table `symbol` in `language`.
pub fn render(result: &ExtractionResult, language: Language, symbol: &str) -> Result<String> {
    let width = result.cell_width.min(MAX_CELL_WIDTH);
    let height = result.cell_height;
    let count = result.glyphs.len();
    let draw = compose(language, NameKind::Function, &["draw", symbol]);
    let codes = has_gaps(result).then(|| {
        (
            compose(language, NameKind::Table, &[symbol, "codes"]),
            compose(language, NameKind::Function, &[symbol, "entry"]),
            code_lines(result),
        )
    });
    let mut out = String::new();

    match language {
        Language::Rust => {
            let lookup = if let Some((table, entry, lines)) = &codes {
                writeln!(out, "/// Character code of each `{symbol}` entry.")?;
                writeln!(out, "pub const {table}: [usize; {count}] = [")?;
                for line in lines {
                    writeln!(out, "    {line},")?;
                }
                writeln!(out, "];")?;
                writeln!(out)?;
                writeln!(out, "/// Position of character `code` in `{symbol}`, if it was extracted.")?;
                writeln!(out, "pub fn {entry}(code: usize) -> Option<usize> {{")?;
                writeln!(out, "    {table}.binary_search(&code).ok()")?;
                writeln!(out, "}}")?;
                writeln!(out)?;
                format!("{entry}(code).map(|entry| &{symbol}[entry])")
            } else {
                format!("{symbol}.get(code)")
            };

            writeln!(
                out,
                "/// Call `plot` for every ink pixel of character `code` drawn at `(x, y)`."
            )?;
            writeln!(
                out,
                "pub fn {draw}(code: usize, x: i32, y: i32, mut plot: impl FnMut(i32, i32)) {{"
            )?;
            writeln!(out, "    let Some(rows) = {lookup} else {{")?;
            writeln!(out, "        return;")?;
            writeln!(out, "    }};")?;
            writeln!(out, "    for (row, bits) in (0i32..).zip(rows.iter()) {{")?;
            writeln!(out, "        for col in 0..{width} {{")?;
            writeln!(out, "            if bits & (0x80u8 >> col) != 0 {{")?;
            writeln!(out, "                plot(x + col, y + row);")?;
            writeln!(out, "            }}")?;
            writeln!(out, "        }}")?;
            writeln!(out, "    }}")?;
            writeln!(out, "}}")?;
        }
        Language::C => {
            let position = if let Some((table, entry, lines)) = &codes {
                writeln!(out, "/* Character code of each {symbol} entry. */")?;
                writeln!(out, "const size_t {table}[{count}] = {{")?;
                for line in lines {
                    writeln!(out, "    {line},")?;
                }
                writeln!(out, "}};")?;
                writeln!(out)?;
                writeln!(out, "/* Position of character code in {symbol}, or -1 if it was not extracted. */")?;
                writeln!(out, "long {entry}(size_t code) {{")?;
                writeln!(out, "    for (size_t i = 0; i < {count}; i++) {{")?;
                writeln!(out, "        if ({table}[i] == code) {{")?;
                writeln!(out, "            return (long)i;")?;
                writeln!(out, "        }}")?;
                writeln!(out, "    }}")?;
                writeln!(out, "    return -1;")?;
                writeln!(out, "}}")?;
                writeln!(out)?;
                Some(entry.clone())
            } else {
                None
            };

            writeln!(
                out,
                "/* Call plot() for every ink pixel of character code drawn at (x, y). */"
            )?;
            writeln!(
                out,
                "void {draw}(size_t code, int x, int y, void (*plot)(int, int)) {{"
            )?;
            match &position {
                Some(entry) => {
                    writeln!(out, "    long entry = {entry}(code);")?;
                    writeln!(out, "    if (entry < 0) {{")?;
                    writeln!(out, "        return;")?;
                    writeln!(out, "    }}")?;
                    writeln!(out, "    const uint8_t *rows = {symbol}[entry];")?;
                }
                None => {
                    writeln!(out, "    if (code >= {count}) {{")?;
                    writeln!(out, "        return;")?;
                    writeln!(out, "    }}")?;
                    writeln!(out, "    const uint8_t *rows = {symbol}[code];")?;
                }
            }
            writeln!(out, "    for (int row = 0; row < {height}; row++) {{")?;
            writeln!(out, "        for (int col = 0; col < {width}; col++) {{")?;
            writeln!(out, "            if (rows[row] & (0x80 >> col)) {{")?;
            writeln!(out, "                plot(x + col, y + row);")?;
            writeln!(out, "            }}")?;
            writeln!(out, "        }}")?;
            writeln!(out, "    }}")?;
            writeln!(out, "}}")?;
        }
        Language::JavaScript => {
            if let Some((table, _, lines)) = &codes {
                writeln!(out, "// Character code of each {symbol} entry.")?;
                writeln!(out, "const {table} = [")?;
                for line in lines {
                    writeln!(out, "  {line},")?;
                }
                writeln!(out, "];")?;
                writeln!(out)?;
            }

            writeln!(
                out,
                "// Fill every ink pixel of character code on a 2D canvas context."
            )?;
            writeln!(
                out,
                "function {draw}(ctx, code, x, y, color = '#000000', scale = 1) {{"
            )?;
            match &codes {
                Some((table, _, _)) => {
                    writeln!(out, "  const rows = {symbol}[{table}.indexOf(code)];")?;
                }
                None => writeln!(out, "  const rows = {symbol}[code];")?,
            }
            writeln!(out, "  if (rows === undefined) return;")?;
            writeln!(out, "  ctx.fillStyle = color;")?;
            writeln!(out, "  for (let row = 0; row < {height}; row++) {{")?;
            writeln!(out, "    for (let col = 0; col < {width}; col++) {{")?;
            writeln!(out, "      if (rows[row] & (0x80 >> col)) {{")?;
            writeln!(
                out,
                "        ctx.fillRect(x + col * scale, y + row * scale, scale, scale);"
            )?;
            writeln!(out, "      }}")?;
            writeln!(out, "    }}")?;
            writeln!(out, "  }}")?;
            writeln!(out, "}}")?;
        }
    }

    Ok(out)
}

/// Whether some glyph sits at an array position other than its code.
fn has_gaps(result: &ExtractionResult) -> bool {
    result
        .glyphs
        .iter()
        .enumerate()
        .any(|(pos, glyph)| pos != glyph.index)
}

fn code_lines(result: &ExtractionResult) -> Vec<String> {
    result
        .glyphs
        .chunks(CODES_PER_LINE)
        .map(|chunk| {
            chunk
                .iter()
                .map(|g| g.index.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Glyph;

    fn result(width: u32, height: u32, indices: &[usize]) -> ExtractionResult {
        ExtractionResult {
            glyphs: indices
                .iter()
                .map(|&index| Glyph {
                    index,
                    rows: vec![0; height as usize],
                })
                .collect(),
            skipped: vec![],
            cell_width: width,
            cell_height: height,
        }
    }

    #[test]
    fn contiguous_rust_helper_indexes_by_code() {
        let text = render(&result(5, 8, &[0, 1, 2]), Language::Rust, "FONT_DATA").unwrap();
        assert!(text.contains(
            "pub fn draw_font_data(code: usize, x: i32, y: i32, mut plot: impl FnMut(i32, i32)) {"
        ));
        assert!(text.contains("let Some(rows) = FONT_DATA.get(code) else {"));
        assert!(text.contains("for col in 0..5 {"));
        assert!(!text.contains("FONT_DATA_CODES"));
    }

    #[test]
    fn skipped_column_emits_code_table() {
        // 4 columns of which the last is off the image: codes 0,1,2,4,5,6
        let text = render(&result(5, 8, &[0, 1, 2, 4, 5, 6]), Language::Rust, "FONT_DATA").unwrap();
        assert!(text.contains("pub const FONT_DATA_CODES: [usize; 6] = [\n    0, 1, 2, 4, 5, 6,\n];"));
        assert!(text.contains("pub fn font_data_entry(code: usize) -> Option<usize> {"));
        assert!(text.contains("FONT_DATA_CODES.binary_search(&code).ok()"));
        assert!(text.contains(
            "let Some(rows) = font_data_entry(code).map(|entry| &FONT_DATA[entry]) else {"
        ));
    }

    #[test]
    fn code_table_wraps_long_lines() {
        let indices: Vec<usize> = (0..40).filter(|i| i % 10 != 9).collect();
        let text = render(&result(5, 8, &indices), Language::Rust, "F").unwrap();
        assert!(text.contains("    0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13, 14, 15, 16,\n"));
        assert!(text.contains("    35, 36, 37, 38,\n];"));
    }

    #[test]
    fn c_helper_bakes_in_both_dimensions() {
        let text = render(&result(6, 12, &[0]), Language::C, "font").unwrap();
        assert!(text.contains("void draw_font(size_t code, int x, int y, void (*plot)(int, int)) {"));
        assert!(text.contains("if (code >= 1) {"));
        assert!(text.contains("row < 12"));
        assert!(text.contains("col < 6"));
        assert!(text.contains("const uint8_t *rows = font[code];"));
    }

    #[test]
    fn c_helper_with_gaps_searches_codes() {
        let text = render(&result(5, 8, &[32, 33, 65]), Language::C, "font").unwrap();
        assert!(text.contains("const size_t font_codes[3] = {\n    32, 33, 65,\n};"));
        assert!(text.contains("long font_entry(size_t code) {"));
        assert!(text.contains("long entry = font_entry(code);"));
        assert!(text.contains("const uint8_t *rows = font[entry];"));
    }

    #[test]
    fn javascript_helper_uses_canvas() {
        let text = render(&result(5, 8, &[0]), Language::JavaScript, "fontData").unwrap();
        assert!(text.contains("function drawFontData(ctx, code"));
        assert!(text.contains("const rows = fontData[code];"));
        assert!(text.contains("ctx.fillRect"));

        let gaps = render(&result(5, 8, &[1]), Language::JavaScript, "fontData").unwrap();
        assert!(gaps.contains("const fontDataCodes = [\n  1,\n];"));
        assert!(gaps.contains("const rows = fontData[fontDataCodes.indexOf(code)];"));
    }

    #[test]
    fn helper_names_follow_symbol() {
        let text = render(&result(5, 8, &[0]), Language::Rust, "FONT_DATA_BOLD").unwrap();
        assert!(text.contains("pub fn draw_font_data_bold("));
    }
}

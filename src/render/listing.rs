//! Source-code array listing of extracted glyphs.

use std::fmt::Write as FmtWrite;

use super::Language;
use crate::error::Result;
use crate::extract::{ExtractionResult, Glyph};

/// Render `result` as an array literal named `symbol` in `language`.
pub fn render(result: &ExtractionResult, language: Language, symbol: &str) -> Result<String> {
    let mut out = String::new();
    let count = result.glyphs.len();
    let height = result.cell_height;

    writeln!(
        out,
        "// {}x{} bitmap font: {count} glyphs, one byte per row, MSB = leftmost pixel",
        result.cell_width, height
    )?;

    let (open, close) = match language {
        Language::Rust => {
            writeln!(out, "pub const {symbol}: [[u8; {height}]; {count}] = [")?;
            ('[', "];")
        }
        Language::C => {
            writeln!(out, "const uint8_t {symbol}[{count}][{height}] = {{")?;
            ('{', "};")
        }
        Language::JavaScript => {
            writeln!(out, "const {symbol} = [")?;
            ('[', "];")
        }
    };

    let close_entry = if open == '[' { ']' } else { '}' };
    for glyph in &result.glyphs {
        writeln!(out, "    {open} // {}", annotation(glyph))?;
        writeln!(out, "        {}", hex_bytes(&glyph.rows))?;
        writeln!(out, "    {close_entry},")?;
    }

    writeln!(out, "{close}")?;
    Ok(out)
}

/// `Character 65 (0x41) 'A'`
pub fn annotation(glyph: &Glyph) -> String {
    let index = glyph.index;
    match glyph.ascii() {
        Some(c) => format!("Character {index} (0x{index:02x}) '{c}'"),
        None => format!("Character {index} (0x{index:02x})"),
    }
}

/// `0xf8, 0x00, ...`
pub fn hex_bytes(rows: &[u8]) -> String {
    rows.iter()
        .map(|b| format!("0x{b:02x}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(glyphs: Vec<Glyph>, height: u32) -> ExtractionResult {
        ExtractionResult {
            glyphs,
            skipped: vec![],
            cell_width: 5,
            cell_height: height,
        }
    }

    fn glyph(index: usize, rows: &[u8]) -> Glyph {
        Glyph {
            index,
            rows: rows.to_vec(),
        }
    }

    #[test]
    fn annotates_printable_ascii() {
        assert_eq!(annotation(&glyph(65, &[])), "Character 65 (0x41) 'A'");
        assert_eq!(annotation(&glyph(31, &[])), "Character 31 (0x1f)");
        assert_eq!(annotation(&glyph(127, &[])), "Character 127 (0x7f)");
        assert_eq!(annotation(&glyph(300, &[])), "Character 300 (0x12c)");
    }

    #[test]
    fn hex_bytes_are_two_digit_lowercase() {
        assert_eq!(hex_bytes(&[0x00, 0x0f, 0xf8]), "0x00, 0x0f, 0xf8");
    }

    #[test]
    fn rust_listing_declares_sized_array() {
        let r = result(vec![glyph(0, &[0xf8, 0xf8]), glyph(1, &[0, 0])], 2);
        let text = render(&r, Language::Rust, "FONT_DATA").unwrap();
        assert_eq!(
            text,
            "// 5x2 bitmap font: 2 glyphs, one byte per row, MSB = leftmost pixel\n\
             pub const FONT_DATA: [[u8; 2]; 2] = [\n    \
             [ // Character 0 (0x00)\n        \
             0xf8, 0xf8\n    \
             ],\n    \
             [ // Character 1 (0x01)\n        \
             0x00, 0x00\n    \
             ],\n\
             ];\n"
        );
    }

    #[test]
    fn c_listing_uses_braces() {
        let r = result(vec![glyph(66, &[0x80])], 1);
        let text = render(&r, Language::C, "font").unwrap();
        assert!(text.contains("const uint8_t font[1][1] = {\n"));
        assert!(text.contains("    { // Character 66 (0x42) 'B'\n"));
        assert!(text.contains("    },\n"));
        assert!(text.ends_with("};\n"));
    }

    #[test]
    fn javascript_listing_matches_plain_array() {
        let r = result(vec![glyph(32, &[0x00])], 1);
        let text = render(&r, Language::JavaScript, "fontData").unwrap();
        assert!(text.contains("const fontData = [\n"));
        assert!(text.contains("[ // Character 32 (0x20) ' '\n"));
    }

    #[test]
    fn one_entry_per_glyph_in_order() {
        let glyphs = vec![glyph(3, &[1]), glyph(7, &[2]), glyph(9, &[3])];
        let text = render(&result(glyphs, 1), Language::Rust, "F").unwrap();
        assert_eq!(text.matches("    [ //").count(), 3);
        let p3 = text.find("Character 3 ").unwrap();
        let p7 = text.find("Character 7 ").unwrap();
        let p9 = text.find("Character 9 ").unwrap();
        assert!(p3 < p7 && p7 < p9);
    }

    #[test]
    fn empty_result_is_still_valid_declaration() {
        let text = render(&result(vec![], 8), Language::Rust, "EMPTY").unwrap();
        assert!(text.contains("pub const EMPTY: [[u8; 8]; 0] = [\n];\n"));
    }
}

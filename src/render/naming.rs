//! Identifiers for generated declarations.
//!
//! Names are built from words so one base (a configured symbol, a file stem)
//! can be spelled in each language's convention: `FONT_DATA` and
//! `draw_font_data` in Rust, `font_data` in C, `fontData` and
//! `drawFontData` in JavaScript.

use super::Language;

/// What a generated name declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// A constant array
    Table,
    Function,
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
];

const JS_KEYWORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "import", "in", "instanceof", "let", "new", "null", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

fn keywords(language: Language) -> &'static [&'static str] {
    match language {
        Language::Rust => RUST_KEYWORDS,
        Language::C => C_KEYWORDS,
        Language::JavaScript => JS_KEYWORDS,
    }
}

/// Whether `name` can be declared as-is in `language`.
pub fn is_identifier(name: &str, language: Language) -> bool {
    let dollar = |c: char| language == Language::JavaScript && c == '$';
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_' || dollar(first))
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || dollar(c))
        && name != "_"
        && !keywords(language).contains(&name)
}

/// Join the words of `parts` into one `kind` name in `language`'s convention.
///
/// ```rust
/// use glyphgrid::render::naming::{compose, NameKind};
/// use glyphgrid::render::Language;
///
/// assert_eq!(compose(Language::Rust, NameKind::Table, &["FONT_DATA", "small-5x8"]), "FONT_DATA_SMALL_5X8");
/// assert_eq!(compose(Language::JavaScript, NameKind::Function, &["draw", "fontData"]), "drawFontData");
/// ```
pub fn compose(language: Language, kind: NameKind, parts: &[&str]) -> String {
    let mut words: Vec<String> = parts.iter().flat_map(|part| split_words(part)).collect();
    if words.is_empty() {
        words = split_words(language.default_symbol());
    }

    let mut name = match (language, kind) {
        (Language::Rust, NameKind::Table) => join_snake(&words, true),
        (Language::Rust | Language::C, _) => join_snake(&words, false),
        (Language::JavaScript, _) => join_camel(&words),
    };

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if keywords(language).contains(&name.as_str()) {
        name.push('_');
    }
    name
}

/// Split on non-alphanumerics and on lower-to-upper case changes.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut after_lower = false;

    for c in text.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            after_lower = false;
            continue;
        }
        if c.is_ascii_uppercase() && after_lower {
            words.push(std::mem::take(&mut current));
        }
        after_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn join_snake(words: &[String], upper: bool) -> String {
    words
        .iter()
        .map(|w| {
            if upper {
                w.to_ascii_uppercase()
            } else {
                w.to_ascii_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join("_")
}

fn join_camel(words: &[String]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        let lower = word.to_ascii_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

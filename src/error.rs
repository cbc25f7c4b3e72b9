//! Error types shared by extraction, rendering and image loading.

use std::path::PathBuf;

use thiserror::Error;

/// Glyph extraction errors
#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("Invalid configuration: {field} must be {requirement}, got {value}")]
    Configuration {
        field: &'static str,
        requirement: &'static str,
        value: i64,
    },

    #[error("Invalid configuration: symbol {symbol:?} is not a valid {language} identifier")]
    Symbol {
        symbol: String,
        language: &'static str,
    },

    #[error("No input image supplied")]
    NoInput,

    #[error("Pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Worker task failed: {0}")]
    Task(String),
}

impl GlyphError {
    pub(crate) fn config(field: &'static str, requirement: &'static str, value: i64) -> Self {
        Self::Configuration {
            field,
            requirement,
            value,
        }
    }
}

pub type Result<T> = std::result::Result<T, GlyphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_message_names_field_and_value() {
        let err = GlyphError::config("cell_width", "between 1 and 8", 9);
        assert_eq!(
            err.to_string(),
            "Invalid configuration: cell_width must be between 1 and 8, got 9"
        );
    }

    #[test]
    fn symbol_message_quotes_the_name() {
        let err = GlyphError::Symbol {
            symbol: "my font".into(),
            language: "Rust",
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: symbol \"my font\" is not a valid Rust identifier"
        );
    }

    #[test]
    fn buffer_size_message() {
        let err = GlyphError::BufferSize {
            width: 2,
            height: 2,
            expected: 16,
            actual: 12,
        };
        assert!(err.to_string().contains("expected 16 for 2x2"));
    }
}

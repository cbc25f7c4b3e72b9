//! Text renderings of an [`ExtractionResult`]
//!
//! Both renderings are pure formatting over the extracted bytes:
//! - **Listing**: a source-code array literal ready to paste into a program
//! - **Visualization**: glyphs drawn with two characters, banded side by side
//!
//! # Example
//!
//! ```rust
//! use glyphgrid::extract::{ExtractionResult, Glyph};
//! use glyphgrid::render::{RenderFormat, RenderOptions, Renderer};
//!
//! let result = ExtractionResult {
//!     glyphs: vec![Glyph { index: 65, rows: vec![0x80; 2] }],
//!     skipped: vec![],
//!     cell_width: 5,
//!     cell_height: 2,
//! };
//! let text = Renderer::new(RenderOptions::default())
//!     .render(&result, RenderFormat::Both)
//!     .unwrap();
//! assert!(text.contains("0x80, 0x80"));
//! assert!(text.contains("Char 41 'A'"));
//! ```

pub mod listing;
pub mod naming;
pub mod usage;
pub mod visual;

use serde::{Deserialize, Serialize};

use crate::error::{GlyphError, Result};
use crate::extract::ExtractionResult;

use naming::NameKind;

/// Which artifact(s) to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Code listing only
    Listing,
    /// Glyph visualization only
    Visualization,
    /// Listing, blank line, then visualization
    #[default]
    Both,
}

/// Target language for the code listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Rust,
    C,
    #[serde(alias = "js")]
    JavaScript,
}

impl Language {
    /// Conventional array name when none is configured
    #[must_use]
    pub fn default_symbol(&self) -> &'static str {
        match self {
            Self::Rust => "FONT_DATA",
            Self::C => "font_data",
            Self::JavaScript => "fontData",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rust => "Rust",
            Self::C => "C",
            Self::JavaScript => "JavaScript",
        }
    }
}

/// Presentation knobs. None of these change the extracted data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub language: Language,
    /// Array name; falls back to [`Language::default_symbol`]
    pub symbol: Option<String>,
    /// Glyphs per visualization band
    pub glyphs_per_line: usize,
    pub ink: char,
    pub background: char,
    /// Append a drawing helper after the listing
    pub usage: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language: Language::Rust,
            symbol: None,
            glyphs_per_line: 8,
            ink: '█',
            background: '·',
            usage: false,
        }
    }
}

impl RenderOptions {
    pub fn symbol(&self) -> &str {
        self.symbol
            .as_deref()
            .unwrap_or_else(|| self.language.default_symbol())
    }

    /// Reject a configured symbol the target language cannot declare.
    pub fn validate(&self) -> Result<()> {
        match &self.symbol {
            Some(symbol) if !naming::is_identifier(symbol, self.language) => {
                Err(GlyphError::Symbol {
                    symbol: symbol.clone(),
                    language: self.language.name(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Copy of these options whose table is named after `source`.
    ///
    /// Used when several sheets share one listing, so every table (and its
    /// drawing helper) gets a distinct declaration.
    #[must_use]
    pub fn for_source(&self, source: &str) -> Self {
        let symbol = naming::compose(self.language, NameKind::Table, &[self.symbol(), source]);
        Self {
            symbol: Some(symbol),
            ..self.clone()
        }
    }
}

/// Renders extraction results according to [`RenderOptions`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Produce the artifact(s) selected by `format`.
    pub fn render(&self, result: &ExtractionResult, format: RenderFormat) -> Result<String> {
        match format {
            RenderFormat::Listing => self.listing(result),
            RenderFormat::Visualization => self.visualization(result),
            RenderFormat::Both => {
                let mut out = self.listing(result)?;
                out.push('\n');
                out.push_str(&self.visualization(result)?);
                Ok(out)
            }
        }
    }

    /// Code listing, followed by the drawing helper when `usage` is set.
    pub fn listing(&self, result: &ExtractionResult) -> Result<String> {
        self.options.validate()?;
        let mut out = listing::render(result, self.options.language, self.options.symbol())?;
        if self.options.usage {
            out.push('\n');
            out.push_str(&usage::render(result, self.options.language, self.options.symbol())?);
        }
        Ok(out)
    }

    pub fn visualization(&self, result: &ExtractionResult) -> Result<String> {
        visual::render(result, &self.options)
    }
}

//! `glyphgrid` - Font grid image to 1-bit glyph tables
//!
//! # Features
//!
//! - **Grid sampling**: row-major cell walk with offset, padding and silent edge skipping
//! - **Bit packing**: one byte per pixel row, left-aligned, MSB = leftmost column
//! - **Listings**: Rust, C or JavaScript array literals with index/ASCII annotations
//! - **Visualization**: block-character previews of every glyph
//!
//! # Example
//!
//! ```rust,no_run
//! use glyphgrid::{extract, load_pixel_buffer, GridConfig, RenderFormat, Renderer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let sheet = load_pixel_buffer("font.png".as_ref())?;
//!     let result = extract(&sheet, &GridConfig::default())?;
//!     println!("{}", Renderer::default().render(&result, RenderFormat::Listing)?);
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod extract;
pub mod image_source;
pub mod render;

pub use batch::{extract_file, extract_paths, BatchItem};
pub use config::{load_config, ConfigFile, GridSettings, RenderSettings};
pub use error::{GlyphError, Result};
pub use extract::{extract, ExtractionResult, Glyph, GridConfig, PixelBuffer};
pub use image_source::{decode_bytes, load_pixel_buffer};
pub use render::{Language, RenderFormat, RenderOptions, Renderer};

/// Version of glyphgrid
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

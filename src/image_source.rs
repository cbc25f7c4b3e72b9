//! Image decoding into [`PixelBuffer`].
//!
//! `image::open` picks a decoder from the file extension, which fails when a
//! sheet saved as `.png` actually holds BMP or GIF bytes. Those files are
//! decoded a second time with the format sniffed from their content.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageError, ImageReader};
use tracing::{debug, warn};

use crate::error::{GlyphError, Result};
use crate::extract::PixelBuffer;

/// Decode the image at `path` to RGBA8.
///
/// An empty file counts as no input at all.
pub fn load_pixel_buffer(path: &Path) -> Result<PixelBuffer> {
    if std::fs::metadata(path)?.len() == 0 {
        return Err(GlyphError::NoInput);
    }
    let decode_error = |source: ImageError| GlyphError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let img = match image::open(path) {
        Ok(img) => img,
        Err(err @ (ImageError::Decoding(_) | ImageError::Unsupported(_))) => {
            warn!("{}: {err}, sniffing format from content", path.display());
            let bytes = std::fs::read(path)?;
            sniff_decode(&bytes).map_err(decode_error)?
        }
        Err(err) => return Err(decode_error(err)),
    };

    let (width, height) = img.dimensions();
    debug!("Decoded {} ({width}x{height})", path.display());
    Ok(into_buffer(img))
}

/// Decode an in-memory image, sniffing its format from the bytes.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelBuffer> {
    if bytes.is_empty() {
        return Err(GlyphError::NoInput);
    }

    let img = sniff_decode(bytes).map_err(|source| GlyphError::Decode {
        path: "<memory>".into(),
        source,
    })?;
    Ok(into_buffer(img))
}

fn sniff_decode(bytes: &[u8]) -> std::result::Result<DynamicImage, ImageError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()
}

fn into_buffer(img: DynamicImage) -> PixelBuffer {
    PixelBuffer::from(img.into_rgba8())
}

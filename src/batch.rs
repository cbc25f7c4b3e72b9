//! Extraction over many image files.
//!
//! Each file is decoded and extracted on the blocking pool, independently of
//! the others. Results come back in input order regardless of which worker
//! finished first.

use std::path::{Path, PathBuf};

use futures::future::join_all;
use tracing::info;

use crate::error::{GlyphError, Result};
use crate::extract::{extract, ExtractionResult, GridConfig};
use crate::image_source::load_pixel_buffer;

/// Extraction output for one input file.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub path: PathBuf,
    pub result: ExtractionResult,
}

/// Decode and extract a single file.
pub fn extract_file(path: &Path, config: &GridConfig) -> Result<ExtractionResult> {
    let buffer = load_pixel_buffer(path)?;
    extract(&buffer, config)
}

/// Extract every file in `paths`, concurrently.
///
/// Fails with [`GlyphError::NoInput`] when `paths` is empty, and with the first
/// error in input order if any file fails. No partial batch is returned.
pub async fn extract_paths(paths: &[PathBuf], config: GridConfig) -> Result<Vec<BatchItem>> {
    if paths.is_empty() {
        return Err(GlyphError::NoInput);
    }
    config.validate()?;

    info!("Extracting {} image(s)", paths.len());

    let tasks = paths.iter().cloned().map(|path| {
        tokio::task::spawn_blocking(move || {
            let result = extract_file(&path, &config)?;
            Ok::<_, GlyphError>(BatchItem { path, result })
        })
    });

    join_all(tasks)
        .await
        .into_iter()
        .map(|joined| {
            joined
                .map_err(|e| GlyphError::Task(e.to_string()))
                .and_then(|item| item)
        })
        .collect()
}

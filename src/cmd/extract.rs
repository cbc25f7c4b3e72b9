use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use glyphgrid::{extract_paths, RenderFormat, RenderOptions, Renderer};

use super::output::{output_text, source_header};
use crate::{GridArgs, RenderArgs};

pub async fn cmd_extract(
    images: &[PathBuf],
    grid: &GridArgs,
    render: &RenderArgs,
    format: RenderFormat,
    usage: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let (config, mut options) = super::resolve(grid, render)?;
    options.usage = usage;

    let start = std::time::Instant::now();
    let items = extract_paths(images, config)
        .await
        .context("extraction failed")?;
    let elapsed = start.elapsed();

    let with_headers = items.len() > 1;
    let mut used = HashSet::new();
    let mut text = String::new();

    for (i, item) in items.iter().enumerate() {
        eprintln!(
            "🔤 {}: {} glyphs, {} cells skipped",
            item.path.display(),
            item.result.len(),
            item.result.skipped_count()
        );

        if i > 0 {
            text.push('\n');
        }
        if with_headers {
            text.push_str(&source_header(&item.path));
        }
        let item_options = if with_headers {
            source_options(&options, &item.path, &mut used)
        } else {
            options.clone()
        };
        text.push_str(&Renderer::new(item_options).render(&item.result, format)?);
    }

    eprintln!(
        "✅ Extracted {} image(s) in {:.1}ms",
        items.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    output_text(&text, output)
}

/// Options naming the table after `path`, unique among those already `used`.
fn source_options(
    options: &RenderOptions,
    path: &Path,
    used: &mut HashSet<String>,
) -> RenderOptions {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut candidate = options.for_source(&stem);
    let mut n = 2;
    while !used.insert(candidate.symbol().to_string()) {
        candidate = options.for_source(&format!("{stem}_{n}"));
        n += 1;
    }
    candidate
}

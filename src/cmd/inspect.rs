use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use glyphgrid::{extract, load_pixel_buffer, GridConfig};

use crate::{GridArgs, RenderArgs};

/// Geometry check of a grid against one image
#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    image: &'a Path,
    width: u32,
    height: u32,
    grid: GridConfig,
    total_cells: usize,
    extracted: usize,
    skipped_cells: usize,
    /// Half-open `[start, end)` index ranges
    skipped: Vec<[usize; 2]>,
}

pub fn cmd_inspect(image: &Path, grid: &GridArgs, json: bool) -> Result<()> {
    let (config, _) = super::resolve(grid, &RenderArgs::default())?;

    let buffer = load_pixel_buffer(image)
        .with_context(|| format!("failed to load {}", image.display()))?;
    let result = extract(&buffer, &config)?;

    let report = InspectReport {
        image,
        width: buffer.width(),
        height: buffer.height(),
        grid: config,
        total_cells: config.total_cells(),
        extracted: result.len(),
        skipped_cells: result.skipped_count(),
        skipped: result.skipped.iter().map(|r| [r.start, r.end]).collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let (span_x, span_y) = config.cell_origin(config.row_count, config.cells_per_row);

    println!("🖼  Image: {} ({}x{})", image.display(), report.width, report.height);
    println!(
        "📐 Grid: {}x{} cells of {}x{} px, origin ({}, {}), padding ({}, {})",
        config.cells_per_row,
        config.row_count,
        config.cell_width,
        config.cell_height,
        config.origin_x,
        config.origin_y,
        config.padding_x,
        config.padding_y
    );
    println!("   Grid reaches: {span_x}x{span_y} px (origin plus trailing padding)");
    println!("   Threshold: {}", config.threshold);
    println!("✅ Extracted: {} / {}", report.extracted, report.total_cells);

    if report.skipped.is_empty() {
        println!("   No cells skipped");
    } else {
        let list: Vec<String> = report
            .skipped
            .iter()
            .map(|&[start, end]| {
                if end - start == 1 {
                    start.to_string()
                } else {
                    format!("{start}-{}", end - 1)
                }
            })
            .collect();
        println!("⚠️  Skipped {} cells: {}", report.skipped_cells, list.join(", "));
    }

    Ok(())
}

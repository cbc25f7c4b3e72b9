//! Configuration loaded from `~/.config/glyphgrid/config.toml`.
//!
//! Values are layered: CLI flags over the config file over built-in defaults.
//! Grid values stay as raw `i64` until [`GridSettings::resolve`] so that
//! negative or out-of-range input is reported instead of wrapping.
//!
//! ```toml
//! [grid]
//! cell_width = 6
//! cell_height = 12
//! threshold = 100
//!
//! [render]
//! language = "c"
//! glyphs_per_line = 16
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::GlyphError;
use crate::extract::GridConfig;
use crate::render::{Language, RenderOptions};

/// Grid options as written in a file or on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells_per_row: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
}

impl GridSettings {
    /// Fields set in `top` win over fields set in `self`.
    #[must_use]
    pub fn overlay(self, top: Self) -> Self {
        Self {
            cells_per_row: top.cells_per_row.or(self.cells_per_row),
            row_count: top.row_count.or(self.row_count),
            cell_width: top.cell_width.or(self.cell_width),
            cell_height: top.cell_height.or(self.cell_height),
            origin_x: top.origin_x.or(self.origin_x),
            origin_y: top.origin_y.or(self.origin_y),
            padding_x: top.padding_x.or(self.padding_x),
            padding_y: top.padding_y.or(self.padding_y),
            threshold: top.threshold.or(self.threshold),
        }
    }

    /// Fill gaps from [`GridConfig::default`] and validate.
    pub fn resolve(&self) -> std::result::Result<GridConfig, GlyphError> {
        let d = GridConfig::default();

        let config = GridConfig {
            cells_per_row: positive("cells_per_row", self.cells_per_row, d.cells_per_row)?,
            row_count: positive("row_count", self.row_count, d.row_count)?,
            cell_width: positive("cell_width", self.cell_width, d.cell_width)?,
            cell_height: positive("cell_height", self.cell_height, d.cell_height)?,
            origin_x: non_negative("origin_x", self.origin_x, d.origin_x)?,
            origin_y: non_negative("origin_y", self.origin_y, d.origin_y)?,
            padding_x: non_negative("padding_x", self.padding_x, d.padding_x)?,
            padding_y: non_negative("padding_y", self.padding_y, d.padding_y)?,
            threshold: match self.threshold {
                None => d.threshold,
                Some(v) => u8::try_from(v)
                    .map_err(|_| GlyphError::config("threshold", "between 0 and 255", v))?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Settings that reproduce `config` exactly.
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            cells_per_row: Some(config.cells_per_row.into()),
            row_count: Some(config.row_count.into()),
            cell_width: Some(config.cell_width.into()),
            cell_height: Some(config.cell_height.into()),
            origin_x: Some(config.origin_x.into()),
            origin_y: Some(config.origin_y.into()),
            padding_x: Some(config.padding_x.into()),
            padding_y: Some(config.padding_y.into()),
            threshold: Some(config.threshold.into()),
        }
    }
}

fn positive(
    field: &'static str,
    value: Option<i64>,
    default: u32,
) -> std::result::Result<u32, GlyphError> {
    match value {
        None => Ok(default),
        Some(v) if v >= 1 => {
            u32::try_from(v).map_err(|_| GlyphError::config(field, "at most 4294967295", v))
        }
        Some(v) => Err(GlyphError::config(field, "positive", v)),
    }
}

fn non_negative(
    field: &'static str,
    value: Option<i64>,
    default: u32,
) -> std::result::Result<u32, GlyphError> {
    match value {
        None => Ok(default),
        Some(v) if v >= 0 => {
            u32::try_from(v).map_err(|_| GlyphError::config(field, "at most 4294967295", v))
        }
        Some(v) => Err(GlyphError::config(field, "non-negative", v)),
    }
}

/// Render options as written in a file or on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyphs_per_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ink: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<char>,
}

impl RenderSettings {
    /// Fields set in `top` win over fields set in `self`.
    #[must_use]
    pub fn overlay(self, top: Self) -> Self {
        Self {
            language: top.language.or(self.language),
            symbol: top.symbol.or(self.symbol),
            glyphs_per_line: top.glyphs_per_line.or(self.glyphs_per_line),
            ink: top.ink.or(self.ink),
            background: top.background.or(self.background),
        }
    }

    /// Fill gaps from [`RenderOptions::default`] and check the symbol.
    pub fn resolve(&self) -> std::result::Result<RenderOptions, GlyphError> {
        let d = RenderOptions::default();
        let options = RenderOptions {
            language: self.language.unwrap_or(d.language),
            symbol: self.symbol.clone().or(d.symbol),
            glyphs_per_line: self.glyphs_per_line.unwrap_or(d.glyphs_per_line).max(1),
            ink: self.ink.unwrap_or(d.ink),
            background: self.background.unwrap_or(d.background),
            usage: d.usage,
        };

        options.validate()?;
        Ok(options)
    }
}

/// Top-level config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub render: RenderSettings,
}

impl ConfigFile {
    /// Parse config file contents.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid config TOML")
    }

    /// Fields set in `top` win over fields set in `self`.
    #[must_use]
    pub fn overlay(self, top: Self) -> Self {
        Self {
            grid: self.grid.overlay(top.grid),
            render: self.render.overlay(top.render),
        }
    }

    /// Fully populated file for a resolved grid and render setup.
    pub fn effective(grid: &GridConfig, render: &RenderOptions) -> Self {
        Self {
            grid: GridSettings::from_config(grid),
            render: RenderSettings {
                language: Some(render.language),
                symbol: Some(render.symbol().to_string()),
                glyphs_per_line: Some(render.glyphs_per_line),
                ink: Some(render.ink),
                background: Some(render.background),
            },
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }
}

/// Load the config file.
///
/// An explicit `path` must exist. Without one, the default location is used
/// and a missing file yields an empty config.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (config_path(), false),
    };

    if !required && !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
}

/// Return the path to the default config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glyphgrid")
        .join("config.toml")
}

pub mod config;
pub mod extract;
pub mod inspect;
pub mod output;

use anyhow::{Context, Result};

use glyphgrid::{load_config, ConfigFile, GridConfig, RenderOptions};

use crate::{GridArgs, RenderArgs};

/// Merge the config file under the CLI flags and validate the grid.
pub fn resolve(grid: &GridArgs, render: &RenderArgs) -> Result<(GridConfig, RenderOptions)> {
    let file = load_config(grid.config.as_deref())?;
    let cli = ConfigFile {
        grid: grid.settings(),
        render: render.settings(),
    };
    let merged = file.overlay(cli);

    let config = merged
        .grid
        .resolve()
        .context("invalid grid configuration")?;
    let options = merged
        .render
        .resolve()
        .context("invalid render configuration")?;
    Ok((config, options))
}

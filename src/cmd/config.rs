use anyhow::Result;

use glyphgrid::ConfigFile;

use crate::{GridArgs, RenderArgs};

pub fn cmd_config(grid: &GridArgs, render: &RenderArgs) -> Result<()> {
    let (config, options) = super::resolve(grid, render)?;
    print!("{}", ConfigFile::effective(&config, &options).to_toml()?);
    Ok(())
}

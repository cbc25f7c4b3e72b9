//! `glyphgrid` CLI - Turn font grid images into embeddable glyph tables

mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use glyphgrid::{GridSettings, Language, RenderFormat, RenderSettings};

#[derive(Parser)]
#[command(name = "glyphgrid")]
#[command(about = "Extract 1-bit glyph bitmaps from font grid images")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract glyph bitmaps as a code listing and visualization
    Extract {
        /// Font grid images (PNG, BMP, GIF)
        images: Vec<PathBuf>,

        #[command(flatten)]
        grid: GridArgs,

        #[command(flatten)]
        render: RenderArgs,

        /// Which artifact(s) to print
        #[arg(short, long, value_enum, default_value = "both")]
        format: FormatArg,

        /// Append a drawing helper to the listing
        #[arg(long)]
        usage: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check grid geometry against an image
    Inspect {
        /// Font grid image
        image: PathBuf,

        #[command(flatten)]
        grid: GridArgs,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        #[command(flatten)]
        grid: GridArgs,

        #[command(flatten)]
        render: RenderArgs,
    },
}

/// Grid geometry flags. Unset flags fall back to the config file, then defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct GridArgs {
    /// Config file (default: ~/.config/glyphgrid/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Characters per grid row [default: 16]
    #[arg(long, allow_negative_numbers = true)]
    pub cells_per_row: Option<i64>,

    /// Number of grid rows [default: 16]
    #[arg(long = "rows", allow_negative_numbers = true)]
    pub row_count: Option<i64>,

    /// Cell width in pixels, 1-8 [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    pub cell_width: Option<i64>,

    /// Cell height in pixels [default: 8]
    #[arg(long, allow_negative_numbers = true)]
    pub cell_height: Option<i64>,

    /// X offset of the first cell [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub origin_x: Option<i64>,

    /// Y offset of the first cell [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub origin_y: Option<i64>,

    /// Horizontal gap between cells [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub padding_x: Option<i64>,

    /// Vertical gap between rows [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub padding_y: Option<i64>,

    /// Brightness cutoff 0-255; darker pixels are ink [default: 128]
    #[arg(short, long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,
}

impl GridArgs {
    pub fn settings(&self) -> GridSettings {
        GridSettings {
            cells_per_row: self.cells_per_row,
            row_count: self.row_count,
            cell_width: self.cell_width,
            cell_height: self.cell_height,
            origin_x: self.origin_x,
            origin_y: self.origin_y,
            padding_x: self.padding_x,
            padding_y: self.padding_y,
            threshold: self.threshold,
        }
    }
}

/// Presentation flags
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Listing language
    #[arg(short, long, value_enum)]
    pub language: Option<LanguageArg>,

    /// Array name in the listing
    #[arg(long)]
    pub symbol: Option<String>,

    /// Glyphs per visualization band
    #[arg(long)]
    pub per_line: Option<usize>,

    /// Character drawn for ink pixels
    #[arg(long)]
    pub ink: Option<char>,

    /// Character drawn for background pixels
    #[arg(long)]
    pub background: Option<char>,
}

impl RenderArgs {
    pub fn settings(&self) -> RenderSettings {
        RenderSettings {
            language: self.language.map(Language::from),
            symbol: self.symbol.clone(),
            glyphs_per_line: self.per_line,
            ink: self.ink,
            background: self.background,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Code listing only
    Listing,
    /// Glyph visualization only
    Visual,
    /// Listing followed by visualization
    Both,
}

impl From<FormatArg> for RenderFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Listing => Self::Listing,
            FormatArg::Visual => Self::Visualization,
            FormatArg::Both => Self::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    Rust,
    C,
    #[value(alias = "js")]
    Javascript,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Rust => Self::Rust,
            LanguageArg::C => Self::C,
            LanguageArg::Javascript => Self::JavaScript,
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Extract {
            images,
            grid,
            render,
            format,
            usage,
            output,
        } => {
            cmd::extract::cmd_extract(&images, &grid, &render, format.into(), usage, output)
                .await?;
        }
        Commands::Inspect { image, grid, json } => {
            cmd::inspect::cmd_inspect(&image, &grid, json)?;
        }
        Commands::Config { grid, render } => {
            cmd::config::cmd_config(&grid, &render)?;
        }
    }

    Ok(())
}

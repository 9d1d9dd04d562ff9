//! plateview CLI - Command-line interface
//!
//! Plans plate layouts, decodes well identifiers, computes initial views and
//! probes tiles from a synthetic pyramid.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{decode, layout, probe, view};

#[derive(Parser)]
#[command(name = "plateview")]
#[command(version = plateview::VERSION)]
#[command(about = "Multiscale tiling and plate layout for microscopy images", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.plateview/config.ini
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the well offsets of a plate
    Layout {
        /// Number of well rows
        #[arg(long)]
        rows: u32,

        /// Number of well columns
        #[arg(long)]
        columns: u32,

        /// Well image height in pixels
        #[arg(long)]
        height: u32,

        /// Well image width in pixels
        #[arg(long)]
        width: u32,

        /// Gap between wells (default from config)
        #[arg(long)]
        spacer: Option<f64>,

        /// Layer id the well ids are derived from
        #[arg(long, default_value = "plate")]
        base_id: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Decode a clicked layer id into a well link
    Decode {
        /// Layer id, e.g. layer-0-plate-2-3
        layer_id: String,

        /// Locator of the plate the layer belongs to
        #[arg(long)]
        source: Option<String>,
    },

    /// Compute the initial view state of an image
    View {
        /// Number of pyramid levels
        #[arg(long)]
        levels: u32,

        /// Base level height in pixels
        #[arg(long)]
        height: u32,

        /// Base level width in pixels
        #[arg(long)]
        width: u32,

        /// Chunk edge length in pixels
        #[arg(long, default_value = "256")]
        chunk: u32,
    },

    /// Fetch one tile from a synthetic gradient pyramid
    Probe {
        /// Number of pyramid levels
        #[arg(long, default_value = "4")]
        levels: u32,

        /// Base level height in pixels
        #[arg(long, default_value = "2048")]
        height: u32,

        /// Base level width in pixels
        #[arg(long, default_value = "2048")]
        width: u32,

        /// Chunk edge length in pixels
        #[arg(long, default_value = "256")]
        chunk: u32,

        /// Tile column
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        x: i64,

        /// Tile row
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        y: i64,

        /// Zoom, 0 for the base level, negative for coarser levels
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        zoom: i32,

        /// Save the tile as PNG
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Layout {
            rows,
            columns,
            height,
            width,
            spacer,
            base_id,
            json,
        } => layout::run(layout::LayoutArgs {
            config,
            rows,
            columns,
            height,
            width,
            spacer,
            base_id,
            json,
        }),
        Commands::Decode { layer_id, source } => decode::run(decode::DecodeArgs {
            config,
            layer_id,
            source,
        }),
        Commands::View {
            levels,
            height,
            width,
            chunk,
        } => view::run(view::ViewArgs {
            config,
            levels,
            height,
            width,
            chunk,
        }),
        Commands::Probe {
            levels,
            height,
            width,
            chunk,
            x,
            y,
            zoom,
            output,
        } => probe::run(probe::ProbeArgs {
            config,
            levels,
            height,
            width,
            chunk,
            x,
            y,
            zoom,
            output,
        }),
    };

    if let Err(e) = result {
        e.exit();
    }
}

//! Probe command - fetch one tile from a synthetic pyramid.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use plateview::pyramid::{InMemoryPyramid, Shape};
use plateview::tile::{TileError, TileFetchAdapter, TileRequest, TileResult};
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the probe command.
pub struct ProbeArgs {
    pub config: Option<PathBuf>,
    pub levels: u32,
    pub height: u32,
    pub width: u32,
    pub chunk: u32,
    pub x: i64,
    pub y: i64,
    pub zoom: i32,
    pub output: Option<PathBuf>,
}

/// Run the probe command.
pub fn run(args: ProbeArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.config.as_deref())?;
    runner.log_startup("probe");

    let source = InMemoryPyramid::gradient(
        "probe",
        args.levels,
        Shape::new(args.height, args.width),
        Shape::new(args.chunk, args.chunk),
    )
    .map_err(TileError::from)?;
    let source = Arc::new(source);
    let adapter = TileFetchAdapter::new(source, runner.logger())?;
    let props = adapter.translator().layer_props();
    println!(
        "Pyramid: {} levels, base {}, tiles {}px, zoom {}..{}",
        args.levels,
        adapter.geometry().base_shape(),
        props.tile_size,
        props.min_zoom,
        props.max_zoom
    );

    let request = TileRequest::new(args.x, args.y, args.zoom);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(CliError::Runtime)?;

    let start = Instant::now();
    let result = runtime.block_on(adapter.fetch(&request))?;
    info!("Fetched {} in {:?}", request, start.elapsed());

    let image = match result {
        TileResult::Absent => {
            println!("{}: no data", request);
            return Ok(());
        }
        TileResult::Image(image) => image,
    };

    let bounds = adapter.translator().bounds(&request)?;
    println!(
        "{}: {}×{} px, {} channels, covers [{}, {}, {}, {}]",
        request,
        image.width(),
        image.height(),
        image.channels(),
        bounds.left,
        bounds.top,
        bounds.right,
        bounds.bottom
    );

    if let Some(path) = args.output {
        let file_error = |error: String| CliError::FileWrite {
            path: path.display().to_string(),
            error,
        };
        let dynamic = image
            .to_dynamic_image()
            .ok_or_else(|| file_error("tile cannot be encoded as an image".to_string()))?;
        dynamic
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| file_error(e.to_string()))?;
        println!("Saved {}", path.display());
    }
    Ok(())
}

//! View command - print the initial view state of an image.

use std::path::PathBuf;

use plateview::pyramid::{PyramidGeometry, Shape};
use plateview::view::ViewStateInitializer;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the view command.
pub struct ViewArgs {
    pub config: Option<PathBuf>,
    pub levels: u32,
    pub height: u32,
    pub width: u32,
    pub chunk: u32,
}

/// Run the view command.
pub fn run(args: ViewArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.config.as_deref())?;
    runner.log_startup("view");

    let geometry = PyramidGeometry::new(
        args.levels,
        Shape::new(args.height, args.width),
        Shape::new(args.chunk, args.chunk),
    )
    .map_err(|e| CliError::InvalidArgument(e.to_string()))?;

    let view = ViewStateInitializer::initial_view(&geometry);
    println!("{}", serde_json::to_string(&view)?);
    Ok(())
}

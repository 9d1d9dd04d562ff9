//! Layout command - print the offsets of every well of a plate.

use std::path::PathBuf;

use plateview::layout::{CellId, GridLayoutPlanner, GridSpec};
use plateview::pyramid::Shape;
use serde_json::json;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the layout command.
pub struct LayoutArgs {
    pub config: Option<PathBuf>,
    pub rows: u32,
    pub columns: u32,
    pub height: u32,
    pub width: u32,
    pub spacer: Option<f64>,
    pub base_id: String,
    pub json: bool,
}

/// Run the layout command.
pub fn run(args: LayoutArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.config.as_deref())?;
    runner.log_startup("layout");

    let spacer = args.spacer.unwrap_or(runner.config().layout.spacer);
    let spec = GridSpec::new(
        args.rows,
        args.columns,
        Shape::new(args.height, args.width),
        spacer,
    )?;
    let planner = GridLayoutPlanner::new(spec);

    let cells: Vec<(CellId, [f64; 2])> = (0..args.rows)
        .flat_map(|row| (0..args.columns).map(move |col| (row, col)))
        .map(|(row, col)| (CellId::new(args.base_id.as_str(), row, col), planner.offset(row, col)))
        .collect();

    if args.json {
        let value: Vec<_> = cells
            .iter()
            .map(|(id, offset)| {
                json!({
                    "id": id.to_string(),
                    "row": id.row,
                    "col": id.col,
                    "translation": offset,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!(
        "{} × {} wells of {}, spacer {}",
        args.rows,
        args.columns,
        spec.cell_shape(),
        spacer
    );
    println!();
    for (id, [x, y]) in &cells {
        println!("{:<28} {:>12.1} {:>12.1}", id.to_string(), x, y);
    }
    Ok(())
}

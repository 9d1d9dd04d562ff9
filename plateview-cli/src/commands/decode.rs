//! Decode command - turn a clicked layer id into a well link.

use std::path::PathBuf;

use plateview::interaction::{Decoded, InteractionDecoder, PickEvent};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the decode command.
pub struct DecodeArgs {
    pub config: Option<PathBuf>,
    pub layer_id: String,
    pub source: Option<String>,
}

/// Run the decode command.
pub fn run(args: DecodeArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.config.as_deref())?;
    runner.log_startup("decode");
    let config = runner.config();

    let decoder = InteractionDecoder::new(runner.logger())
        .with_field_path(config.interaction.field_path.clone());

    match decoder.decode(&PickEvent::new(args.layer_id.as_str(), args.source)) {
        Decoded::Navigate(request) => {
            println!("Well:    {}{}", request.row_label(), request.column_number());
            println!("Row:     {}", request.row);
            println!("Column:  {}", request.col);
            println!("Locator: {}", request.locator);
            println!("Open:    {}", request.viewer_url(&config.interaction.origin));
        }
        Decoded::NotApplicable => {
            println!("'{}' is not a well of a plate", args.layer_id);
        }
    }
    Ok(())
}

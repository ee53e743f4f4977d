//! The `compose` subcommand.

use anyhow::Result;
use tracing::info;

use meton_engine::compose;

use crate::cli::ComposeArgs;
use crate::convert;

/// Compose field assignments into a timestamp and print it.
pub fn run(args: ComposeArgs) -> Result<()> {
    let params = convert::load_params(&args.calendar, args.table.as_deref())?;
    let record = convert::parse_fields(&args.fields)?;
    info!(fields = record.len(), "composing record");

    let quantity = compose(&record, &params)?;
    println!("{quantity}");
    Ok(())
}

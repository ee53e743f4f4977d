//! The `decompose` subcommand.

use anyhow::Result;
use tracing::info;

use meton_engine::decompose;

use crate::cli::DecomposeArgs;
use crate::convert;

/// Decompose a timestamp and print one field per line, in canvas order.
pub fn run(args: DecomposeArgs) -> Result<()> {
    let params = convert::load_params(&args.calendar, args.table.as_deref())?;
    info!(
        epoch = params.epoch(),
        levels = params.cycles().len(),
        "cycle table loaded"
    );

    let record = decompose(args.timestamp, &params);
    for entry in params.canvas() {
        let value = record
            .get(&entry.name)
            .expect("decomposition initializes every canvas field");
        println!("{:<16} {value}", entry.name);
    }
    Ok(())
}

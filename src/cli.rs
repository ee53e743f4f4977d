use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Meton cycle-based calendar converter.
#[derive(Parser)]
#[command(name = "meton", version, about = "Cycle-based calendar converter")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Decompose a timestamp into calendar fields.
    Decompose(DecomposeArgs),
    /// Compose calendar fields back into a timestamp.
    Compose(ComposeArgs),
}

/// Arguments for the `decompose` subcommand.
#[derive(clap::Args)]
pub struct DecomposeArgs {
    /// Built-in cycle table (milesian, day-split).
    #[arg(short, long, default_value = "milesian", conflicts_with = "table")]
    pub calendar: String,

    /// Path to a TOML cycle-table description, overriding --calendar.
    #[arg(short, long)]
    pub table: Option<PathBuf>,

    /// Timestamp to decompose, in the table's base unit.
    #[arg(allow_hyphen_values = true)]
    pub timestamp: i64,
}

/// Arguments for the `compose` subcommand.
#[derive(clap::Args)]
pub struct ComposeArgs {
    /// Built-in cycle table (milesian, day-split).
    #[arg(short, long, default_value = "milesian", conflicts_with = "table")]
    pub calendar: String,

    /// Path to a TOML cycle-table description, overriding --calendar.
    #[arg(short, long)]
    pub table: Option<PathBuf>,

    /// Field assignments, e.g. year=2000 month=0 date=1.
    #[arg(required = true)]
    pub fields: Vec<String>,
}

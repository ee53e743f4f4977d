//! Pure conversion functions: CLI and TOML inputs -> engine types.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use meton_engine::{CanvasEntry, CycleSpec, DateRecord, ParameterSet};

use crate::config::TableConfig;

/// Resolves a built-in calendar name to its parameter set.
pub fn parse_calendar(s: &str) -> Result<ParameterSet> {
    match s.to_lowercase().as_str() {
        "milesian" => Ok(meton_milesian::params::time_params()),
        "day-split" => Ok(meton_engine::units::day_milliseconds()),
        other => bail!("unknown calendar: {other:?} (expected milesian or day-split)"),
    }
}

/// Builds a validated [`ParameterSet`] from a TOML table description.
pub fn build_parameter_set(config: &TableConfig) -> Result<ParameterSet> {
    let cycles = config
        .cycle
        .iter()
        .map(|c| CycleSpec {
            length: c.length,
            ceiling: c.ceiling,
            shift: c.shift,
            multiplier: c.multiplier,
            target: c.target.clone(),
        })
        .collect();
    let canvas = config
        .canvas
        .iter()
        .map(|e| CanvasEntry {
            name: e.name.clone(),
            init: e.init,
        })
        .collect();
    ParameterSet::new(config.epoch, cycles, canvas).context("invalid cycle table")
}

/// Loads the parameter set for a subcommand: a TOML table file if given,
/// a built-in calendar otherwise.
pub fn load_params(calendar: &str, table: Option<&Path>) -> Result<ParameterSet> {
    match table {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read table: {}", path.display()))?;
            let config: TableConfig = toml::from_str(&text)
                .with_context(|| format!("failed to parse table: {}", path.display()))?;
            build_parameter_set(&config)
        }
        None => parse_calendar(calendar),
    }
}

/// Parses `name=value` field assignments into a record.
pub fn parse_fields(fields: &[String]) -> Result<DateRecord> {
    let mut record = DateRecord::new();
    for field in fields {
        let (name, value) = field.split_once('=').with_context(|| {
            format!("invalid field assignment {field:?} (expected name=value)")
        })?;
        let value: i64 = value
            .trim()
            .parse()
            .with_context(|| format!("invalid value in {field:?}"))?;
        record.set(name.trim(), value);
    }
    Ok(record)
}

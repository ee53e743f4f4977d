use serde::Deserialize;

/// A cycle table as described in a TOML file.
///
/// ```toml
/// epoch = 0
///
/// [[cycle]]
/// length = 86400000
/// target = "day_number"
///
/// [[cycle]]
/// length = 1
/// target = "milliseconds_in_day"
///
/// [[canvas]]
/// name = "day_number"
///
/// [[canvas]]
/// name = "milliseconds_in_day"
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Scalar value of the calendar's zero point, in base units.
    #[serde(default)]
    pub epoch: i64,

    /// Cycle levels, coarsest first.
    #[serde(default)]
    pub cycle: Vec<CycleToml>,

    /// Output canvas, one entry per distinct target.
    #[serde(default)]
    pub canvas: Vec<CanvasToml>,
}

/// One cycle level of a TOML table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CycleToml {
    /// Length of one cycle in base units; 1 marks the finest level.
    pub length: i64,

    /// Maximum count within the next coarser cycle, minus one.
    /// Omitted means unbounded.
    #[serde(default)]
    pub ceiling: Option<i64>,

    /// Ceiling delta granted to the next level when this one saturates.
    #[serde(default)]
    pub shift: i8,

    /// Factor converting the count into target-field units.
    #[serde(default = "default_multiplier")]
    pub multiplier: i64,

    /// Output field this level contributes to.
    pub target: String,
}

/// One canvas entry of a TOML table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasToml {
    /// Output field name.
    pub name: String,

    /// Field value at the epoch.
    #[serde(default)]
    pub init: i64,
}

fn default_multiplier() -> i64 {
    1
}

//! The Milesian cycle tables for the decomposition engine.

use meton_engine::{CanvasEntry, CycleSpec, ParameterSet};

/// Unix timestamp of 1 1m 0 00:00 UTC, in milliseconds.
///
/// The Milesian year 0 opens at the northern winter solstice preceding the
/// common-era year 0, so the epoch sits roughly 1970 years before the Unix
/// epoch.
pub const EPOCH_MS: i64 = -62_168_083_200_000;

/// Builds the Milesian time table for a Unix millisecond timestamp.
///
/// Eleven levels decompose a timestamp into `year`, `month`, `date`,
/// `hours`, `minutes`, `seconds` and `milliseconds`. The year is assembled
/// from four nested solar cycles (400 years, century, quadrennium, year);
/// the bounded century and year levels encode the Gregorian-aligned
/// intercalation rule, with the saturated last slot of each absorbing the
/// leap surplus. Months come in two-month pairs of 30 + 31 days, the
/// 31-day half reachable only when the 30-day level saturates.
///
/// `month` and `year` count from 0 in the canvas; `date` counts from 1.
pub fn time_params() -> ParameterSet {
    ParameterSet::new(
        EPOCH_MS,
        vec![
            CycleSpec {
                length: 12_622_780_800_000,
                ceiling: None,
                shift: 0,
                multiplier: 400,
                target: "year".to_string(),
            },
            CycleSpec {
                length: 3_155_673_600_000,
                ceiling: Some(3),
                shift: 0,
                multiplier: 100,
                target: "year".to_string(),
            },
            CycleSpec {
                length: 126_230_400_000,
                ceiling: None,
                shift: 0,
                multiplier: 4,
                target: "year".to_string(),
            },
            CycleSpec {
                length: 31_536_000_000,
                ceiling: Some(3),
                shift: 0,
                multiplier: 1,
                target: "year".to_string(),
            },
            CycleSpec {
                length: 5_270_400_000,
                ceiling: None,
                shift: 0,
                multiplier: 2,
                target: "month".to_string(),
            },
            CycleSpec {
                length: 2_592_000_000,
                ceiling: Some(1),
                shift: 0,
                multiplier: 1,
                target: "month".to_string(),
            },
            CycleSpec {
                length: 86_400_000,
                ceiling: None,
                shift: 0,
                multiplier: 1,
                target: "date".to_string(),
            },
            CycleSpec {
                length: 3_600_000,
                ceiling: None,
                shift: 0,
                multiplier: 1,
                target: "hours".to_string(),
            },
            CycleSpec {
                length: 60_000,
                ceiling: None,
                shift: 0,
                multiplier: 1,
                target: "minutes".to_string(),
            },
            CycleSpec {
                length: 1_000,
                ceiling: None,
                shift: 0,
                multiplier: 1,
                target: "seconds".to_string(),
            },
            CycleSpec {
                length: 1,
                ceiling: None,
                shift: 0,
                multiplier: 1,
                target: "milliseconds".to_string(),
            },
        ],
        vec![
            CanvasEntry {
                name: "year".to_string(),
                init: 0,
            },
            CanvasEntry {
                name: "month".to_string(),
                init: 0,
            },
            CanvasEntry {
                name: "date".to_string(),
                init: 1,
            },
            CanvasEntry {
                name: "hours".to_string(),
                init: 0,
            },
            CanvasEntry {
                name: "minutes".to_string(),
                init: 0,
            },
            CanvasEntry {
                name: "seconds".to_string(),
                init: 0,
            },
            CanvasEntry {
                name: "milliseconds".to_string(),
                init: 0,
            },
        ],
    )
    .expect("Milesian time table is valid")
}

/// Builds the two-level year/month table used for month arithmetic.
///
/// The base unit is one month; twelve months make a year. Decomposing a
/// signed month offset yields the year delta and the resulting 0-based
/// month.
pub fn year_month_params() -> ParameterSet {
    ParameterSet::new(
        0,
        vec![
            CycleSpec {
                length: 12,
                ceiling: None,
                shift: 0,
                multiplier: 1,
                target: "year".to_string(),
            },
            CycleSpec {
                length: 1,
                ceiling: None,
                shift: 0,
                multiplier: 1,
                target: "month".to_string(),
            },
        ],
        vec![
            CanvasEntry {
                name: "year".to_string(),
                init: 0,
            },
            CanvasEntry {
                name: "month".to_string(),
                init: 0,
            },
        ],
    )
    .expect("year/month table is valid")
}

//! Chronological unit constants and the day/millisecond splitter table.

use crate::params::{CanvasEntry, CycleSpec, ParameterSet};

/// One day in milliseconds.
pub const DAY_MS: i64 = 86_400_000;

/// One hour in milliseconds.
pub const HOUR_MS: i64 = 3_600_000;

/// One minute in milliseconds.
pub const MINUTE_MS: i64 = 60_000;

/// One second in milliseconds.
pub const SECOND_MS: i64 = 1_000;

/// Builds the two-level table splitting a millisecond count into
/// `day_number` and `milliseconds_in_day`.
///
/// Both levels are unbounded, so the table is plain place-value division:
/// useful for converting durations or timestamps to and from whole days.
pub fn day_milliseconds() -> ParameterSet {
    ParameterSet::new(
        0,
        vec![
            CycleSpec {
                length: DAY_MS,
                ceiling: None,
                shift: 0,
                multiplier: 1,
                target: "day_number".to_string(),
            },
            CycleSpec {
                length: 1,
                ceiling: None,
                shift: 0,
                multiplier: 1,
                target: "milliseconds_in_day".to_string(),
            },
        ],
        vec![
            CanvasEntry {
                name: "day_number".to_string(),
                init: 0,
            },
            CanvasEntry {
                name: "milliseconds_in_day".to_string(),
                init: 0,
            },
        ],
    )
    .expect("day/millisecond table is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_consistency() {
        assert_eq!(DAY_MS, 24 * HOUR_MS);
        assert_eq!(HOUR_MS, 60 * MINUTE_MS);
        assert_eq!(MINUTE_MS, 60 * SECOND_MS);
    }

    #[test]
    fn table_shape() {
        let params = day_milliseconds();
        assert_eq!(params.epoch(), 0);
        assert_eq!(params.cycles().len(), 2);
        assert_eq!(params.canvas().len(), 2);
        assert_eq!(params.cycles()[0].length, DAY_MS);
        assert_eq!(params.cycles()[1].length, 1);
    }
}

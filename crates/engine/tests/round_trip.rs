use meton_engine::units::{day_milliseconds, DAY_MS};
use meton_engine::{compose, decompose, CanvasEntry, CycleSpec, DateRecord, ParameterSet};

/// Four-year groups of 365-day years counted in days, with the leftover
/// 366th day absorbed by the saturated fourth year.
fn quad_year_params() -> ParameterSet {
    ParameterSet::new(
        0,
        vec![
            CycleSpec {
                length: 1461,
                ceiling: None,
                shift: 0,
                multiplier: 4,
                target: "year".to_string(),
            },
            CycleSpec {
                length: 365,
                ceiling: Some(3),
                shift: 0,
                multiplier: 1,
                target: "year".to_string(),
            },
            CycleSpec {
                length: 1,
                ceiling: None,
                shift: 0,
                multiplier: 1,
                target: "day".to_string(),
            },
        ],
        vec![
            CanvasEntry {
                name: "year".to_string(),
                init: 0,
            },
            CanvasEntry {
                name: "day".to_string(),
                init: 0,
            },
        ],
    )
    .unwrap()
}

/// A table whose top level grants the next level an extra slot when its
/// own count saturates.
fn shift_params() -> ParameterSet {
    ParameterSet::new(
        0,
        vec![
            CycleSpec {
                length: 10,
                ceiling: Some(2),
                shift: 1,
                multiplier: 1,
                target: "tens".to_string(),
            },
            CycleSpec {
                length: 3,
                ceiling: Some(2),
                shift: 0,
                multiplier: 1,
                target: "ones".to_string(),
            },
            CycleSpec {
                length: 1,
                ceiling: None,
                shift: 0,
                multiplier: 1,
                target: "units".to_string(),
            },
        ],
        vec![
            CanvasEntry {
                name: "tens".to_string(),
                init: 0,
            },
            CanvasEntry {
                name: "ones".to_string(),
                init: 0,
            },
            CanvasEntry {
                name: "units".to_string(),
                init: 0,
            },
        ],
    )
    .unwrap()
}

/// Record values in canvas order, for lexicographic comparison.
fn key(record: &DateRecord, params: &ParameterSet) -> Vec<i64> {
    params
        .canvas()
        .iter()
        .map(|entry| record.get(&entry.name).unwrap())
        .collect()
}

#[test]
fn day_milliseconds_round_trip() {
    let params = day_milliseconds();
    // An off-by-one stride keeps the sweep off cycle boundaries.
    let mut q = -10 * DAY_MS;
    while q < 10 * DAY_MS {
        let record = decompose(q, &params);
        assert_eq!(
            compose(&record, &params).unwrap(),
            q,
            "round trip failed for q={q}"
        );
        q += 3_600_001;
    }
}

#[test]
fn quad_year_round_trip() {
    let params = quad_year_params();
    for q in (-6000..6000).step_by(7) {
        let record = decompose(q, &params);
        assert_eq!(
            compose(&record, &params).unwrap(),
            q,
            "round trip failed for q={q}"
        );
    }
}

#[test]
fn quad_year_field_round_trip() {
    let params = quad_year_params();
    for q in -3000..3000 {
        let record = decompose(q, &params);
        let quantity = compose(&record, &params).unwrap();
        let back = decompose(quantity, &params);
        assert_eq!(back, record, "field round trip failed for q={q}");
    }
}

#[test]
fn shift_table_round_trip() {
    let params = shift_params();
    for q in -500..500 {
        let record = decompose(q, &params);
        assert_eq!(
            compose(&record, &params).unwrap(),
            q,
            "round trip failed for q={q}"
        );
        let back = decompose(q, &params);
        assert_eq!(back, record, "field round trip failed for q={q}");
    }
}

#[test]
fn decomposition_is_monotonic() {
    let params = quad_year_params();
    let mut prev = key(&decompose(-3000, &params), &params);
    for q in -2999..3000 {
        let next = key(&decompose(q, &params), &params);
        assert!(
            prev <= next,
            "ordering violated between q={} ({prev:?}) and q={q} ({next:?})",
            q - 1
        );
        prev = next;
    }
}

#[test]
fn epoch_decomposes_to_canvas_baseline() {
    let params = day_milliseconds();
    let record = decompose(params.epoch(), &params);
    for entry in params.canvas() {
        assert_eq!(record.get(&entry.name), Some(entry.init));
    }
}

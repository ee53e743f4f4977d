//! Record-to-scalar composition, the inverse of decomposition.

use std::collections::BTreeMap;

use crate::error::EngineError;
use crate::params::ParameterSet;
use crate::record::DateRecord;

/// Composes a record back into a scalar quantity under `params`.
///
/// The record's fields are first shifted by the canvas `init` values so all
/// arithmetic counts from zero, then each level extracts its own place
/// value: `count = counter / multiplier` with floor semantics, capped at
/// the level's effective ceiling with the surplus left in the counter, and
/// `count * length` is added to the accumulating quantity. Consecutive
/// levels sharing one target consume a single running counter, reloaded
/// only when the target name changes, so a run of levels splits one field
/// into mixed-radix digits.
///
/// Composing with a different `ParameterSet` than the one that produced
/// the record is not detected and yields an arbitrary quantity; so do
/// field values outside the calendar's nominal ranges, which compose
/// arithmetically without validation.
///
/// # Errors
///
/// Returns [`EngineError::MissingField`] if a canvas field is absent from
/// `record`.
pub fn compose(record: &DateRecord, params: &ParameterSet) -> Result<i64, EngineError> {
    let mut working: BTreeMap<&str, i64> = BTreeMap::new();
    for entry in params.canvas() {
        let value = record.get(&entry.name).ok_or_else(|| EngineError::MissingField {
            name: entry.name.clone(),
        })?;
        working.insert(entry.name.as_str(), value - entry.init);
    }

    let mut quantity = params.epoch();
    let mut current_target = params.cycles()[0].target.as_str();
    let mut counter = working[current_target];
    let mut add_cycle: i64 = 0;
    for spec in params.cycles() {
        if spec.target != current_target {
            current_target = spec.target.as_str();
            counter = working[current_target];
        }
        let ceiling = spec.ceiling.map(|c| c + add_cycle);
        let mut count = counter.div_euclid(spec.multiplier);
        counter = counter.rem_euclid(spec.multiplier);
        if let Some(ceiling) = ceiling {
            if count > ceiling {
                counter += (count - ceiling) * spec.multiplier;
                count = ceiling;
            }
        }
        add_cycle = match ceiling {
            Some(ceiling) if count == ceiling => i64::from(spec.shift),
            _ => 0,
        };
        quantity += count * spec.length;
    }
    Ok(quantity)
}

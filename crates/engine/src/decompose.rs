//! Scalar-to-record decomposition.

use crate::params::ParameterSet;
use crate::record::DateRecord;

/// Decomposes a scalar quantity into the cycle counts described by `params`.
///
/// `quantity` is measured in the table's base unit relative to absolute
/// zero; the epoch is subtracted first. Levels are walked coarsest first,
/// each removing whole cycles with floor-division semantics, so a negative
/// quantity borrows from the coarsest level and every finer remainder stays
/// non-negative.
///
/// A bounded level counts no further than its effective ceiling
/// (`ceiling` plus the shift granted by the level above); whatever whole
/// cycles remain beyond the ceiling stay in the remainder and lengthen the
/// level's last slot. A level whose count lands exactly on its effective
/// ceiling passes its `shift` down to the next level's ceiling.
///
/// The returned record holds one field per canvas entry, starting from the
/// canvas `init` values, with each level's `count * multiplier` accumulated
/// into its target field.
pub fn decompose(quantity: i64, params: &ParameterSet) -> DateRecord {
    let mut remainder = quantity - params.epoch();
    let mut record = DateRecord::new();
    for entry in params.canvas() {
        record.set(entry.name.clone(), entry.init);
    }

    let mut add_cycle: i64 = 0;
    for spec in params.cycles() {
        let count = if spec.length == 1 {
            // Finest level: the remaining quantity is the count.
            remainder
        } else {
            let mut count = remainder.div_euclid(spec.length);
            remainder = remainder.rem_euclid(spec.length);
            let ceiling = spec.ceiling.map(|c| c + add_cycle);
            if let Some(ceiling) = ceiling {
                if count > ceiling {
                    // The last slot of a bounded level absorbs the surplus.
                    remainder += (count - ceiling) * spec.length;
                    count = ceiling;
                }
            }
            add_cycle = match ceiling {
                Some(ceiling) if count == ceiling => i64::from(spec.shift),
                _ => 0,
            };
            count
        };
        record.add(&spec.target, count * spec.multiplier);
    }
    record
}

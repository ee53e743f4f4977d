//! Cycle-table configuration: [`CycleSpec`], [`CanvasEntry`] and the
//! validated [`ParameterSet`].

use crate::error::EngineError;

/// One level of the cycle table.
///
/// Levels are listed from the coarsest cycle to the finest. Each level
/// removes whole cycles of `length` base units from the quantity being
/// decomposed and credits `count * multiplier` to the output field named
/// by `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSpec {
    /// Length of one cycle of this level, in base scalar units.
    /// A length of exactly 1 marks the finest level, which consumes the
    /// remaining quantity directly.
    pub length: i64,

    /// Maximum count of this level's cycles within one cycle of the next
    /// coarser level, minus one. `None` means unbounded: the level behaves
    /// as plain place-value division and never saturates.
    pub ceiling: Option<i64>,

    /// Delta (-1, 0 or +1) applied to the next level's ceiling when this
    /// level's count lands exactly on its own ceiling. This is the generic
    /// encoding of leap units: the last slot of a bounded cycle may grant
    /// the level below one extra (or one fewer) cycle.
    pub shift: i8,

    /// Factor converting this level's count into units of its target field.
    pub multiplier: i64,

    /// Name of the output field this level contributes to. Consecutive
    /// levels may share a target, accumulating into one field.
    pub target: String,
}

/// One entry of the output canvas: a field name and its value at the epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasEntry {
    /// Output field name; must match a `target` in the cycle table.
    pub name: String,

    /// Baseline value of the field at the epoch (e.g. 1 for a day-in-month
    /// field that starts counting at 1).
    pub init: i64,
}

/// A validated, immutable cycle-table configuration.
///
/// A `ParameterSet` fully describes one calendar system as data: the epoch
/// offset, the nested cycle levels, and the shape of the output record.
/// Construction validates the table eagerly so that
/// [`decompose`](crate::decompose) never has to; after construction the set
/// is never mutated and can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSet {
    epoch: i64,
    cycles: Vec<CycleSpec>,
    canvas: Vec<CanvasEntry>,
}

impl ParameterSet {
    /// Creates a validated `ParameterSet`.
    ///
    /// `epoch` is the scalar value of the calendar's own zero point,
    /// expressed in base units. `cycles` must be ordered from coarsest to
    /// finest. `canvas` must list one entry per distinct target, in the
    /// order the targets first appear in `cycles`.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] describing the first problem found:
    /// empty tables, a non-positive length or multiplier, a unit-length
    /// level that is not last, a negative ceiling, a shift outside -1..=1,
    /// a target with no canvas entry, duplicate canvas names, levels
    /// sharing a target that are not contiguous or whose multipliers do
    /// not strictly decrease, or a canvas listed out of target order.
    pub fn new(
        epoch: i64,
        cycles: Vec<CycleSpec>,
        canvas: Vec<CanvasEntry>,
    ) -> Result<Self, EngineError> {
        if cycles.is_empty() {
            return Err(EngineError::EmptyCycles);
        }
        if canvas.is_empty() {
            return Err(EngineError::EmptyCanvas);
        }

        for (index, spec) in cycles.iter().enumerate() {
            if spec.length < 1 {
                return Err(EngineError::InvalidLength {
                    index,
                    length: spec.length,
                });
            }
            if spec.length == 1 && index + 1 != cycles.len() {
                return Err(EngineError::UnitCycleNotLast { index });
            }
            if spec.multiplier < 1 {
                return Err(EngineError::InvalidMultiplier {
                    index,
                    multiplier: spec.multiplier,
                });
            }
            if let Some(ceiling) = spec.ceiling {
                if ceiling < 0 {
                    return Err(EngineError::InvalidCeiling { index, ceiling });
                }
            }
            if !(-1..=1).contains(&spec.shift) {
                return Err(EngineError::InvalidShift {
                    index,
                    shift: spec.shift,
                });
            }
        }

        for (i, entry) in canvas.iter().enumerate() {
            if canvas[..i].iter().any(|e| e.name == entry.name) {
                return Err(EngineError::DuplicateField {
                    name: entry.name.clone(),
                });
            }
        }

        for (index, spec) in cycles.iter().enumerate() {
            if !canvas.iter().any(|e| e.name == spec.target) {
                return Err(EngineError::UnknownTarget {
                    index,
                    target: spec.target.clone(),
                });
            }
        }

        // Levels sharing a target must form one contiguous run with strictly
        // decreasing multipliers: composition re-derives its running counter
        // only when the target name changes.
        let mut seen: Vec<&str> = Vec::new();
        for (index, spec) in cycles.iter().enumerate() {
            let current = spec.target.as_str();
            match seen.last().copied() {
                Some(last) if last == current => {
                    let prev = &cycles[index - 1];
                    if spec.multiplier >= prev.multiplier {
                        return Err(EngineError::MultiplierOrder {
                            index,
                            target: spec.target.clone(),
                        });
                    }
                }
                _ => {
                    if seen.contains(&current) {
                        return Err(EngineError::SplitTarget {
                            target: spec.target.clone(),
                        });
                    }
                    seen.push(current);
                }
            }
        }

        // Canvas entries that are targeted must appear in first-occurrence
        // target order.
        let targeted: Vec<&str> = canvas
            .iter()
            .map(|e| e.name.as_str())
            .filter(|n| seen.contains(n))
            .collect();
        for (a, b) in targeted.iter().zip(seen.iter()) {
            if a != b {
                return Err(EngineError::CanvasOrder {
                    name: (*a).to_string(),
                });
            }
        }

        Ok(Self {
            epoch,
            cycles,
            canvas,
        })
    }

    /// Returns the epoch offset in base scalar units.
    pub fn epoch(&self) -> i64 {
        self.epoch
    }

    /// Returns the cycle levels, coarsest first.
    pub fn cycles(&self) -> &[CycleSpec] {
        &self.cycles
    }

    /// Returns the canvas entries in declaration order.
    pub fn canvas(&self) -> &[CanvasEntry] {
        &self.canvas
    }
}

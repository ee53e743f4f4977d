//! Error types for the meton-engine crate.

/// Error type for all fallible operations in the meton-engine crate.
///
/// Most variants are configuration errors reported eagerly by
/// [`ParameterSet::new`](crate::ParameterSet::new), so that a table that
/// would silently misbehave at conversion time is rejected up front.
/// Only [`EngineError::MissingField`] can occur later, during
/// [`compose`](crate::compose).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Returned when a parameter set has no cycle levels.
    #[error("cycle table is empty")]
    EmptyCycles,

    /// Returned when a parameter set has no canvas entries.
    #[error("canvas is empty")]
    EmptyCanvas,

    /// Returned when a cycle length is zero or negative.
    #[error("invalid cycle length {length} at level {index} (must be >= 1)")]
    InvalidLength {
        /// Position of the offending level in the cycle table.
        index: usize,
        /// The invalid length that was provided.
        length: i64,
    },

    /// Returned when the unit-length sentinel appears before the last level.
    #[error("unit-length cycle at level {index} must be the last level")]
    UnitCycleNotLast {
        /// Position of the offending level in the cycle table.
        index: usize,
    },

    /// Returned when a multiplier is zero or negative.
    #[error("invalid multiplier {multiplier} at level {index} (must be >= 1)")]
    InvalidMultiplier {
        /// Position of the offending level in the cycle table.
        index: usize,
        /// The invalid multiplier that was provided.
        multiplier: i64,
    },

    /// Returned when a bounded ceiling is negative.
    #[error("invalid ceiling {ceiling} at level {index} (must be >= 0)")]
    InvalidCeiling {
        /// Position of the offending level in the cycle table.
        index: usize,
        /// The invalid ceiling that was provided.
        ceiling: i64,
    },

    /// Returned when a sub-cycle shift is outside -1..=1.
    #[error("invalid sub-cycle shift {shift} at level {index} (must be -1, 0 or +1)")]
    InvalidShift {
        /// Position of the offending level in the cycle table.
        index: usize,
        /// The invalid shift that was provided.
        shift: i8,
    },

    /// Returned when a level's target names no canvas entry.
    #[error("target {target:?} at level {index} has no canvas entry")]
    UnknownTarget {
        /// Position of the offending level in the cycle table.
        index: usize,
        /// The target name with no matching canvas entry.
        target: String,
    },

    /// Returned when two canvas entries share a name.
    #[error("duplicate canvas field {name:?}")]
    DuplicateField {
        /// The repeated canvas field name.
        name: String,
    },

    /// Returned when levels sharing a target are not contiguous in the table.
    #[error("levels targeting {target:?} are not contiguous")]
    SplitTarget {
        /// The target that reappears after an intervening level.
        target: String,
    },

    /// Returned when a level's multiplier does not strictly decrease within
    /// a run of levels sharing one target.
    #[error("multiplier at level {index} must be strictly smaller than the previous level targeting {target:?}")]
    MultiplierOrder {
        /// Position of the offending level in the cycle table.
        index: usize,
        /// The target shared by the run of levels.
        target: String,
    },

    /// Returned when the canvas does not list fields in the order their
    /// targets first appear in the cycle table.
    #[error("canvas field {name:?} is out of order with respect to the cycle table")]
    CanvasOrder {
        /// The canvas field found out of order.
        name: String,
    },

    /// Returned by composition when the record lacks a canvas field.
    #[error("record is missing field {name:?}")]
    MissingField {
        /// The canvas field absent from the record.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            EngineError::InvalidLength {
                index: 2,
                length: 0
            }
            .to_string(),
            "invalid cycle length 0 at level 2 (must be >= 1)"
        );
        assert_eq!(
            EngineError::UnknownTarget {
                index: 1,
                target: "year".to_string()
            }
            .to_string(),
            "target \"year\" at level 1 has no canvas entry"
        );
        assert_eq!(
            EngineError::MissingField {
                name: "month".to_string()
            }
            .to_string(),
            "record is missing field \"month\""
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<EngineError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<EngineError>();
    }

    #[test]
    fn error_is_clone_and_eq() {
        let err = EngineError::SplitTarget {
            target: "year".to_string(),
        };
        assert_eq!(err.clone(), err);
    }
}

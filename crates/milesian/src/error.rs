//! Error types for the meton-milesian crate.

/// Error type for all fallible operations in the meton-milesian crate.
///
/// This enum covers validation failures for Milesian date and time-of-day
/// components. Range rules are the calendar's: twelve months per year,
/// 30 or 31 days per month depending on month parity and the long-year
/// rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MilesianError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when an hours value is outside 0..=23.
    #[error("invalid hours: {hours} (must be 0..=23)")]
    InvalidHours {
        /// The invalid hours value that was provided.
        hours: u8,
    },

    /// Returned when a minutes value is outside 0..=59.
    #[error("invalid minutes: {minutes} (must be 0..=59)")]
    InvalidMinutes {
        /// The invalid minutes value that was provided.
        minutes: u8,
    },

    /// Returned when a seconds value is outside 0..=59.
    #[error("invalid seconds: {seconds} (must be 0..=59)")]
    InvalidSeconds {
        /// The invalid seconds value that was provided.
        seconds: u8,
    },

    /// Returned when a milliseconds value is outside 0..=999.
    #[error("invalid milliseconds: {milliseconds} (must be 0..=999)")]
    InvalidMilliseconds {
        /// The invalid milliseconds value that was provided.
        milliseconds: u16,
    },
}

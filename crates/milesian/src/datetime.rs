//! Milesian date-time and its conversion to and from Unix timestamps.

use meton_engine::{compose, decompose, DateRecord};

use crate::date::MilesianDate;
use crate::error::MilesianError;
use crate::params;

/// A Milesian date with time of day, convertible to and from a Unix
/// millisecond timestamp.
///
/// The timestamp is interpreted as-is; callers working in a local time
/// zone apply their zone offset to the timestamp before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MilesianDateTime {
    date: MilesianDate,
    hours: u8,
    minutes: u8,
    seconds: u8,
    milliseconds: u16,
}

impl MilesianDateTime {
    /// Creates a new `MilesianDateTime` from a date and time-of-day parts.
    ///
    /// # Errors
    ///
    /// Returns [`MilesianError`] if any time-of-day component is out of
    /// range.
    pub fn new(
        date: MilesianDate,
        hours: u8,
        minutes: u8,
        seconds: u8,
        milliseconds: u16,
    ) -> Result<Self, MilesianError> {
        if hours > 23 {
            return Err(MilesianError::InvalidHours { hours });
        }
        if minutes > 59 {
            return Err(MilesianError::InvalidMinutes { minutes });
        }
        if seconds > 59 {
            return Err(MilesianError::InvalidSeconds { seconds });
        }
        if milliseconds > 999 {
            return Err(MilesianError::InvalidMilliseconds { milliseconds });
        }
        Ok(Self {
            date,
            hours,
            minutes,
            seconds,
            milliseconds,
        })
    }

    /// Creates a `MilesianDateTime` at 00:00:00.000 on the given date.
    pub fn midnight(date: MilesianDate) -> Self {
        Self {
            date,
            hours: 0,
            minutes: 0,
            seconds: 0,
            milliseconds: 0,
        }
    }

    /// Converts a Unix millisecond timestamp to a Milesian date-time.
    pub fn from_timestamp(timestamp: i64) -> Self {
        let table = params::time_params();
        let record = decompose(timestamp, &table);
        let field = |name: &str| {
            record
                .get(name)
                .expect("time table initializes every canvas field")
        };
        // The decomposition of any timestamp lands every field in its
        // calendar range; the month moves from the table's 0-based count
        // to the public 1-based numbering.
        let date = MilesianDate::new(
            field("year") as i32,
            (field("month") + 1) as u8,
            field("date") as u8,
        )
        .expect("decomposition yields a valid date");
        Self {
            date,
            hours: field("hours") as u8,
            minutes: field("minutes") as u8,
            seconds: field("seconds") as u8,
            milliseconds: field("milliseconds") as u16,
        }
    }

    /// Converts this date-time to a Unix millisecond timestamp.
    pub fn timestamp(&self) -> i64 {
        let record = DateRecord::new()
            .with("year", i64::from(self.date.year()))
            .with("month", i64::from(self.date.month()) - 1)
            .with("date", i64::from(self.date.day()))
            .with("hours", i64::from(self.hours))
            .with("minutes", i64::from(self.minutes))
            .with("seconds", i64::from(self.seconds))
            .with("milliseconds", i64::from(self.milliseconds));
        compose(&record, &params::time_params()).expect("record carries every canvas field")
    }

    /// Returns the calendar date.
    pub fn date(self) -> MilesianDate {
        self.date
    }

    /// Returns the hours (0..=23).
    pub fn hours(self) -> u8 {
        self.hours
    }

    /// Returns the minutes (0..=59).
    pub fn minutes(self) -> u8 {
        self.minutes
    }

    /// Returns the seconds (0..=59).
    pub fn seconds(self) -> u8 {
        self.seconds
    }

    /// Returns the milliseconds (0..=999).
    pub fn milliseconds(self) -> u16 {
        self.milliseconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meton_engine::units::{DAY_MS, HOUR_MS, MINUTE_MS, SECOND_MS};

    /// 1 1m 2000 00:00 UTC.
    const FIRST_2000: i64 = 945_820_800_000;

    #[test]
    fn new_rejects_out_of_range_time() {
        let date = MilesianDate::new(2000, 1, 1).unwrap();
        assert_eq!(
            MilesianDateTime::new(date, 24, 0, 0, 0).unwrap_err(),
            MilesianError::InvalidHours { hours: 24 }
        );
        assert_eq!(
            MilesianDateTime::new(date, 0, 60, 0, 0).unwrap_err(),
            MilesianError::InvalidMinutes { minutes: 60 }
        );
        assert_eq!(
            MilesianDateTime::new(date, 0, 0, 60, 0).unwrap_err(),
            MilesianError::InvalidSeconds { seconds: 60 }
        );
        assert_eq!(
            MilesianDateTime::new(date, 0, 0, 0, 1000).unwrap_err(),
            MilesianError::InvalidMilliseconds { milliseconds: 1000 }
        );
    }

    #[test]
    fn midnight_has_zero_time() {
        let date = MilesianDate::new(2000, 6, 15).unwrap();
        let dt = MilesianDateTime::midnight(date);
        assert_eq!(dt.date(), date);
        assert_eq!(dt.hours(), 0);
        assert_eq!(dt.minutes(), 0);
        assert_eq!(dt.seconds(), 0);
        assert_eq!(dt.milliseconds(), 0);
    }

    #[test]
    fn first_of_year_2000() {
        let date = MilesianDate::new(2000, 1, 1).unwrap();
        assert_eq!(MilesianDateTime::midnight(date).timestamp(), FIRST_2000);

        let dt = MilesianDateTime::from_timestamp(FIRST_2000);
        assert_eq!(dt.date(), date);
        assert_eq!(dt.hours(), 0);
    }

    #[test]
    fn unix_epoch_is_12_1m_1970() {
        let dt = MilesianDateTime::from_timestamp(0);
        assert_eq!(dt.date(), MilesianDate::new(1970, 1, 12).unwrap());
        assert_eq!(dt.hours(), 0);
        assert_eq!(dt.milliseconds(), 0);
    }

    #[test]
    fn last_instant_of_long_year() {
        // 1999 is long: the millisecond before 1 1m 2000 is 31 12m 1999.
        let dt = MilesianDateTime::from_timestamp(FIRST_2000 - 1);
        assert_eq!(dt.date(), MilesianDate::new(1999, 12, 31).unwrap());
        assert_eq!(dt.hours(), 23);
        assert_eq!(dt.minutes(), 59);
        assert_eq!(dt.seconds(), 59);
        assert_eq!(dt.milliseconds(), 999);
    }

    #[test]
    fn time_of_day_round_trip() {
        let date = MilesianDate::new(2000, 1, 1).unwrap();
        let dt = MilesianDateTime::new(date, 7, 5, 3, 21).unwrap();
        let expected = FIRST_2000 + 7 * HOUR_MS + 5 * MINUTE_MS + 3 * SECOND_MS + 21;
        assert_eq!(dt.timestamp(), expected);
        assert_eq!(MilesianDateTime::from_timestamp(expected), dt);
    }

    #[test]
    fn day_31_of_even_month() {
        // Day 31 of month 2 sits 60 days into the year.
        let ts = FIRST_2000 + 60 * DAY_MS;
        let dt = MilesianDateTime::from_timestamp(ts);
        assert_eq!(dt.date(), MilesianDate::new(2000, 2, 31).unwrap());
        assert_eq!(dt.timestamp(), ts);
    }

    #[test]
    fn ord_follows_timestamps() {
        let a = MilesianDateTime::from_timestamp(FIRST_2000 - 1);
        let b = MilesianDateTime::from_timestamp(FIRST_2000);
        assert!(a < b);
    }
}

//! Validated Milesian calendar dates.

use crate::error::MilesianError;

/// Returns whether a Milesian year has 366 days.
///
/// A Milesian year is long when the following common-era year is
/// bissextile under the Gregorian rule: the extra day sits at the very end
/// of the Milesian year, just before the leap day of the civil calendar.
pub fn is_long_year(year: i32) -> bool {
    let next = year + 1;
    next.rem_euclid(4) == 0 && (next.rem_euclid(100) != 0 || next.rem_euclid(400) == 0)
}

/// Returns the number of days in a Milesian month (30 or 31).
///
/// Odd months have 30 days and even months 31, except the twelfth month,
/// whose 31st day exists only in a long year.
///
/// # Errors
///
/// Returns [`MilesianError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, MilesianError> {
    if !(1..=12).contains(&month) {
        return Err(MilesianError::InvalidMonth { month });
    }
    if month % 2 == 1 {
        Ok(30)
    } else if month < 12 || is_long_year(year) {
        Ok(31)
    } else {
        Ok(30)
    }
}

/// A date in the Milesian calendar.
///
/// Months are numbered 1 to 12 ("1m" to "12m"), days 1 to 30 or 31. Years
/// follow relative common-era notation: year 0 and negative years are
/// valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MilesianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for MilesianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MilesianDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl MilesianDate {
    /// Creates a new `MilesianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`MilesianError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`MilesianError::InvalidDay`] if `day` is not valid for the
    /// given month and year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, MilesianError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(MilesianError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }
}

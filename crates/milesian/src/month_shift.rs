//! Month arithmetic on Milesian dates.

use meton_engine::decompose;

use crate::date::{days_in_month, MilesianDate};
use crate::params;

/// Shifted year and 1-based month, `months` whole months away from `date`.
fn shifted_year_month(date: MilesianDate, months: i64) -> (i32, u8) {
    let table = params::year_month_params();
    let record = decompose(months + i64::from(date.month()) - 1, &table);
    let year_delta = record
        .get("year")
        .expect("year/month table initializes every canvas field");
    let month = record
        .get("month")
        .expect("year/month table initializes every canvas field");
    (date.year() + year_delta as i32, (month + 1) as u8)
}

/// Returns the date a number of Milesian months later or earlier, keeping
/// the day in month.
///
/// A day-31 start is clamped to day 30 when the target month has only 30
/// days; every other day exists in every month, so the result is always a
/// valid date. `months` may be negative.
pub fn month_shift(date: MilesianDate, months: i64) -> MilesianDate {
    let (year, month) = shifted_year_month(date, months);
    let max_day = days_in_month(year, month).expect("shifted month is in 1..=12");
    let day = date.day().min(max_day);
    MilesianDate::new(year, month, day).expect("clamped day is valid for the shifted month")
}

/// Returns the last day of the month a number of Milesian months later or
/// earlier.
pub fn month_end(date: MilesianDate, months: i64) -> MilesianDate {
    let (year, month) = shifted_year_month(date, months);
    let day = days_in_month(year, month).expect("shifted month is in 1..=12");
    MilesianDate::new(year, month, day).expect("last day is valid for the shifted month")
}

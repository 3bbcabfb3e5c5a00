//! Calendar stepping for recurring items and budget windows.
//!
//! Adding a month or a year clamps the day-of-month to the target month's
//! length: Jan 31 + 1 month is Feb 29 in a leap year and Feb 28 otherwise.
//! The clamp also applies when stepping backwards, which the analytics
//! trailing-month cutoff relies on.

use time::{Date, Duration, Month, util::days_in_month};

use crate::models::Frequency;

/// The date one frequency step after `date`.
pub fn next_occurrence(date: Date, frequency: Frequency) -> Date {
    match frequency {
        Frequency::Daily => date.saturating_add(Duration::days(1)),
        Frequency::Weekly => date.saturating_add(Duration::days(7)),
        Frequency::Monthly => add_months(date, 1),
        Frequency::Yearly => add_years(date, 1),
    }
}

/// Move `date` by `months` calendar months, clamping the day to the length
/// of the target month.
pub fn add_months(date: Date, months: i32) -> Date {
    let zero_based_month = date.year() * 12 + (date.month() as i32 - 1) + months;
    let year = zero_based_month.div_euclid(12);
    let month = Month::try_from((zero_based_month.rem_euclid(12) + 1) as u8)
        .expect("month index is always in 1..=12");
    let day = date.day().min(days_in_month(month, year));

    Date::from_calendar_date(year, month, day).expect("clamped day is always valid")
}

/// Move `date` by `years` calendar years, clamping Feb 29 to Feb 28 in
/// non-leap years.
pub fn add_years(date: Date, years: i32) -> Date {
    add_months(date, years * 12)
}

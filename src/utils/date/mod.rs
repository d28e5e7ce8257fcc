// Date utility functions
// Calendar arithmetic shared by the step engine

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Add a signed number of days, saturating at the representable calendar limits.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Shift by whole calendar months, keeping the day of month when it exists
/// and clamping it to the last day of the target month otherwise.
///
/// Jan 31 + 1 month is Feb 28 (or 29), never Mar 3.
pub fn shift_month_clamped(date: NaiveDate, delta_months: i64) -> NaiveDate {
    let total_months = i64::from(date.year()) * 12 + i64::from(date.month0()) + delta_months;
    let Ok(year) = i32::try_from(total_months.div_euclid(12)) else {
        return saturate(delta_months);
    };
    let month = total_months.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| saturate(delta_months))
}

fn saturate(direction: i64) -> NaiveDate {
    if direction < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    }
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        // December of the last representable year
        .unwrap_or(31)
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date.year(), date.month()))
        .unwrap_or(date)
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc. Values above 6 wrap.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = i64::from(date.weekday().num_days_from_sunday());
    let offset = (weekday - i64::from(first_day_of_week % 7)).rem_euclid(7);
    add_days(date, -offset)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First working day (Monday to Friday) on or after `date`.
pub fn next_working_day(date: NaiveDate) -> NaiveDate {
    let mut day = date;
    while is_weekend(day) {
        day = add_days(day, 1);
    }
    day
}

/// The `count`-th working day counting `date` itself as the first one.
/// `date` is expected to be a working day.
pub fn nth_working_day(date: NaiveDate, count: u32) -> NaiveDate {
    let mut day = date;
    let mut remaining = count.saturating_sub(1);
    while remaining > 0 {
        day = add_days(day, 1);
        if !is_weekend(day) {
            remaining -= 1;
        }
    }
    day
}

use chrono::NaiveDate;

use crate::models::date_range::DateRange;
use crate::models::step::ViewStep;
use crate::services::localization::{DateFormatKind, DateLocalizer};

/// Caption text for a page's range.
///
/// Month pages are labelled by month names only; every other step labels
/// the individual days. Abbreviated month names are used whenever the range
/// spans more than one month, or always with `short_date_format`.
pub fn format_caption(
    range: &DateRange,
    step: ViewStep,
    localizer: &dyn DateLocalizer,
    short_date_format: bool,
) -> String {
    match step {
        ViewStep::Month => format_month_caption(range, localizer),
        ViewStep::Day | ViewStep::Week | ViewStep::WorkWeek | ViewStep::Agenda => {
            format_day_caption(range, localizer, short_date_format)
        }
    }
}

fn format_day_caption(range: &DateRange, localizer: &dyn DateLocalizer, short: bool) -> String {
    let (first, last) = (range.start, range.end);

    if range.is_single_day() {
        return day_month_year(first, localizer, short);
    }

    if range.crosses_year() {
        format!(
            "{}-{}",
            day_month_year(first, localizer, true),
            day_month_year(last, localizer, true)
        )
    } else if range.crosses_month() {
        format!(
            "{}-{}",
            day_month(first, localizer, true),
            day_month_year(last, localizer, true)
        )
    } else {
        format!(
            "{}-{}",
            localizer.format(first, DateFormatKind::Day),
            day_month_year(last, localizer, short)
        )
    }
}

fn format_month_caption(range: &DateRange, localizer: &dyn DateLocalizer) -> String {
    let (first, last) = (range.start, range.end);

    if !range.crosses_month() {
        return localizer.format(first, DateFormatKind::MonthAndYear);
    }

    if range.crosses_year() {
        format!(
            "{}-{}",
            month_year(first, localizer),
            month_year(last, localizer)
        )
    } else {
        format!(
            "{}-{}",
            localizer.format(first, DateFormatKind::AbbreviatedMonth),
            month_year(last, localizer)
        )
    }
}

fn month_kind(short: bool) -> DateFormatKind {
    if short {
        DateFormatKind::AbbreviatedMonth
    } else {
        DateFormatKind::Month
    }
}

fn day_month(date: NaiveDate, localizer: &dyn DateLocalizer, short: bool) -> String {
    format!(
        "{} {}",
        localizer.format(date, DateFormatKind::Day),
        localizer.format(date, month_kind(short))
    )
}

fn day_month_year(date: NaiveDate, localizer: &dyn DateLocalizer, short: bool) -> String {
    format!(
        "{} {}",
        day_month(date, localizer, short),
        localizer.format(date, DateFormatKind::Year)
    )
}

fn month_year(date: NaiveDate, localizer: &dyn DateLocalizer) -> String {
    format!(
        "{} {}",
        localizer.format(date, DateFormatKind::AbbreviatedMonth),
        localizer.format(date, DateFormatKind::Year)
    )
}

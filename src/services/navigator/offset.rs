use chrono::NaiveDate;

use crate::models::step::ViewStep;
use crate::utils::date::{add_days, shift_month_clamped};

use super::params::{Direction, StepParams};

/// Date reached by moving one page from `date` in `direction`.
///
/// Work weeks page by whole weeks like regular weeks. Month pages clamp the
/// day of month, so they only invert when no clamping happened
/// (Jan 31 -> Feb 28 -> Mar 28).
pub fn compute_offset_date(date: NaiveDate, params: &StepParams, direction: Direction) -> NaiveDate {
    let sign = direction.sign();
    let count = i64::from(params.interval_count);

    match params.step {
        ViewStep::Day => add_days(date, sign * count),
        ViewStep::Week | ViewStep::WorkWeek => add_days(date, sign * count * 7),
        ViewStep::Month => shift_month_clamped(date, sign * count),
        ViewStep::Agenda => add_days(date, sign * i64::from(params.agenda_duration)),
    }
}

use chrono::NaiveDate;

use crate::models::date_range::DateRange;
use crate::models::step::ViewStep;
use crate::utils::date::{
    add_days, first_day_of_month, last_day_of_month, next_working_day, nth_working_day,
    shift_month_clamped, week_start,
};

use super::params::StepParams;

const WORKING_DAYS_PER_WEEK: u32 = 5;

/// Inclusive range of days displayed for a page starting at `date`.
pub fn compute_date_range(date: NaiveDate, params: &StepParams) -> DateRange {
    let count = i64::from(params.interval_count);

    match params.step {
        ViewStep::Day => DateRange::new(date, add_days(date, count - 1)),
        ViewStep::Week => {
            let start = week_start(date, params.first_day_of_week);
            DateRange::new(start, add_days(start, 7 * count - 1))
        }
        ViewStep::WorkWeek => {
            // A week starting on a weekend still shows Monday to Friday
            let start = next_working_day(week_start(date, params.first_day_of_week));
            let first_block_end = nth_working_day(start, WORKING_DAYS_PER_WEEK);
            DateRange::new(start, add_days(first_block_end, 7 * (count - 1)))
        }
        ViewStep::Month => {
            let start = first_day_of_month(date);
            let end = last_day_of_month(shift_month_clamped(start, count - 1));
            DateRange::new(start, end)
        }
        ViewStep::Agenda => DateRange::new(
            date,
            add_days(date, i64::from(params.agenda_duration) - 1),
        ),
    }
}

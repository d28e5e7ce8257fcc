use chrono::NaiveDate;

use crate::models::date_range::DateRange;

use super::offset::compute_offset_date;
use super::params::{Direction, StepParams};
use super::range::compute_date_range;

/// Whether the page after `current` still shows a day on or before `max`.
///
/// The check works on pages, not points: with month pages only the month
/// of `max` matters, so a max of Mar 3 and of Mar 28 behave the same.
pub fn is_forward_allowed(current: &DateRange, params: &StepParams, max: Option<NaiveDate>) -> bool {
    starts_by(&adjacent_page(current, params, Direction::Forward), max)
}

/// Whether the page before `current` still shows a day on or after `min`.
pub fn is_backward_allowed(current: &DateRange, params: &StepParams, min: Option<NaiveDate>) -> bool {
    ends_from(&adjacent_page(current, params, Direction::Backward), min)
}

// Built from the page start so month pages always cover whole months
fn adjacent_page(current: &DateRange, params: &StepParams, direction: Direction) -> DateRange {
    compute_date_range(compute_offset_date(current.start, params, direction), params)
}

pub(super) fn starts_by(page: &DateRange, max: Option<NaiveDate>) -> bool {
    max.is_none_or(|max| page.start <= max)
}

pub(super) fn ends_from(page: &DateRange, min: Option<NaiveDate>) -> bool {
    min.is_none_or(|min| page.end >= min)
}

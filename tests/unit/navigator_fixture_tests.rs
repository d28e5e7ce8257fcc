// Table-driven navigator tests
// Captions, page offsets and button state for the reference scenarios

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::NaiveDate;
use scheduler_navigator::models::step::ViewStep;
use scheduler_navigator::services::navigator::DateStepNavigator;
use test_case::test_case;

use fixtures::dates::*;
use fixtures::navigators;

fn navigator(date: NaiveDate, step: ViewStep, interval_count: u32, first_day_of_week: u8) -> DateStepNavigator {
    DateStepNavigator::new(date)
        .with_step(step)
        .with_interval_count(interval_count)
        .with_first_day_of_week(first_day_of_week)
}

#[test_case(jan_24_2015(), ViewStep::Day, 1, 1, "24 January 2015"; "day")]
#[test_case(jan_24_2015(), ViewStep::Week, 1, 1, "19-25 January 2015"; "week")]
#[test_case(jan_24_2015(), ViewStep::WorkWeek, 1, 1, "19-23 January 2015"; "work week")]
#[test_case(jan_24_2015(), ViewStep::WorkWeek, 1, 0, "19-23 January 2015"; "work week starting sunday")]
#[test_case(jan_24_2015(), ViewStep::Month, 1, 1, "January 2015"; "month")]
#[test_case(jan_24_2015(), ViewStep::Agenda, 1, 1, "24-30 January 2015"; "agenda")]
#[test_case(may_25_2015(), ViewStep::Day, 3, 0, "25-27 May 2015"; "day with interval count")]
#[test_case(may_25_2015(), ViewStep::WorkWeek, 3, 1, "25 May-12 Jun 2015"; "work week with interval count")]
#[test_case(may_25_2015(), ViewStep::Week, 3, 1, "25 May-14 Jun 2015"; "week with interval count")]
#[test_case(ymd(2017, 5, 25), ViewStep::Month, 2, 0, "Jun-Jul 2017"; "month with interval count")]
#[test_case(ymd(2017, 11, 25), ViewStep::Month, 3, 0, "Dec 2017-Feb 2018"; "month with interval count across years")]
#[test_case(jan_10_2016(), ViewStep::WorkWeek, 1, 0, "11-15 January 2016"; "work week on sunday")]
#[test_case(jan_10_2016(), ViewStep::WorkWeek, 1, 3, "6-12 January 2016"; "work week on sunday starting wednesday")]
#[test_case(jan_9_2016(), ViewStep::WorkWeek, 1, 6, "11-15 January 2016"; "work week on saturday starting saturday")]
#[test_case(jan_10_2016(), ViewStep::WorkWeek, 1, 6, "11-15 January 2016"; "work week on sunday starting saturday")]
#[test_case(ymd(2015, 3, 1), ViewStep::Week, 1, 1, "23 Feb-1 Mar 2015"; "week on sunday starting monday")]
fn test_caption(date: NaiveDate, step: ViewStep, interval_count: u32, first_day_of_week: u8, expected: &str) {
    assert_eq!(
        navigator(date, step, interval_count, first_day_of_week).caption(),
        expected
    );
}

#[test_case(Some(1), "24 January 2015"; "one day agenda")]
#[test_case(Some(0), "24-30 January 2015"; "zero falls back to default")]
#[test_case(None, "24-30 January 2015"; "missing falls back to default")]
fn test_agenda_caption(duration: Option<u32>, expected: &str) {
    let navigator = DateStepNavigator::new(jan_24_2015())
        .with_step(ViewStep::Agenda)
        .with_agenda_duration(move || duration);
    assert_eq!(navigator.caption(), expected);
}

#[test]
fn test_agenda_duration_from_provider() {
    let navigator = DateStepNavigator::new(jan_24_2015())
        .with_step(ViewStep::Agenda)
        .with_agenda_duration(|| Some(5));
    assert_eq!(navigator.params().agenda_duration, 5);
}

#[test_case(feb_24_2015(), ViewStep::Day, 1, 0, ymd(2015, 2, 25), ymd(2015, 2, 23); "day")]
#[test_case(feb_24_2015(), ViewStep::Week, 1, 0, ymd(2015, 3, 3), ymd(2015, 2, 17); "week")]
#[test_case(feb_24_2015(), ViewStep::WorkWeek, 1, 0, ymd(2015, 3, 3), ymd(2015, 2, 17); "work week")]
#[test_case(jan_24_2015(), ViewStep::Month, 1, 0, ymd(2015, 2, 24), ymd(2014, 12, 24); "month")]
#[test_case(ymd(2015, 1, 31), ViewStep::Month, 1, 0, ymd(2015, 2, 28), ymd(2014, 12, 31); "month from last day")]
#[test_case(may_25_2015(), ViewStep::Day, 3, 0, ymd(2015, 5, 28), ymd(2015, 5, 22); "day with interval count")]
#[test_case(may_25_2015(), ViewStep::Week, 3, 1, ymd(2015, 6, 15), ymd(2015, 5, 4); "week with interval count")]
#[test_case(may_25_2015(), ViewStep::WorkWeek, 3, 1, ymd(2015, 6, 15), ymd(2015, 5, 4); "work week with interval count")]
#[test_case(may_25_2015(), ViewStep::Month, 3, 0, ymd(2015, 9, 25), ymd(2015, 3, 25); "month with interval count")]
fn test_next_and_previous(
    date: NaiveDate,
    step: ViewStep,
    interval_count: u32,
    first_day_of_week: u8,
    next: NaiveDate,
    previous: NaiveDate,
) {
    let mut forward = navigator(date, step, interval_count, first_day_of_week);
    assert_eq!(forward.move_forward(), Some(next));

    let mut backward = navigator(date, step, interval_count, first_day_of_week);
    assert_eq!(backward.move_backward(), Some(previous));
}

#[test]
fn test_month_paging_does_not_invert_after_clamping() {
    let mut navigator = navigator(ymd(2015, 1, 31), ViewStep::Month, 1, 0);

    assert_eq!(navigator.move_forward(), Some(ymd(2015, 2, 28)));
    assert_eq!(navigator.move_forward(), Some(ymd(2015, 3, 28)));
    assert_eq!(navigator.move_backward(), Some(ymd(2015, 2, 28)));
    assert_eq!(navigator.move_backward(), Some(ymd(2015, 1, 28)));
}

#[test]
fn test_unsupported_step_name() {
    let mut navigator = DateStepNavigator::new(jan_24_2015());
    let err = navigator.set_step_name("year").unwrap_err();
    assert!(err.to_string().contains("E1033"));
}

// Bounds scenarios: date, min and max all start at Feb 3, 2015

#[test_case(ViewStep::Day, ymd(2015, 2, 1); "day")]
#[test_case(ViewStep::Week, ymd(2015, 1, 1); "week")]
#[test_case(ViewStep::Month, ymd(2015, 1, 1); "month")]
fn test_previous_disabled_by_min(step: ViewStep, earlier_min: NaiveDate) {
    let mut navigator = navigators::pinned_to_feb_3_2015().with_step(step);
    assert!(!navigator.can_move_backward());

    navigator.set_min(Some(earlier_min));
    assert!(navigator.can_move_backward());

    navigator.set_min(Some(feb_3_2015()));
    assert!(!navigator.can_move_backward());
}

#[test_case(ViewStep::Day, ymd(2015, 2, 8); "day")]
#[test_case(ViewStep::Week, ymd(2015, 2, 14); "week")]
#[test_case(ViewStep::Month, ymd(2015, 3, 14); "month")]
fn test_next_disabled_by_max(step: ViewStep, later_max: NaiveDate) {
    let mut navigator = navigators::pinned_to_feb_3_2015().with_step(step);
    assert!(!navigator.can_move_forward());

    navigator.set_max(Some(later_max));
    assert!(navigator.can_move_forward());

    navigator.set_max(Some(feb_3_2015()));
    assert!(!navigator.can_move_forward());
}

#[test_case(ymd(2015, 2, 10), ymd(2015, 1, 30), true; "february page min late in january")]
#[test_case(ymd(2015, 2, 10), ymd(2015, 1, 31), true; "february page min on january 31")]
#[test_case(ymd(2015, 2, 10), ymd(2015, 2, 1), false; "february page min on first of february")]
#[test_case(ymd(2015, 3, 31), ymd(2015, 2, 28), true; "march page min at end of february")]
#[test_case(ymd(2015, 4, 30), ymd(2015, 3, 31), true; "april page min at end of march")]
#[test_case(ymd(2016, 3, 15), ymd(2016, 2, 29), true; "leap february")]
fn test_month_previous_across_month_lengths(date: NaiveDate, min: NaiveDate, enabled: bool) {
    let navigator = navigator(date, ViewStep::Month, 1, 0).with_bounds(Some(min), None);
    assert_eq!(navigator.can_move_backward(), enabled);
}

#[test_case(ymd(2015, 1, 31), ymd(2015, 2, 1), true; "january page max on first of february")]
#[test_case(ymd(2015, 1, 31), ymd(2015, 1, 31), false; "january page max on last day")]
#[test_case(ymd(2015, 2, 28), ymd(2015, 3, 1), true; "february page max on first of march")]
fn test_month_next_across_month_lengths(date: NaiveDate, max: NaiveDate, enabled: bool) {
    let navigator = navigator(date, ViewStep::Month, 1, 0).with_bounds(None, Some(max));
    assert_eq!(navigator.can_move_forward(), enabled);
}

#[test]
fn test_next_enabled_for_same_day_next_month() {
    let mut navigator = navigators::pinned_to_feb_3_2015().with_step(ViewStep::Day);
    navigator.set_max(Some(ymd(2015, 3, 3)));
    assert!(navigator.can_move_forward());
}

#[test]
fn test_next_enabled_for_same_month_next_year() {
    let mut navigator = navigators::pinned_to_feb_3_2015().with_step(ViewStep::Month);
    navigator.set_max(Some(ymd(2016, 2, 10)));
    assert!(navigator.can_move_forward());
}

#[test]
fn test_short_captions() {
    let navigator = navigator(jan_24_2015(), ViewStep::WorkWeek, 1, 0).with_short_date_format(true);
    assert_eq!(navigator.caption(), "19-23 Jan 2015");
}

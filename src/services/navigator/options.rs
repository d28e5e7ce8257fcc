use chrono::NaiveDate;

use crate::models::step::ViewStep;

use super::{DateStepNavigator, NavigatorSnapshot};

/// A single option change, applied synchronously in the order received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorOption {
    Date(NaiveDate),
    Step(ViewStep),
    IntervalCount(u32),
    FirstDayOfWeek(u8),
    Min(Option<NaiveDate>),
    Max(Option<NaiveDate>),
    ShortDateFormat(bool),
}

impl DateStepNavigator {
    /// Option changes never notify observers; only navigation does.
    pub fn apply(&mut self, option: NavigatorOption) {
        log::debug!("Applying navigator option {:?}", option);

        match option {
            NavigatorOption::Date(date) => self.set_date(date),
            NavigatorOption::Step(step) => self.set_step(step),
            NavigatorOption::IntervalCount(count) => self.set_interval_count(count),
            NavigatorOption::FirstDayOfWeek(day) => self.set_first_day_of_week(day),
            NavigatorOption::Min(min) => self.set_min(min),
            NavigatorOption::Max(max) => self.set_max(max),
            NavigatorOption::ShortDateFormat(short) => self.set_short_date_format(short),
        }
    }

    /// Apply every change in order and return the resulting view state.
    pub fn apply_all<I>(&mut self, options: I) -> NavigatorSnapshot
    where
        I: IntoIterator<Item = NavigatorOption>,
    {
        for option in options {
            self.apply(option);
        }
        self.snapshot()
    }
}

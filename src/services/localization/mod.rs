//! Date text rendering for captions.
//!
//! The navigator only decides which pieces of a date appear in a caption;
//! turning those pieces into text is the localizer's job.

use chrono::NaiveDate;

/// Date component requested from a [`DateLocalizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormatKind {
    /// Day of month without padding ("5")
    Day,
    /// Full month name ("January")
    Month,
    /// Short month name ("Jan")
    AbbreviatedMonth,
    /// Full month name and year ("January 2015")
    MonthAndYear,
    /// Four digit year ("2015")
    Year,
}

#[cfg_attr(test, mockall::automock)]
pub trait DateLocalizer {
    fn format(&self, date: NaiveDate, kind: DateFormatKind) -> String;
}

impl<F> DateLocalizer for F
where
    F: Fn(NaiveDate, DateFormatKind) -> String,
{
    fn format(&self, date: NaiveDate, kind: DateFormatKind) -> String {
        self(date, kind)
    }
}

/// English month names via chrono's formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl DateLocalizer for EnglishLocalizer {
    fn format(&self, date: NaiveDate, kind: DateFormatKind) -> String {
        let pattern = match kind {
            DateFormatKind::Day => "%-d",
            DateFormatKind::Month => "%B",
            DateFormatKind::AbbreviatedMonth => "%b",
            DateFormatKind::MonthAndYear => "%B %Y",
            DateFormatKind::Year => "%Y",
        };
        date.format(pattern).to_string()
    }
}

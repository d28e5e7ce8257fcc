// Navigation step model
// The calendar granularity a navigator pages through

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::services::navigator::NavigatorError;

/// Step unit controlling how far one press of next/previous moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewStep {
    #[default]
    Day,
    Week,
    WorkWeek,
    Month,
    Agenda,
}

impl ViewStep {
    pub const ALL: [ViewStep; 5] = [
        ViewStep::Day,
        ViewStep::Week,
        ViewStep::WorkWeek,
        ViewStep::Month,
        ViewStep::Agenda,
    ];

    /// Name used in settings files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewStep::Day => "day",
            ViewStep::Week => "week",
            ViewStep::WorkWeek => "workWeek",
            ViewStep::Month => "month",
            ViewStep::Agenda => "agenda",
        }
    }
}

impl fmt::Display for ViewStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewStep {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ViewStep::ALL
            .into_iter()
            .find(|step| step.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| NavigatorError::UnsupportedStep(name.to_string()))
    }
}

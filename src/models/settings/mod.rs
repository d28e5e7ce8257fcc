// Settings module
// Navigator options as stored in the settings file

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::step::ViewStep;
use crate::services::navigator::NavigatorError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorSettings {
    /// Step name, validated on load ("day", "week", "workWeek", "month", "agenda")
    pub step: String,
    pub interval_count: u32,
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<NaiveDate>,
    /// Days shown by the agenda step; unset or 0 means the 7-day default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda_duration: Option<u32>,
    /// Abbreviated month names in every caption
    pub short_date_format: bool,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            step: ViewStep::Day.as_str().to_string(),
            interval_count: 1,
            first_day_of_week: 0, // Sunday
            min: None,
            max: None,
            agenda_duration: None,
            short_date_format: false,
        }
    }
}

impl NavigatorSettings {
    pub fn view_step(&self) -> Result<ViewStep, NavigatorError> {
        self.step.parse()
    }

    /// Check the values a settings file can get wrong.
    ///
    /// Interval counts and inverted bounds are accepted as-is; the navigator
    /// treats a zero interval as one and inverted bounds simply disable
    /// both directions.
    pub fn validate(&self) -> Result<(), String> {
        self.view_step().map_err(|e| e.to_string())?;

        if self.first_day_of_week > 6 {
            return Err(NavigatorError::InvalidFirstDayOfWeek(self.first_day_of_week).to_string());
        }

        Ok(())
    }
}

use crate::models::step::ViewStep;

use super::agenda::{resolve_agenda_duration, DEFAULT_AGENDA_DURATION};

/// Everything the step engine needs to page through dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepParams {
    pub step: ViewStep,
    /// Never zero
    pub interval_count: u32,
    /// 0 = Sunday ... 6 = Saturday
    pub first_day_of_week: u8,
    /// Already resolved, never zero
    pub agenda_duration: u32,
}

impl StepParams {
    pub fn new(step: ViewStep) -> Self {
        Self {
            step,
            interval_count: 1,
            first_day_of_week: 0,
            agenda_duration: DEFAULT_AGENDA_DURATION,
        }
    }

    /// A zero interval count is treated as one.
    pub fn with_interval_count(mut self, interval_count: u32) -> Self {
        self.interval_count = interval_count.max(1);
        self
    }

    pub fn with_first_day_of_week(mut self, first_day_of_week: u8) -> Self {
        self.first_day_of_week = first_day_of_week % 7;
        self
    }

    pub fn with_agenda_duration(mut self, raw: Option<u32>) -> Self {
        self.agenda_duration = resolve_agenda_duration(raw);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

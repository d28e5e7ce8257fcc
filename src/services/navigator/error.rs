use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    /// Step name outside {day, week, workWeek, month, agenda}
    #[error("E1033 - Step \"{0}\" is not supported")]
    UnsupportedStep(String),

    #[error("First day of week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidFirstDayOfWeek(u8),
}

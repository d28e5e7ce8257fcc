/// Days shown by the agenda step when no usable duration is supplied.
pub const DEFAULT_AGENDA_DURATION: u32 = 7;

/// Supplies the agenda length in days, queried once per agenda computation.
pub trait AgendaDurationProvider {
    fn agenda_duration(&self) -> Option<u32>;
}

impl<F> AgendaDurationProvider for F
where
    F: Fn() -> Option<u32>,
{
    fn agenda_duration(&self) -> Option<u32> {
        self()
    }
}

/// Provider that never overrides the default duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAgendaDuration;

impl AgendaDurationProvider for DefaultAgendaDuration {
    fn agenda_duration(&self) -> Option<u32> {
        None
    }
}

/// Missing and zero durations both fall back to [`DEFAULT_AGENDA_DURATION`].
pub fn resolve_agenda_duration(raw: Option<u32>) -> u32 {
    match raw {
        None | Some(0) => DEFAULT_AGENDA_DURATION,
        Some(days) => days,
    }
}

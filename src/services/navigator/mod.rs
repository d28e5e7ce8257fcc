//! Date-step navigation for scheduler views.
//!
//! The submodules hold the pure step engine (offsets, page ranges, captions
//! and bound checks). [`DateStepNavigator`] owns the navigator state and
//! wires the engine to its collaborators: the agenda duration provider, the
//! date localizer and any observers of the current date.

mod agenda;
mod bounds;
mod caption;
mod error;
mod observer;
mod offset;
mod options;
mod params;
mod range;

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::date_range::DateRange;
use crate::models::settings::NavigatorSettings;
use crate::models::step::ViewStep;
use crate::services::localization::{DateLocalizer, EnglishLocalizer};
use crate::utils::date::shift_month_clamped;

pub use agenda::{
    resolve_agenda_duration, AgendaDurationProvider, DefaultAgendaDuration,
    DEFAULT_AGENDA_DURATION,
};
pub use bounds::{is_backward_allowed, is_forward_allowed};
pub use caption::format_caption;
pub use error::NavigatorError;
pub use observer::{LoggingObserver, NavigatorObserver};
pub use offset::compute_offset_date;
pub use options::NavigatorOption;
pub use params::{Direction, StepParams};
pub use range::compute_date_range;

/// Caption and button state of the navigator at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorSnapshot {
    pub date: NaiveDate,
    pub step: ViewStep,
    pub interval_count: u32,
    pub range: DateRange,
    pub day_count: i64,
    pub caption: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<NaiveDate>,
}

pub struct DateStepNavigator {
    current_date: NaiveDate,
    step: ViewStep,
    interval_count: u32,
    first_day_of_week: u8,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    short_date_format: bool,
    agenda_duration: Box<dyn AgendaDurationProvider>,
    localizer: Box<dyn DateLocalizer>,
    observers: Vec<Box<dyn NavigatorObserver>>,
}

impl fmt::Debug for DateStepNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateStepNavigator")
            .field("current_date", &self.current_date)
            .field("step", &self.step)
            .field("interval_count", &self.interval_count)
            .field("first_day_of_week", &self.first_day_of_week)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("short_date_format", &self.short_date_format)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl DateStepNavigator {
    /// Day step, one interval, weeks starting on Sunday, no bounds.
    pub fn new(current_date: NaiveDate) -> Self {
        Self {
            current_date,
            step: ViewStep::Day,
            interval_count: 1,
            first_day_of_week: 0,
            min: None,
            max: None,
            short_date_format: false,
            agenda_duration: Box::new(DefaultAgendaDuration),
            localizer: Box::new(EnglishLocalizer),
            observers: Vec::new(),
        }
    }

    pub fn from_settings(
        settings: &NavigatorSettings,
        current_date: NaiveDate,
    ) -> Result<Self, NavigatorError> {
        let step = settings.view_step()?;
        let agenda_duration = settings.agenda_duration;

        Ok(Self::new(current_date)
            .with_step(step)
            .with_interval_count(settings.interval_count)
            .with_first_day_of_week(settings.first_day_of_week)
            .with_bounds(settings.min, settings.max)
            .with_short_date_format(settings.short_date_format)
            .with_agenda_duration(move || agenda_duration))
    }

    pub fn with_step(mut self, step: ViewStep) -> Self {
        self.step = step;
        self
    }

    pub fn with_interval_count(mut self, interval_count: u32) -> Self {
        self.set_interval_count(interval_count);
        self
    }

    pub fn with_first_day_of_week(mut self, first_day_of_week: u8) -> Self {
        self.set_first_day_of_week(first_day_of_week);
        self
    }

    pub fn with_bounds(mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_short_date_format(mut self, short: bool) -> Self {
        self.short_date_format = short;
        self
    }

    pub fn with_agenda_duration(mut self, provider: impl AgendaDurationProvider + 'static) -> Self {
        self.agenda_duration = Box::new(provider);
        self
    }

    pub fn with_localizer(mut self, localizer: impl DateLocalizer + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn step(&self) -> ViewStep {
        self.step
    }

    pub fn interval_count(&self) -> u32 {
        self.interval_count
    }

    pub fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week
    }

    pub fn min(&self) -> Option<NaiveDate> {
        self.min
    }

    pub fn max(&self) -> Option<NaiveDate> {
        self.max
    }

    /// Change the date without notifying observers.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    pub fn set_step(&mut self, step: ViewStep) {
        self.step = step;
    }

    /// Set the step by name. Unknown names leave the current step in place.
    pub fn set_step_name(&mut self, name: &str) -> Result<(), NavigatorError> {
        self.step = name.parse()?;
        Ok(())
    }

    /// Zero is treated as one.
    pub fn set_interval_count(&mut self, interval_count: u32) {
        self.interval_count = interval_count.max(1);
    }

    /// Values above 6 wrap around the week.
    pub fn set_first_day_of_week(&mut self, first_day_of_week: u8) {
        self.first_day_of_week = first_day_of_week % 7;
    }

    pub fn set_min(&mut self, min: Option<NaiveDate>) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: Option<NaiveDate>) {
        self.max = max;
    }

    pub fn set_short_date_format(&mut self, short: bool) {
        self.short_date_format = short;
    }

    pub fn set_agenda_duration(&mut self, provider: impl AgendaDurationProvider + 'static) {
        self.agenda_duration = Box::new(provider);
    }

    pub fn subscribe(&mut self, observer: impl NavigatorObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Engine parameters for the current state. The agenda provider is only
    /// consulted for the agenda step.
    pub fn params(&self) -> StepParams {
        let params = StepParams::new(self.step)
            .with_interval_count(self.interval_count)
            .with_first_day_of_week(self.first_day_of_week);

        if self.step == ViewStep::Agenda {
            params.with_agenda_duration(self.agenda_duration.agenda_duration())
        } else {
            params
        }
    }

    /// Date the displayed page is computed from.
    ///
    /// Multi-month pages start with the month after the current date; every
    /// other page starts from the current date itself.
    pub fn display_date(&self) -> NaiveDate {
        anchor_for(self.current_date, &self.params())
    }

    pub fn current_range(&self) -> DateRange {
        let params = self.params();
        compute_date_range(anchor_for(self.current_date, &params), &params)
    }

    pub fn caption(&self) -> String {
        format_caption(
            &self.current_range(),
            self.step,
            self.localizer.as_ref(),
            self.short_date_format,
        )
    }

    pub fn can_move_forward(&self) -> bool {
        self.target(&self.params(), Direction::Forward).is_some()
    }

    pub fn can_move_backward(&self) -> bool {
        self.target(&self.params(), Direction::Backward).is_some()
    }

    /// Move one page forward. Returns the new date, or `None` when `max`
    /// leaves nothing to show on the next page.
    pub fn move_forward(&mut self) -> Option<NaiveDate> {
        self.move_page(Direction::Forward)
    }

    /// Move one page backward. Returns the new date, or `None` when `min`
    /// leaves nothing to show on the previous page.
    pub fn move_backward(&mut self) -> Option<NaiveDate> {
        self.move_page(Direction::Backward)
    }

    /// Date one page away in `direction`, if the page displayed there still
    /// shows a day inside the bounds.
    fn target(&self, params: &StepParams, direction: Direction) -> Option<NaiveDate> {
        let date = compute_offset_date(anchor_for(self.current_date, params), params, direction);
        let landing = compute_date_range(anchor_for(date, params), params);

        let allowed = match direction {
            Direction::Forward => bounds::starts_by(&landing, self.max),
            Direction::Backward => bounds::ends_from(&landing, self.min),
        };
        allowed.then_some(date)
    }

    fn move_page(&mut self, direction: Direction) -> Option<NaiveDate> {
        let params = self.params();

        let Some(date) = self.target(&params, direction) else {
            log::warn!(
                "Navigation {:?} from {} blocked by bounds (min: {:?}, max: {:?})",
                direction,
                self.current_date,
                self.min,
                self.max
            );
            return None;
        };

        log::debug!(
            "Moved {:?} by {} x{} from {} to {}",
            direction,
            params.step,
            params.interval_count,
            self.current_date,
            date
        );
        self.update_current_date(date);
        Some(date)
    }

    /// Pick a date directly (calendar selection) and notify observers.
    pub fn select_date(&mut self, date: NaiveDate) {
        log::debug!("Selected date {}", date);
        self.update_current_date(date);
    }

    fn update_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
        for observer in &mut self.observers {
            observer.current_date_updated(date);
        }
    }

    pub fn snapshot(&self) -> NavigatorSnapshot {
        let params = self.params();
        let range = compute_date_range(anchor_for(self.current_date, &params), &params);

        NavigatorSnapshot {
            date: self.current_date,
            step: self.step,
            interval_count: self.interval_count,
            range,
            caption: format_caption(
                &range,
                self.step,
                self.localizer.as_ref(),
                self.short_date_format,
            ),
            day_count: range.day_count(),
            previous_enabled: self.target(&params, Direction::Backward).is_some(),
            next_enabled: self.target(&params, Direction::Forward).is_some(),
            min: self.min,
            max: self.max,
        }
    }
}

/// Multi-month pages start with the month after `date`.
fn anchor_for(date: NaiveDate, params: &StepParams) -> NaiveDate {
    if params.step == ViewStep::Month && params.interval_count > 1 {
        shift_month_clamped(date, 1)
    } else {
        date
    }
}

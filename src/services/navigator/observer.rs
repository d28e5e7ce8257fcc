use chrono::NaiveDate;

/// Receives the navigator's date after every navigation or date pick.
#[cfg_attr(test, mockall::automock)]
pub trait NavigatorObserver {
    fn current_date_updated(&mut self, date: NaiveDate);
}

/// Observer that only records date changes in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl NavigatorObserver for LoggingObserver {
    fn current_date_updated(&mut self, date: NaiveDate) {
        log::info!("Current date updated to {}", date);
    }
}

// Scheduler Navigator Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod utils;

pub use models::date_range::DateRange;
pub use models::settings::NavigatorSettings;
pub use models::step::ViewStep;
pub use services::navigator::{DateStepNavigator, NavigatorError, NavigatorSnapshot};

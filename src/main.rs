// Scheduler Navigator
// Command line entry point

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};

use scheduler_navigator::models::settings::NavigatorSettings;
use scheduler_navigator::services::navigator::{
    DateStepNavigator, LoggingObserver, NavigatorSnapshot,
};
use scheduler_navigator::services::settings::SettingsService;

#[derive(Parser)]
#[command(name = "scheduler-navigator")]
#[command(about = "Page through scheduler dates and print the navigator caption")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Current date, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// day, week, workWeek, month or agenda
    #[arg(short, long)]
    step: Option<String>,

    #[arg(short, long)]
    interval_count: Option<u32>,

    /// 0 = Sunday ... 6 = Saturday
    #[arg(short, long)]
    first_day_of_week: Option<u8>,

    #[arg(long)]
    min: Option<NaiveDate>,

    #[arg(long)]
    max: Option<NaiveDate>,

    /// Agenda length in days (0 means the 7-day default)
    #[arg(short, long)]
    agenda_duration: Option<u32>,

    /// Abbreviated month names in captions
    #[arg(long)]
    short: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save: bool,

    /// Navigation applied in order
    #[arg(value_enum)]
    actions: Vec<Action>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Action {
    Next,
    Prev,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Starting Scheduler Navigator");

    let service = match &cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location()?,
    };
    let settings = apply_overrides(service.get()?, &cli);

    let today = Local::now().date_naive();
    let mut navigator = DateStepNavigator::from_settings(&settings, cli.date.unwrap_or(today))
        .context("Invalid navigator settings")?;
    navigator.subscribe(LoggingObserver);

    for action in &cli.actions {
        let moved = match action {
            Action::Next => navigator.move_forward(),
            Action::Prev => navigator.move_backward(),
        };
        if moved.is_none() {
            log::warn!("Skipping {:?}: the page would fall outside min/max", action);
        }
    }

    if cli.save {
        service.update(&settings)?;
    }

    print_snapshot(&navigator.snapshot(), cli.json)
}

fn apply_overrides(mut settings: NavigatorSettings, cli: &Cli) -> NavigatorSettings {
    if let Some(step) = &cli.step {
        settings.step = step.clone();
    }
    if let Some(count) = cli.interval_count {
        settings.interval_count = count;
    }
    if let Some(day) = cli.first_day_of_week {
        settings.first_day_of_week = day;
    }
    if cli.min.is_some() {
        settings.min = cli.min;
    }
    if cli.max.is_some() {
        settings.max = cli.max;
    }
    if cli.agenda_duration.is_some() {
        settings.agenda_duration = cli.agenda_duration;
    }
    if cli.short {
        settings.short_date_format = true;
    }
    settings
}

fn print_snapshot(snapshot: &NavigatorSnapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    println!("{}", snapshot.caption);
    println!(
        "{} x{}: {} .. {} ({} days)",
        snapshot.step,
        snapshot.interval_count,
        snapshot.range.start,
        snapshot.range.end,
        snapshot.day_count
    );
    println!(
        "previous: {}, next: {}",
        enabled_label(snapshot.previous_enabled),
        enabled_label(snapshot.next_enabled)
    );
    Ok(())
}

fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

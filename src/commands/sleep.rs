use chrono::NaiveDate;
use clap::Subcommand;

use crate::error::{AppError, Result};
use crate::stats;

use super::App;

#[derive(Subcommand)]
pub enum SleepAction {
    /// Log a night of sleep
    Add {
        /// Hours slept (fractions allowed)
        hours: f64,
        /// Quality: poor, okay, good, or great
        #[arg(long, default_value = "good")]
        quality: String,
        /// Entry date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show sleep history, newest first, with the average
    List,
    /// Delete one sleep entry
    Delete { id: String },
    /// Delete every sleep entry
    Clear {
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(app: &App, action: SleepAction) -> Result<()> {
    app.require_user()?;

    match action {
        SleepAction::Add { hours, quality, date } => {
            if hours <= 0.0 {
                return Err(AppError::Validation(
                    "hours slept must be greater than zero".to_string(),
                ));
            }
            let quality = quality.parse().map_err(AppError::Validation)?;
            let entry = app.sleep.add(date.unwrap_or(app.today), hours, quality);
            println!("Logged {} hrs ({}) for {}.", entry.hours, entry.quality, entry.date);
        }
        SleepAction::List => {
            let mut entries = app.sleep.all();
            if entries.is_empty() {
                println!("No sleep entries logged yet.");
                return Ok(());
            }
            let hours: Vec<f64> = entries.iter().map(|e| e.hours).collect();
            entries.sort_by(|a, b| b.date.cmp(&a.date));
            for entry in &entries {
                println!(
                    "{}  {:>4} hrs  {:<5}  [{}]",
                    entry.date, entry.hours, entry.quality, entry.id
                );
            }
            if let Some(avg) = stats::average(&hours) {
                println!("Average: {avg} hrs over {} night(s).", hours.len());
            }
        }
        SleepAction::Delete { id } => {
            if app.sleep.delete(&id) {
                println!("Sleep entry deleted.");
            } else {
                println!("No sleep entry with id {id}.");
            }
        }
        SleepAction::Clear { yes } => {
            if !app.confirmed(yes, "Clear all sleep entries? This cannot be undone.") {
                println!("Kept.");
                return Ok(());
            }
            app.sleep.clear();
            println!("All sleep entries cleared.");
        }
    }
    Ok(())
}

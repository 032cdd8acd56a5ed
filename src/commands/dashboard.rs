use chrono::Duration;
use clap::Subcommand;

use crate::error::{AppError, Result};
use crate::models::DailyChecklist;
use crate::stats;

use super::App;

#[derive(Subcommand)]
pub enum DashboardAction {
    /// Summary of workouts, sleep, and reflections
    Show,
    /// Toggle a daily checklist item: workout, sleep, or journal
    Check { field: String },
}

/// Checklist defaults for today: a workout or journal entry dated today, a
/// sleep entry dated yesterday (last night's sleep).
fn computed_checklist(app: &App) -> DailyChecklist {
    let yesterday = app.today - Duration::days(1);
    DailyChecklist {
        workout: app.workouts.all().iter().any(|w| w.date == app.today),
        sleep: app.sleep.all().iter().any(|s| s.date == yesterday),
        journal: app.journal.all().iter().any(|j| j.date == app.today),
    }
}

pub fn run(app: &App, action: DashboardAction) -> Result<()> {
    let user = app.require_user()?;

    match action {
        DashboardAction::Show => {
            let workouts = app.workouts.all();
            let sleep = app.sleep.all();
            let journal = app.journal.all();

            println!("Dashboard — {}\n", user.email);

            match workouts.last() {
                Some(last) => {
                    let dates: Vec<_> = workouts.iter().map(|w| w.date).collect();
                    println!(
                        "Last workout:   {} ({} exercise(s)) · streak {} day(s)",
                        last.date,
                        last.exercises.len(),
                        stats::streak(&dates)
                    );
                }
                None => println!("Last workout:   none yet — log one to start a streak"),
            }

            let hours: Vec<f64> = sleep.iter().map(|s| s.hours).collect();
            match stats::average(&hours) {
                Some(avg) => {
                    let dates: Vec<_> = sleep.iter().map(|s| s.date).collect();
                    println!(
                        "Average sleep:  {avg} hrs over {} night(s) · streak {} day(s)",
                        hours.len(),
                        stats::streak(&dates)
                    );
                }
                None => println!("Average sleep:  — add entries to start a streak"),
            }

            match journal.last() {
                Some(latest) => {
                    let dates: Vec<_> = journal.iter().map(|j| j.date).collect();
                    println!(
                        "Latest journal: \"{}\" ({}) · streak {} day(s)",
                        latest.title,
                        latest.date,
                        stats::streak(&dates)
                    );
                }
                None => println!("Latest journal: none yet — write a reflection"),
            }

            let checklist = app.checklist.effective(app.today, computed_checklist(app));
            println!("\nToday's checklist ({})", app.today);
            println!("  [{}] log a workout", if checklist.workout { "x" } else { " " });
            println!("  [{}] track last night's sleep", if checklist.sleep { "x" } else { " " });
            println!("  [{}] write a journal entry", if checklist.journal { "x" } else { " " });

            let recent_workouts = workouts
                .iter()
                .filter(|w| stats::within_last_days(w.date, app.today, 6))
                .count();
            let recent_hours: Vec<f64> = sleep
                .iter()
                .filter(|s| stats::within_last_days(s.date, app.today, 6))
                .map(|s| s.hours)
                .collect();
            let recent_journal = journal
                .iter()
                .filter(|j| stats::within_last_days(j.date, app.today, 6))
                .count();

            println!("\nThis week (last 7 days)");
            println!("  Workouts:  {recent_workouts}");
            match stats::average(&recent_hours) {
                Some(avg) => println!("  Avg sleep: {avg} hrs over {} night(s)", recent_hours.len()),
                None => println!("  Avg sleep: —"),
            }
            println!("  Journal:   {recent_journal} entry(ies)");
        }
        DashboardAction::Check { field } => {
            let field = field.parse().map_err(AppError::Validation)?;
            let updated = app.checklist.toggle(app.today, field, computed_checklist(app));
            println!(
                "{} for {} is now {}.",
                field,
                app.today,
                if updated.get(field) { "done" } else { "not done" }
            );
        }
    }
    Ok(())
}

use clap::Subcommand;

use crate::error::Result;
use crate::stats;

use super::App;

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Weekly workout and sleep trends
    Show,
    /// Clear all progress data (workouts and sleep)
    Clear {
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(app: &App, action: ProgressAction) -> Result<()> {
    app.require_user()?;

    match action {
        ProgressAction::Show => {
            let workouts = app.workouts.all();
            let sleep = app.sleep.all();

            println!("Workouts per week");
            let buckets = stats::workouts_per_week(&workouts);
            if buckets.is_empty() {
                println!("  No workouts logged yet.");
            } else {
                for bucket in &buckets {
                    println!(
                        "  {:<8} {} {}",
                        bucket.label,
                        "#".repeat(bucket.count as usize),
                        bucket.count
                    );
                }
            }

            println!("\nWorkout frequency by week of year");
            let dates: Vec<_> = workouts.iter().map(|w| w.date).collect();
            let frequency = stats::weekly_frequency(&dates);
            if frequency.is_empty() {
                println!("  Log some workouts to see this chart.");
            } else {
                for (label, count) in &frequency {
                    println!("  {:<9} {} {}", label, "#".repeat(*count as usize), count);
                }
            }

            println!("\nSleep hours over time");
            let series = stats::sleep_series(&sleep);
            if series.is_empty() {
                println!("  Add sleep entries to see your patterns.");
            } else {
                for (date, hours) in &series {
                    let bar = "#".repeat(hours.round().max(0.0) as usize);
                    println!("  {date}  {bar} {hours}");
                }
            }
        }
        ProgressAction::Clear { yes } => {
            let prompt = "Clear all progress data (workouts and sleep)? This cannot be undone.";
            if !app.confirmed(yes, prompt) {
                println!("Kept.");
                return Ok(());
            }
            app.workouts.clear();
            app.sleep.clear();
            println!("All progress data cleared.");
        }
    }
    Ok(())
}

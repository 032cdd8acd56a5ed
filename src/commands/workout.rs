use chrono::NaiveDate;
use clap::Subcommand;

use crate::error::{AppError, Result};
use crate::models::{Exercise, ExerciseSet, WorkoutSession};

use super::App;

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Log a workout session
    Add {
        /// Exercises as NAME[:SETSxREPS[@WEIGHT]], e.g. "Bench Press:3x10@135"
        #[arg(required = true)]
        exercises: Vec<String>,
        /// Session date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Session name, e.g. "Push Day"
        #[arg(long)]
        name: Option<String>,
    },
    /// Show workout history, newest first
    List,
    /// Re-save a session with new details (full replacement)
    Edit {
        id: String,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        name: Option<String>,
        /// Replacement exercises; the previous list is discarded when given
        exercises: Vec<String>,
    },
    /// Delete one workout session
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Delete every workout session
    Clear {
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(app: &App, action: WorkoutAction) -> Result<()> {
    app.require_user()?;

    match action {
        WorkoutAction::Add { exercises, date, name } => {
            let exercises = parse_exercises(&exercises)?;
            let session = app.workouts.add(
                date.unwrap_or(app.today),
                name.as_deref().unwrap_or(""),
                exercises,
            );
            println!(
                "Saved {} on {} ({} exercise(s)).",
                session.name,
                session.date,
                session.exercises.len()
            );
        }
        WorkoutAction::List => {
            let mut sessions = app.workouts.all();
            if sessions.is_empty() {
                println!("No workouts logged yet.");
                return Ok(());
            }
            sessions.sort_by(|a, b| b.date.cmp(&a.date));
            for session in &sessions {
                print_session(session);
            }
        }
        WorkoutAction::Edit { id, date, name, exercises } => {
            let current = app
                .workouts
                .all()
                .into_iter()
                .find(|s| s.id == id)
                .ok_or_else(|| AppError::NotFound(format!("workout {id}")))?;

            let replacement = WorkoutSession {
                id: current.id.clone(),
                date: date.unwrap_or(current.date),
                name: name.unwrap_or(current.name),
                exercises: if exercises.is_empty() {
                    current.exercises
                } else {
                    parse_exercises(&exercises)?
                },
            };
            app.workouts.replace(replacement);
            println!("Workout updated.");
        }
        WorkoutAction::Delete { id, yes } => {
            if !app.confirmed(yes, "Delete this workout?") {
                println!("Kept.");
                return Ok(());
            }
            if app.workouts.delete(&id) {
                println!("Workout deleted.");
            } else {
                println!("No workout with id {id}.");
            }
        }
        WorkoutAction::Clear { yes } => {
            if !app.confirmed(yes, "Clear all workouts? This cannot be undone.") {
                println!("Kept.");
                return Ok(());
            }
            app.workouts.clear();
            println!("All workouts cleared.");
        }
    }
    Ok(())
}

fn parse_exercises(specs: &[String]) -> Result<Vec<Exercise>> {
    if specs.is_empty() {
        return Err(AppError::Validation(
            "a workout needs at least one exercise".to_string(),
        ));
    }
    specs.iter().map(|s| parse_exercise(s)).collect()
}

/// NAME[:SETSxREPS[@WEIGHT]]: "Squat", "Squat:5x5", "Squat:5x5@225".
fn parse_exercise(spec: &str) -> Result<Exercise> {
    let (name, plan) = match spec.split_once(':') {
        Some((name, plan)) => (name, Some(plan)),
        None => (spec, None),
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation(
            "exercise name must not be empty".to_string(),
        ));
    }

    let Some(plan) = plan else {
        return Ok(Exercise::new(name, vec![ExerciseSet::default()]));
    };

    let (volume, weight) = match plan.split_once('@') {
        Some((volume, weight)) => (volume, Some(weight)),
        None => (plan, None),
    };
    let (count, reps) = match volume.split_once('x') {
        Some((count, reps)) => (count, Some(reps)),
        None => (volume, None),
    };

    let count: u32 = count
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid set count in '{spec}'")))?;
    let reps: Option<u32> = reps
        .map(|r| r.trim().parse())
        .transpose()
        .map_err(|_| AppError::Validation(format!("invalid rep count in '{spec}'")))?;
    let weight: Option<f64> = weight
        .map(|w| w.trim().parse())
        .transpose()
        .map_err(|_| AppError::Validation(format!("invalid weight in '{spec}'")))?;

    let sets = (0..count.max(1))
        .map(|_| ExerciseSet { weight, reps, notes: None })
        .collect();
    Ok(Exercise::new(name, sets))
}

fn print_session(session: &WorkoutSession) {
    println!("{}  {}  [{}]", session.date, session.name, session.id);
    for exercise in &session.exercises {
        let summary: Vec<String> = exercise
            .sets
            .iter()
            .map(|set| match (set.reps, set.weight) {
                (Some(reps), Some(weight)) => format!("{reps}x{weight}"),
                (Some(reps), None) => format!("{reps} reps"),
                (None, Some(weight)) => format!("@{weight}"),
                (None, None) => "-".to_string(),
            })
            .collect();
        println!("    {} ({} set(s)): {}", exercise.name, exercise.sets.len(), summary.join(", "));
    }
}

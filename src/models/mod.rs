pub mod checklist;
pub mod journal;
pub mod sleep;
pub mod workout;

pub use checklist::{ChecklistField, DailyChecklist};
pub use journal::JournalEntry;
pub use sleep::{SleepEntry, SleepQuality};
pub use workout::{Exercise, ExerciseSet, WorkoutSession};

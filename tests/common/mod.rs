#![allow(dead_code)]

use chrono::NaiveDate;

use formfit::models::{Exercise, ExerciseSet};
use formfit::repositories::{
    ChecklistRepository, JournalRepository, SleepRepository, WorkoutRepository,
};
use formfit::store::Store;

pub fn memory_store() -> Store {
    Store::memory()
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

pub fn bench_press() -> Exercise {
    Exercise::new(
        "Bench Press",
        vec![
            ExerciseSet {
                weight: Some(135.0),
                reps: Some(10),
                notes: None,
            },
            ExerciseSet {
                weight: Some(155.0),
                reps: Some(8),
                notes: Some("felt heavy".to_string()),
            },
        ],
    )
}

pub fn workout_repo(store: &Store) -> WorkoutRepository {
    WorkoutRepository::new(store.clone())
}

pub fn sleep_repo(store: &Store) -> SleepRepository {
    SleepRepository::new(store.clone())
}

pub fn journal_repo(store: &Store) -> JournalRepository {
    JournalRepository::new(store.clone())
}

pub fn checklist_repo(store: &Store) -> ChecklistRepository {
    ChecklistRepository::new(store.clone())
}

pub mod checklist_repo;
pub mod journal_repo;
pub mod sleep_repo;
pub mod workout_repo;

pub use checklist_repo::ChecklistRepository;
pub use journal_repo::JournalRepository;
pub use sleep_repo::SleepRepository;
pub use workout_repo::WorkoutRepository;

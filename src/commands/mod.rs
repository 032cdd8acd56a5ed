pub mod auth;
pub mod dashboard;
pub mod journal;
pub mod progress;
pub mod sleep;
pub mod workout;

use chrono::NaiveDate;

use crate::auth::{AuthUser, SessionGate, StoredIdentityProvider};
use crate::confirm::{ConfirmationGate, TerminalGate};
use crate::error::Result;
use crate::repositories::{
    ChecklistRepository, JournalRepository, SleepRepository, WorkoutRepository,
};
use crate::store::Store;

/// Everything a command needs: the domain repositories, the identity
/// provider, the confirmation gate for destructive actions, and the
/// injected current date.
pub struct App {
    pub workouts: WorkoutRepository,
    pub sleep: SleepRepository,
    pub journal: JournalRepository,
    pub checklist: ChecklistRepository,
    pub provider: StoredIdentityProvider,
    pub confirmation: Box<dyn ConfirmationGate>,
    pub today: NaiveDate,
}

impl App {
    pub fn new(store: Store, today: NaiveDate) -> Self {
        Self {
            workouts: WorkoutRepository::new(store.clone()),
            sleep: SleepRepository::new(store.clone()),
            journal: JournalRepository::new(store.clone()),
            checklist: ChecklistRepository::new(store.clone()),
            provider: StoredIdentityProvider::new(store),
            confirmation: Box::new(TerminalGate),
            today,
        }
    }

    pub fn with_confirmation(mut self, gate: Box<dyn ConfirmationGate>) -> Self {
        self.confirmation = gate;
        self
    }

    /// All domain views sit behind the session gate.
    pub fn require_user(&self) -> Result<AuthUser> {
        let gate = SessionGate::resolve(&self.provider);
        gate.require_user().cloned()
    }

    /// `--yes` grants confirmation up front; otherwise the gate decides.
    pub fn confirmed(&self, yes: bool, prompt: &str) -> bool {
        yes || self.confirmation.confirm(prompt)
    }
}

use chrono::NaiveDate;

use crate::models::{Exercise, WorkoutSession};
use crate::store::Store;

const WORKOUTS_KEY: &str = "formfit_workouts";

/// CRUD over the workout collection. The stored array is treated as an
/// immutable snapshot: every mutator loads it, builds a new one, and saves
/// it whole. Validation happens at the calling surface, not here.
#[derive(Clone)]
pub struct WorkoutRepository {
    store: Store,
}

impl WorkoutRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn all(&self) -> Vec<WorkoutSession> {
        self.store.load(WORKOUTS_KEY, Vec::new())
    }

    pub fn add(&self, date: NaiveDate, name: &str, exercises: Vec<Exercise>) -> WorkoutSession {
        let session = WorkoutSession::new(date, name, exercises);
        let mut sessions = self.all();
        sessions.push(session.clone());
        self.store.save(WORKOUTS_KEY, &sessions);
        session
    }

    /// Full-session edit: the record with a matching id is replaced wholesale.
    pub fn replace(&self, session: WorkoutSession) -> bool {
        let mut sessions = self.all();
        let Some(slot) = sessions.iter_mut().find(|s| s.id == session.id) else {
            return false;
        };
        *slot = session;
        self.store.save(WORKOUTS_KEY, &sessions);
        true
    }

    /// Removes at most one session; an unknown id is a no-op.
    pub fn delete(&self, id: &str) -> bool {
        let mut sessions = self.all();
        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        if sessions.len() == before {
            return false;
        }
        self.store.save(WORKOUTS_KEY, &sessions);
        true
    }

    pub fn clear(&self) {
        self.store.save(WORKOUTS_KEY, &Vec::<WorkoutSession>::new());
    }
}

use chrono::NaiveDate;

use crate::models::{SleepEntry, SleepQuality};
use crate::store::Store;

const SLEEP_KEY: &str = "formfit_sleep";

/// Sleep log collection. Entries are created and deleted individually; there
/// is no update-in-place.
#[derive(Clone)]
pub struct SleepRepository {
    store: Store,
}

impl SleepRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn all(&self) -> Vec<SleepEntry> {
        self.store.load(SLEEP_KEY, Vec::new())
    }

    pub fn add(&self, date: NaiveDate, hours: f64, quality: SleepQuality) -> SleepEntry {
        let entry = SleepEntry::new(date, hours, quality);
        let mut entries = self.all();
        entries.push(entry.clone());
        self.store.save(SLEEP_KEY, &entries);
        entry
    }

    pub fn delete(&self, id: &str) -> bool {
        let mut entries = self.all();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return false;
        }
        self.store.save(SLEEP_KEY, &entries);
        true
    }

    pub fn clear(&self) {
        self.store.save(SLEEP_KEY, &Vec::<SleepEntry>::new());
    }
}

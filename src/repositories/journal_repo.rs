use chrono::NaiveDate;

use crate::models::JournalEntry;
use crate::store::Store;

const JOURNAL_KEY: &str = "formfit_journal";

#[derive(Clone)]
pub struct JournalRepository {
    store: Store,
}

impl JournalRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn all(&self) -> Vec<JournalEntry> {
        self.store.load(JOURNAL_KEY, Vec::new())
    }

    pub fn add(&self, date: NaiveDate, title: &str, content: &str) -> JournalEntry {
        let entry = JournalEntry::new(date, title, content);
        let mut entries = self.all();
        entries.push(entry.clone());
        self.store.save(JOURNAL_KEY, &entries);
        entry
    }

    /// Replaces the record with a matching id; every other entry, and the
    /// target's position in the collection, is untouched.
    pub fn update(&self, entry: JournalEntry) -> bool {
        let mut entries = self.all();
        let Some(slot) = entries.iter_mut().find(|e| e.id == entry.id) else {
            return false;
        };
        *slot = entry;
        self.store.save(JOURNAL_KEY, &entries);
        true
    }

    pub fn delete(&self, id: &str) -> bool {
        let mut entries = self.all();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return false;
        }
        self.store.save(JOURNAL_KEY, &entries);
        true
    }

    pub fn clear(&self) {
        self.store.save(JOURNAL_KEY, &Vec::<JournalEntry>::new());
    }
}

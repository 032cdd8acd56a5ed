use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{ChecklistField, DailyChecklist};
use crate::store::Store;

const CHECKLIST_KEY: &str = "formfit_daily_checklist";

/// Per-date checklist overrides. A date with no stored record shows the
/// computed default; the first toggle persists the whole record for that
/// date, and from then on the stored record wins over any recomputed
/// default, even if the underlying domain data changes later.
#[derive(Clone)]
pub struct ChecklistRepository {
    store: Store,
}

impl ChecklistRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn overrides(&self) -> BTreeMap<NaiveDate, DailyChecklist> {
        self.store.load(CHECKLIST_KEY, BTreeMap::new())
    }

    pub fn effective(&self, date: NaiveDate, default: DailyChecklist) -> DailyChecklist {
        self.overrides().get(&date).copied().unwrap_or(default)
    }

    /// Flips one field and persists the entire resulting record under the
    /// date key. Last write wins, sticky.
    pub fn toggle(
        &self,
        date: NaiveDate,
        field: ChecklistField,
        default: DailyChecklist,
    ) -> DailyChecklist {
        let mut overrides = self.overrides();
        let current = overrides.get(&date).copied().unwrap_or(default);
        let updated = current.toggled(field);
        overrides.insert(date, updated);
        self.store.save(CHECKLIST_KEY, &overrides);
        updated
    }
}

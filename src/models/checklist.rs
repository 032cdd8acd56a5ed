use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Per-date record of the three daily habits. Defaults are computed from the
/// domain collections; a persisted record is a user override that sticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChecklist {
    pub workout: bool,
    pub sleep: bool,
    pub journal: bool,
}

impl DailyChecklist {
    pub fn toggled(mut self, field: ChecklistField) -> Self {
        match field {
            ChecklistField::Workout => self.workout = !self.workout,
            ChecklistField::Sleep => self.sleep = !self.sleep,
            ChecklistField::Journal => self.journal = !self.journal,
        }
        self
    }

    pub fn get(&self, field: ChecklistField) -> bool {
        match field {
            ChecklistField::Workout => self.workout,
            ChecklistField::Sleep => self.sleep,
            ChecklistField::Journal => self.journal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistField {
    Workout,
    Sleep,
    Journal,
}

impl fmt::Display for ChecklistField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChecklistField::Workout => "workout",
            ChecklistField::Sleep => "sleep",
            ChecklistField::Journal => "journal",
        };
        f.write_str(label)
    }
}

impl FromStr for ChecklistField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "workout" => Ok(ChecklistField::Workout),
            "sleep" => Ok(ChecklistField::Sleep),
            "journal" => Ok(ChecklistField::Journal),
            other => Err(format!("unknown checklist field: {other}")),
        }
    }
}

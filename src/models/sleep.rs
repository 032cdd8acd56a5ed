use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepEntry {
    pub id: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub quality: SleepQuality,
}

impl SleepEntry {
    pub fn new(date: NaiveDate, hours: f64, quality: SleepQuality) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            hours,
            quality,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepQuality {
    Poor,
    Okay,
    Good,
    Great,
}

impl fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SleepQuality::Poor => "Poor",
            SleepQuality::Okay => "Okay",
            SleepQuality::Good => "Good",
            SleepQuality::Great => "Great",
        };
        f.write_str(label)
    }
}

impl FromStr for SleepQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "poor" => Ok(SleepQuality::Poor),
            "okay" => Ok(SleepQuality::Okay),
            "good" => Ok(SleepQuality::Good),
            "great" => Ok(SleepQuality::Great),
            other => Err(format!("unknown sleep quality: {other}")),
        }
    }
}

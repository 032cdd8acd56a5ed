use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Deserialize an optional number from a value that may be a number, a
/// numeric string, or an empty string (older records stored raw form input).
fn deserialize_flexible<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr + Deserialize<'de>,
    T::Err: std::fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Number(T),
        Text(String),
    }

    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: String,
    pub date: NaiveDate,
    pub name: String,
    pub exercises: Vec<Exercise>,
}

impl WorkoutSession {
    pub fn new(date: NaiveDate, name: &str, exercises: Vec<Exercise>) -> Self {
        let name = name.trim();
        Self {
            id: new_id(),
            date,
            name: if name.is_empty() { "Workout".to_string() } else { name.to_string() },
            exercises,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: Vec<ExerciseSet>,
}

impl Exercise {
    pub fn new(name: &str, sets: Vec<ExerciseSet>) -> Self {
        Self {
            id: new_id(),
            name: name.trim().to_string(),
            sets,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    #[serde(default, deserialize_with = "deserialize_flexible")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_flexible")]
    pub reps: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Two exercise shapes exist in stored data: the current one with a list of
/// sets, and a legacy flat one where sets/reps/weight are scalars on the
/// exercise itself. Reads accept both; writes always emit the current shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum ExerciseRepr {
    WithSets {
        #[serde(default = "new_id")]
        id: String,
        name: String,
        sets: Vec<ExerciseSet>,
    },
    Flat {
        #[serde(default = "new_id")]
        id: String,
        name: String,
        #[serde(default, deserialize_with = "deserialize_flexible")]
        sets: Option<u32>,
        #[serde(default, deserialize_with = "deserialize_flexible")]
        reps: Option<u32>,
        #[serde(default, deserialize_with = "deserialize_flexible")]
        weight: Option<f64>,
        #[serde(default)]
        notes: Option<String>,
    },
}

impl<'de> Deserialize<'de> for Exercise {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let exercise = match ExerciseRepr::deserialize(deserializer)? {
            ExerciseRepr::WithSets { id, name, sets } => Exercise { id, name, sets },
            ExerciseRepr::Flat { id, name, sets, reps, weight, notes } => {
                let count = sets.unwrap_or(1).max(1) as usize;
                let rows = (0..count)
                    .map(|i| ExerciseSet {
                        weight,
                        reps,
                        notes: if i == 0 { notes.clone().filter(|n| !n.is_empty()) } else { None },
                    })
                    .collect();
                Exercise { id, name, sets: rows }
            }
        };
        Ok(exercise)
    }
}

//! Derived views over the domain collections: streaks, weekly windows,
//! per-week bucketing, and averages.
//!
//! Everything here is pure. "Today" is always an explicit parameter so the
//! dashboard numbers are reproducible in tests.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{SleepEntry, WorkoutSession};

/// Length of the run of consecutive calendar days ending at the most recent
/// date present. Duplicate dates count once; an empty input has no streak.
pub fn streak(dates: &[NaiveDate]) -> u32 {
    let mut unique: Vec<NaiveDate> = dates.to_vec();
    unique.sort_unstable();
    unique.dedup();
    unique.reverse();

    let Some(&latest) = unique.first() else {
        return 0;
    };

    let mut run = 1;
    let mut prev = latest;
    for &current in &unique[1..] {
        if prev - current == Duration::days(1) {
            run += 1;
            prev = current;
        } else {
            break;
        }
    }
    run
}

/// Whether `date` falls within the last `n` days counting back from `today`,
/// inclusive at both ends. `n = 6` gives "last 7 days including today".
pub fn within_last_days(date: NaiveDate, today: NaiveDate, n: i64) -> bool {
    let diff = (today - date).num_days();
    (0..=n).contains(&diff)
}

/// Week-of-year label for the frequency chart, e.g. "W12 2025".
pub fn week_of_year_label(date: NaiveDate) -> String {
    let week = date.ordinal0() / 7 + 1;
    format!("W{week} {}", date.year())
}

/// Counts per week-of-year label, in first-occurrence order.
pub fn weekly_frequency(dates: &[NaiveDate]) -> Vec<(String, u32)> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    for &date in dates {
        let label = week_of_year_label(date);
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts
}

/// The Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket {
    pub week_start: NaiveDate,
    pub label: String,
    pub count: u32,
}

/// Workout counts bucketed by Monday-anchored week start, in chronological
/// order, labeled with a short human date like "Nov 24".
pub fn workouts_per_week(sessions: &[WorkoutSession]) -> Vec<WeekBucket> {
    let mut buckets: Vec<WeekBucket> = Vec::new();
    for session in sessions {
        let start = week_start(session.date);
        match buckets.iter_mut().find(|b| b.week_start == start) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(WeekBucket {
                week_start: start,
                label: start.format("%b %-d").to_string(),
                count: 1,
            }),
        }
    }
    buckets.sort_by_key(|b| b.week_start);
    buckets
}

/// Arithmetic mean rounded to one decimal place for display. An empty input
/// has no average, rather than an average of zero.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Sleep entries as chronological (date, hours) chart points.
pub fn sleep_series(entries: &[SleepEntry]) -> Vec<(NaiveDate, f64)> {
    let mut points: Vec<(NaiveDate, f64)> = entries.iter().map(|e| (e.date, e.hours)).collect();
    points.sort_by_key(|(date, _)| *date);
    points
}

//! Weekly demand profile.
//!
//! Maps each hour of the week to an expected customer-traffic score in
//! `[0, 1]`. Hours are indexed `weekday * 24 + hour_of_day` (Monday = 0,
//! so valid indices are 0–167). Hours without an entry fall back to a
//! neutral score rather than erroring — an incomplete profile degrades
//! the plan, it never breaks it.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Fallback score for hours with no profile entry.
pub const NEUTRAL_DEMAND: f64 = 0.5;

/// Hours in a week; valid demand indices are `0..HOURS_PER_WEEK`.
pub const HOURS_PER_WEEK: u32 = 168;

/// A weekly-hour → demand-score table.
///
/// Read-only once constructed. Scores clamp to `[0, 1]` on insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemandTable {
    scores: HashMap<u32, f64>,
}

impl DemandTable {
    /// Creates an empty table (every hour reads as [`NEUTRAL_DEMAND`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(hour_index, score)` pairs.
    pub fn from_scores(scores: impl IntoIterator<Item = (u32, f64)>) -> Self {
        let mut table = Self::new();
        for (index, score) in scores {
            table.set(index, score);
        }
        table
    }

    /// Builds a full-week table by repeating an hour-of-day pattern
    /// across all seven weekdays.
    ///
    /// `pattern(hour_of_day)` is queried for hours 0–23 and the result
    /// applied to every weekday.
    pub fn from_daily_pattern(pattern: impl Fn(u32) -> f64) -> Self {
        let mut table = Self::new();
        for hour_index in 0..HOURS_PER_WEEK {
            table.set(hour_index, pattern(hour_index % 24));
        }
        table
    }

    /// Sets the score for a weekly hour, clamped to `[0, 1]`.
    pub fn set(&mut self, hour_index: u32, score: f64) {
        self.scores.insert(hour_index, score.clamp(0.0, 1.0));
    }

    /// Sets a score (builder form).
    pub fn with_score(mut self, hour_index: u32, score: f64) -> Self {
        self.set(hour_index, score);
        self
    }

    /// Demand score for a weekly hour.
    ///
    /// Missing entries fall back to [`NEUTRAL_DEMAND`] explicitly.
    pub fn score(&self, hour_index: u32) -> f64 {
        match self.scores.get(&hour_index) {
            Some(&score) => score,
            None => NEUTRAL_DEMAND,
        }
    }

    /// Weekly-hour index for a timestamp: `weekday * 24 + hour`,
    /// Monday-based.
    #[inline]
    pub fn hour_index(t: NaiveDateTime) -> u32 {
        t.weekday().num_days_from_monday() * 24 + t.hour()
    }

    /// Mean demand over `[start, end)`.
    ///
    /// Walks the interval in 1-hour steps from `start`, averaging the
    /// score of each whole hour traversed. An interval containing no
    /// whole hours yields [`NEUTRAL_DEMAND`].
    pub fn average_over(&self, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
        let mut total = 0.0;
        let mut hours = 0u32;

        let mut current = start;
        while current < end {
            total += self.score(Self::hour_index(current));
            hours += 1;
            current += Duration::hours(1);
        }

        if hours > 0 {
            total / f64::from(hours)
        } else {
            NEUTRAL_DEMAND
        }
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the table has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // 2024-01-01 is a Monday.
    fn monday(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_hour_index_monday_based() {
        assert_eq!(DemandTable::hour_index(monday(0)), 0);
        assert_eq!(DemandTable::hour_index(monday(9)), 9);

        // Tuesday 09:00 → 24 + 9
        let tuesday = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(DemandTable::hour_index(tuesday), 33);

        // Sunday 23:00 → last index of the week
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        assert_eq!(DemandTable::hour_index(sunday), 167);
    }

    #[test]
    fn test_missing_hours_fall_back_to_neutral() {
        let table = DemandTable::new();
        assert!((table.score(0) - NEUTRAL_DEMAND).abs() < 1e-10);
        assert!((table.score(167) - NEUTRAL_DEMAND).abs() < 1e-10);
    }

    #[test]
    fn test_scores_clamp_on_insertion() {
        let table = DemandTable::new()
            .with_score(9, 1.5)
            .with_score(10, -0.3);
        assert!((table.score(9) - 1.0).abs() < 1e-10);
        assert!((table.score(10) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_average_over_walks_whole_hours() {
        let table = DemandTable::new()
            .with_score(6, 0.4)
            .with_score(7, 0.8);
        let avg = table.average_over(monday(6), monday(8));
        assert!((avg - 0.6).abs() < 1e-10);
    }

    #[test]
    fn test_average_over_uses_fallback_for_gaps() {
        // Hour 6 set, hour 7 missing → (0.9 + 0.5) / 2
        let table = DemandTable::new().with_score(6, 0.9);
        let avg = table.average_over(monday(6), monday(8));
        assert!((avg - 0.7).abs() < 1e-10);
    }

    #[test]
    fn test_average_over_empty_interval_is_neutral() {
        let table = DemandTable::new().with_score(6, 0.9);
        assert!((table.average_over(monday(6), monday(6)) - NEUTRAL_DEMAND).abs() < 1e-10);
        // Inverted interval walks zero hours as well
        assert!((table.average_over(monday(8), monday(6)) - NEUTRAL_DEMAND).abs() < 1e-10);
    }

    #[test]
    fn test_average_bounded_by_hourly_extremes() {
        let table = DemandTable::new()
            .with_score(6, 0.2)
            .with_score(7, 0.9)
            .with_score(8, 0.6);
        let avg = table.average_over(monday(6), monday(9));
        assert!(avg >= 0.2 && avg <= 0.9);
    }

    #[test]
    fn test_from_daily_pattern_repeats_across_weekdays() {
        let table = DemandTable::from_daily_pattern(|hour| match hour {
            7..=9 => 0.8,
            _ => 0.2,
        });
        assert_eq!(table.len(), 168);
        // Monday 08:00 and Thursday 08:00 share the pattern
        assert!((table.score(8) - 0.8).abs() < 1e-10);
        assert!((table.score(3 * 24 + 8) - 0.8).abs() < 1e-10);
        assert!((table.score(3 * 24 + 2) - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_demand_table_serde_roundtrip() {
        let table = DemandTable::from_scores([(9, 0.8), (14, 0.6)]);
        let json = serde_json::to_string(&table).unwrap();
        let back: DemandTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}

//! Worker model.
//!
//! A worker is a staff member with an hourly cost rate and a single
//! contiguous availability interval. Workers are immutable once created
//! and owned by the caller; shifts reference them without copying.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A staff member available for shift assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Worker identity.
    pub name: String,
    /// Economic cost per hour. Non-negative.
    pub hourly_rate: f64,
    /// Earliest instant this worker can start (inclusive).
    pub available_start: NaiveDateTime,
    /// Latest instant this worker can work until (inclusive).
    pub available_end: NaiveDateTime,
}

impl Worker {
    /// Creates a new worker.
    pub fn new(
        name: impl Into<String>,
        hourly_rate: f64,
        available_start: NaiveDateTime,
        available_end: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            hourly_rate,
            available_start,
            available_end,
        }
    }

    /// Whether this worker's availability fully covers `[start, end)`.
    ///
    /// Partial overlap does not count: a worker is assignable only when
    /// the whole window fits inside the availability interval.
    #[inline]
    pub fn covers(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.available_start <= start && self.available_end >= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_worker_new() {
        let w = Worker::new("Alice", 15.0, at(6), at(22));
        assert_eq!(w.name, "Alice");
        assert!((w.hourly_rate - 15.0).abs() < 1e-10);
        assert_eq!(w.available_start, at(6));
        assert_eq!(w.available_end, at(22));
    }

    #[test]
    fn test_covers_full_window() {
        let w = Worker::new("Bob", 12.0, at(8), at(20));
        assert!(w.covers(at(8), at(20))); // exact fit
        assert!(w.covers(at(10), at(12))); // strictly inside
    }

    #[test]
    fn test_covers_rejects_partial_overlap() {
        let w = Worker::new("Bob", 12.0, at(8), at(20));
        assert!(!w.covers(at(6), at(10))); // starts too early
        assert!(!w.covers(at(18), at(22))); // ends too late
        assert!(!w.covers(at(6), at(22))); // superset of availability
    }

    #[test]
    fn test_worker_serde_roundtrip() {
        let w = Worker::new("Charlie", 18.0, at(10), at(18));
        let json = serde_json::to_string(&w).unwrap();
        let back: Worker = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}

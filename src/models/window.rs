//! Time window model.
//!
//! A half-open interval `[start, end)` produced during scheduling,
//! carrying the demand metadata computed for it: the estimated worker
//! requirement and the mean demand score. Windows are transient — they
//! exist only inside the shifts the planner emits.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A time slot `[start, end)` with computed staffing metadata.
///
/// `needed_workers` and `demand` are derived by the planner, not caller
/// input; every shift emitted for the same leaf shares the same values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Slot start (inclusive).
    pub start: NaiveDateTime,
    /// Slot end (exclusive).
    pub end: NaiveDateTime,
    /// Estimated worker headcount for this slot.
    pub needed_workers: usize,
    /// Mean demand score over the slot (0.0..=1.0).
    pub demand: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        needed_workers: usize,
        demand: f64,
    ) -> Self {
        Self {
            start,
            end,
            needed_workers,
            demand,
        }
    }

    /// Duration of this window in fractional hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        t >= self.start && t < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

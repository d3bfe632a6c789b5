//! Shift model.
//!
//! A shift records that one worker covers one time window. Shifts borrow
//! the worker from the caller's staff slice rather than copying it, so
//! they are serialize-only.

use std::fmt;

use serde::Serialize;

use super::{TimeWindow, Worker};

/// One worker covering one time window.
///
/// The planner's output is an ordered sequence of shifts: busy-half
/// shifts precede quiet-half shifts at every recursion level, so the
/// order reflects demand priority, not chronology.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shift<'a> {
    /// The assigned worker.
    pub worker: &'a Worker,
    /// The covered window.
    pub window: TimeWindow,
}

impl<'a> Shift<'a> {
    /// Creates a new shift.
    pub fn new(worker: &'a Worker, window: TimeWindow) -> Self {
        Self { worker, window }
    }

    /// Cost of this shift: hourly rate times window duration.
    #[inline]
    pub fn labor_cost(&self) -> f64 {
        self.worker.hourly_rate * self.window.duration_hours()
    }
}

/// Renders as `"<name>: <HH:MM> - <HH:MM>"`, one schedule line.
impl fmt::Display for Shift<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {}",
            self.worker.name,
            self.window.start.format("%H:%M"),
            self.window.end.format("%H:%M"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_labor_cost() {
        let w = Worker::new("Alice", 15.0, at(6), at(22));
        let shift = Shift::new(&w, TimeWindow::new(at(6), at(8), 1, 0.5));
        assert!((shift.labor_cost() - 30.0).abs() < 1e-10); // 15.0 * 2h
    }

    #[test]
    fn test_display_line() {
        let w = Worker::new("Bob", 12.0, at(6), at(22));
        let shift = Shift::new(&w, TimeWindow::new(at(8), at(10), 2, 0.8));
        assert_eq!(shift.to_string(), "Bob: 08:00 - 10:00");
    }

    #[test]
    fn test_shift_serializes() {
        let w = Worker::new("Lam", 14.0, at(5), at(23));
        let shift = Shift::new(&w, TimeWindow::new(at(6), at(8), 1, 0.4));
        let json = serde_json::to_value(&shift).unwrap();
        assert_eq!(json["worker"]["name"], "Lam");
        assert_eq!(json["window"]["needed_workers"], 1);
    }
}

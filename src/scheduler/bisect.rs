//! Recursive busy/quiet bisection scheduler.
//!
//! # Algorithm
//!
//! 1. If the window is at most the minimum shift length, assign staff
//!    directly (greedy, cheapest first).
//! 2. Otherwise bisect at the midpoint and compare mean demand per half.
//!    The strictly-higher half is busy; on a tie the right half is busy.
//! 3. Split the roster into cost tiers and recurse: expensive tier into
//!    the busy half, cheap tier into the quiet half.
//! 4. Concatenate busy-half shifts before quiet-half shifts, so output
//!    order is demand priority, not chronology.
//!
//! Recursion terminates because every step halves the remaining duration;
//! depth is `ceil(log2(duration / min_shift))`, typically under 10.
//!
//! # Complexity
//! O(w log w + s log s · w/m) for w window hours, s staff, leaf size m.

use chrono::NaiveDateTime;

use crate::models::{DemandTable, Shift, TimeWindow, Worker};

/// Default minimum shift length in hours (the recursion base case).
pub const DEFAULT_MIN_SHIFT_HOURS: f64 = 2.0;

/// Headcount per unit of demand at a leaf: `needed = max(1, ⌊demand · 3⌋)`.
const WORKERS_PER_FULL_DEMAND: f64 = 3.0;

/// Demand-driven divide-and-conquer shift planner.
///
/// Holds a read-only weekly [`DemandTable`] and recursively partitions a
/// requested window into shifts. Pure and deterministic: safe to call
/// repeatedly, nothing is mutated after construction.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shift_planner::models::{DemandTable, Worker};
/// use shift_planner::scheduler::ShiftScheduler;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let staff = vec![Worker::new(
///     "Alice",
///     15.0,
///     day.and_hms_opt(6, 0, 0).unwrap(),
///     day.and_hms_opt(22, 0, 0).unwrap(),
/// )];
///
/// let scheduler = ShiftScheduler::new(DemandTable::new());
/// let shifts = scheduler.schedule_shifts(
///     day.and_hms_opt(6, 0, 0).unwrap(),
///     day.and_hms_opt(8, 0, 0).unwrap(),
///     &staff,
/// );
/// assert_eq!(shifts.len(), 1);
/// assert_eq!(shifts[0].to_string(), "Alice: 06:00 - 08:00");
/// ```
#[derive(Debug, Clone)]
pub struct ShiftScheduler {
    demand: DemandTable,
    min_shift_hours: f64,
}

impl ShiftScheduler {
    /// Creates a scheduler over a weekly demand profile.
    pub fn new(demand: DemandTable) -> Self {
        Self {
            demand,
            min_shift_hours: DEFAULT_MIN_SHIFT_HOURS,
        }
    }

    /// Sets the minimum shift length (recursion base case) in hours.
    pub fn with_min_shift_hours(mut self, hours: f64) -> Self {
        self.min_shift_hours = hours;
        self
    }

    /// The demand profile this scheduler plans against.
    pub fn demand(&self) -> &DemandTable {
        &self.demand
    }

    /// Plans shifts for `[start, end)` from the given staff.
    ///
    /// Returns shifts in demand-priority order: at every recursion level
    /// the busy half's shifts precede the quiet half's, regardless of
    /// which half is chronologically first. Understaffing is absorbed
    /// silently — leaves with no covering staff contribute no shifts.
    ///
    /// An empty window (`end <= start`) yields an empty schedule. Use
    /// [`crate::validation::validate_request`] to reject such input
    /// up front instead.
    pub fn schedule_shifts<'a>(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        staff: &'a [Worker],
    ) -> Vec<Shift<'a>> {
        if end <= start {
            return Vec::new();
        }
        let roster: Vec<&Worker> = staff.iter().collect();
        self.schedule_window(start, end, roster)
    }

    fn schedule_window<'a>(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        roster: Vec<&'a Worker>,
    ) -> Vec<Shift<'a>> {
        let duration_hours = (end - start).num_seconds() as f64 / 3600.0;
        if duration_hours <= self.min_shift_hours {
            return self.assign_leaf(start, end, &roster);
        }

        let midpoint = start + (end - start) / 2;
        let left_demand = self.demand.average_over(start, midpoint);
        let right_demand = self.demand.average_over(midpoint, end);

        // Strict comparison: on a tie the right half is busy and the
        // left is quiet. Callers depend on this exact asymmetry.
        let ((busy_start, busy_end), (quiet_start, quiet_end)) = if left_demand > right_demand {
            ((start, midpoint), (midpoint, end))
        } else {
            ((midpoint, end), (start, midpoint))
        };

        let (expensive, cheap) = split_by_cost(&roster);

        let mut shifts = self.schedule_window(busy_start, busy_end, expensive);
        shifts.extend(self.schedule_window(quiet_start, quiet_end, cheap));
        shifts
    }

    /// Assigns staff directly to a leaf window.
    ///
    /// Headcount is `max(1, ⌊demand · 3⌋)`; candidates must cover the
    /// whole window and are taken cheapest-first. Coming up short is not
    /// an error — the leaf is simply understaffed.
    fn assign_leaf<'a>(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        roster: &[&'a Worker],
    ) -> Vec<Shift<'a>> {
        let demand = self.demand.average_over(start, end);
        let needed = ((demand * WORKERS_PER_FULL_DEMAND).floor() as usize).max(1);

        let mut available: Vec<&Worker> = roster
            .iter()
            .copied()
            .filter(|w| w.covers(start, end))
            .collect();
        available.sort_by(|a, b| a.hourly_rate.total_cmp(&b.hourly_rate));

        available
            .into_iter()
            .take(needed)
            .map(|worker| Shift::new(worker, TimeWindow::new(start, end, needed, demand)))
            .collect()
    }
}

/// Splits a roster into `(expensive, cheap)` cost tiers.
///
/// Staff are stably sorted ascending by hourly rate (equal rates keep
/// their input order) and split at `len / 2`: the lower half is cheap,
/// the upper half — including the true median when the count is odd —
/// is expensive. The input is not mutated.
pub fn split_by_cost<'a>(roster: &[&'a Worker]) -> (Vec<&'a Worker>, Vec<&'a Worker>) {
    let mut sorted = roster.to_vec();
    sorted.sort_by(|a, b| a.hourly_rate.total_cmp(&b.hourly_rate));

    let middle = sorted.len() / 2;
    let expensive = sorted.split_off(middle);
    (expensive, sorted)
}

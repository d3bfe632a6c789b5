//! The recursive shift planner and schedule metrics.
//!
//! # Algorithm
//!
//! `ShiftScheduler` bisects the requested window at its midpoint,
//! classifies the halves busy/quiet by comparing mean demand, splits the
//! roster into cost tiers, and recurses — expensive tier into the busy
//! half, cheap tier into the quiet half — until windows shrink to the
//! minimum shift length, where staff are assigned greedily cheapest-first.
//!
//! # Metrics
//!
//! `ScheduleSummary` computes labor cost, staffed hours, and headcount
//! figures from a finished plan.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod bisect;
mod summary;

pub use bisect::{split_by_cost, ShiftScheduler, DEFAULT_MIN_SHIFT_HOURS};
pub use summary::ScheduleSummary;

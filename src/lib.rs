//! Heuristic staff shift planner.
//!
//! Assigns workers to time slots across a business's operating hours by
//! recursively bisecting the requested window into busy and quiet halves
//! and steering cost tiers accordingly: pricier staff toward high-demand
//! half-windows, cheaper staff toward quiet ones, down to atomic shift
//! lengths. A single-pass heuristic — fast and deterministic, with no
//! claim of global cost optimality.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Worker`, `TimeWindow`, `Shift`,
//!   `DemandTable`
//! - **`scheduler`**: The recursive partitioner (`ShiftScheduler`), the
//!   cost-tier splitter, and schedule metrics (`ScheduleSummary`)
//! - **`validation`**: Opt-in input integrity checks (inverted windows,
//!   duplicate names, bad rates)
//!
//! # Time Model
//!
//! Naive local timestamps ([`chrono::NaiveDateTime`]) with hour-level
//! granularity. Demand is keyed by weekly hour: `weekday * 24 + hour`,
//! Monday-based, 0–167.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review"

pub mod models;
pub mod scheduler;
pub mod validation;

//! Shift-planning domain models.
//!
//! Core data types for representing staffing problems and their
//! solutions. Workers are owned by the caller; shifts borrow them.
//!
//! | Type | Role |
//! |------|------|
//! | `Worker` | A staff member with an hourly rate and availability |
//! | `TimeWindow` | A half-open `[start, end)` slot with demand metadata |
//! | `Shift` | One worker covering one window |
//! | `DemandTable` | Weekly-hour demand profile (0–167) |

mod demand;
mod shift;
mod window;
mod worker;

pub use demand::{DemandTable, HOURS_PER_WEEK, NEUTRAL_DEMAND};
pub use shift::Shift;
pub use window::TimeWindow;
pub use worker::Worker;

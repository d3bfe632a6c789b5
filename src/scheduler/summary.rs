//! Plan quality metrics.
//!
//! Computes cost and headcount figures from a finished shift plan.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Labor Cost | Sum of rate × window hours per shift |
//! | Staffed Hours | Sum of window hours per shift |
//! | Workers Used | Distinct workers holding at least one shift |
//! | Mean Demand | Unweighted mean of per-shift window demand |

use std::collections::HashMap;

use crate::models::Shift;

/// Aggregate figures for a shift plan.
#[derive(Debug, Clone)]
pub struct ScheduleSummary {
    /// Number of shifts in the plan.
    pub shift_count: usize,
    /// Total labor cost across all shifts.
    pub total_labor_cost: f64,
    /// Total worker-hours staffed.
    pub total_staffed_hours: f64,
    /// Distinct workers holding at least one shift.
    pub workers_used: usize,
    /// Labor cost per worker name.
    pub cost_by_worker: HashMap<String, f64>,
    /// Mean demand score across shift windows (0.0 for an empty plan).
    pub mean_demand: f64,
}

impl ScheduleSummary {
    /// Computes summary figures from a shift plan.
    pub fn calculate(shifts: &[Shift<'_>]) -> Self {
        let mut total_labor_cost = 0.0;
        let mut total_staffed_hours = 0.0;
        let mut total_demand = 0.0;
        let mut cost_by_worker: HashMap<String, f64> = HashMap::new();

        for shift in shifts {
            let cost = shift.labor_cost();
            total_labor_cost += cost;
            total_staffed_hours += shift.window.duration_hours();
            total_demand += shift.window.demand;
            *cost_by_worker
                .entry(shift.worker.name.clone())
                .or_insert(0.0) += cost;
        }

        let mean_demand = if shifts.is_empty() {
            0.0
        } else {
            total_demand / shifts.len() as f64
        };

        Self {
            shift_count: shifts.len(),
            total_labor_cost,
            total_staffed_hours,
            workers_used: cost_by_worker.len(),
            cost_by_worker,
            mean_demand,
        }
    }

    /// Whether the plan's total labor cost stays within a budget.
    pub fn within_budget(&self, max_cost: f64) -> bool {
        self.total_labor_cost <= max_cost
    }
}

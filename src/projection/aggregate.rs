//! Reduce monthly rows into horizon totals and savings against baseline

use super::rows::{MonthlyRow, ShiftCategory};
use serde::{Deserialize, Serialize};

/// Horizon totals for one staffing category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub shifts: f64,
    pub cost: f64,
}

/// Aggregates over the full horizon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub permanent: CategoryTotals,
    pub float_pool: CategoryTotals,
    pub locum: CategoryTotals,
    /// Sum of monthly total cost
    pub total_actual_cost: f64,
    /// Baseline monthly cost × number of months
    pub total_baseline_cost: f64,
    /// Baseline minus actual; negative means over baseline
    pub total_savings: f64,
}

impl ProjectionSummary {
    pub fn category(&self, category: ShiftCategory) -> &CategoryTotals {
        match category {
            ShiftCategory::Permanent => &self.permanent,
            ShiftCategory::FloatPool => &self.float_pool,
            ShiftCategory::Locum => &self.locum,
        }
    }
}

/// Sum category shifts and costs and compare against `baseline_monthly_cost` per month
pub fn aggregate(rows: &[MonthlyRow], baseline_monthly_cost: f64) -> ProjectionSummary {
    let mut summary = ProjectionSummary::default();

    for row in rows {
        summary.permanent.shifts += row.permanent_shifts;
        summary.permanent.cost += row.permanent_cost;
        summary.float_pool.shifts += row.float_pool_shifts;
        summary.float_pool.cost += row.float_pool_cost;
        summary.locum.shifts += row.locum_shifts;
        summary.locum.cost += row.locum_cost;
        summary.total_actual_cost += row.total_cost;
    }

    summary.total_baseline_cost = baseline_monthly_cost * rows.len() as f64;
    summary.total_savings = summary.total_baseline_cost - summary.total_actual_cost;
    summary
}

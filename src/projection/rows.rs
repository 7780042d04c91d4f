//! Monthly projection rows and the full projection result

use super::aggregate::ProjectionSummary;
use super::engine::RampPolicy;
use serde::{Deserialize, Serialize};

/// Staffing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCategory {
    Permanent,
    FloatPool,
    Locum,
}

impl ShiftCategory {
    pub const ALL: [ShiftCategory; 3] = [ShiftCategory::Permanent, ShiftCategory::FloatPool, ShiftCategory::Locum];

    /// Display label used in reports
    pub fn label(self) -> &'static str {
        match self {
            ShiftCategory::Permanent => "Permanent",
            ShiftCategory::FloatPool => "Float Pool",
            ShiftCategory::Locum => "VISTA Locums",
        }
    }
}

/// One month of projected coverage and cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    /// Month index (1-indexed)
    pub month: u32,

    // Providers
    pub permanent_providers: f64,
    pub float_pool_providers: f64,
    /// Locum shifts divided by shifts per locum provider (0 if that is 0)
    pub locum_providers: f64,

    // Shifts
    pub permanent_shifts: f64,
    pub float_pool_shifts: f64,
    pub locum_shifts: f64,
    /// Fraction of capacity left uncovered by permanent and float pool shifts
    pub decay_factor: f64,

    // Costs ($)
    pub permanent_cost: f64,
    pub float_pool_cost: f64,
    pub locum_cost: f64,
    pub total_cost: f64,
    /// Baseline monthly cost minus total cost
    pub monthly_savings: f64,
}

impl MonthlyRow {
    pub fn shifts(&self, category: ShiftCategory) -> f64 {
        match category {
            ShiftCategory::Permanent => self.permanent_shifts,
            ShiftCategory::FloatPool => self.float_pool_shifts,
            ShiftCategory::Locum => self.locum_shifts,
        }
    }

    pub fn cost(&self, category: ShiftCategory) -> f64 {
        match category {
            ShiftCategory::Permanent => self.permanent_cost,
            ShiftCategory::FloatPool => self.float_pool_cost,
            ShiftCategory::Locum => self.locum_cost,
        }
    }

    pub fn total_shifts(&self) -> f64 {
        self.permanent_shifts + self.float_pool_shifts + self.locum_shifts
    }
}

/// Complete projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub horizon_months: u32,
    pub ramp_policy: RampPolicy,
    /// Month-ascending rows, one per month of the horizon
    pub rows: Vec<MonthlyRow>,
    pub summary: ProjectionSummary,
}

impl ProjectionResult {
    /// Row for a 1-indexed month
    pub fn month(&self, month: u32) -> Option<&MonthlyRow> {
        if month == 0 {
            return None;
        }
        self.rows.get((month - 1) as usize)
    }

    /// Shift series for one category, month-ascending
    pub fn shift_series(&self, category: ShiftCategory) -> Vec<f64> {
        self.rows.iter().map(|r| r.shifts(category)).collect()
    }

    /// Cost series for one category, month-ascending
    pub fn cost_series(&self, category: ShiftCategory) -> Vec<f64> {
        self.rows.iter().map(|r| r.cost(category)).collect()
    }

    pub fn total_cost_series(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.total_cost).collect()
    }
}

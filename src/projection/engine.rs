//! Month-by-month shift and cost projection

use super::aggregate::aggregate;
use super::rows::{MonthlyRow, ProjectionResult};
use super::{DEFAULT_HORIZON_MONTHS, FLOAT_POOL_START_MONTH, LOCUM_START_MONTH, PERMANENT_START_MONTH};
use crate::assumptions::AssumptionSet;
use crate::error::{Result, RoiError};
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

/// How a gated category builds its provider count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RampPolicy {
    /// Onboarding starts when the gate opens; the count is 0 before it
    #[default]
    #[value(name = "from-gate")]
    AccumulateFromGate,
    /// Onboarding runs from month 1 but providers only work once the gate opens
    #[value(name = "underwater")]
    AccumulateUnderwater,
}

impl RampPolicy {
    /// Months of onboarding accumulated by `month` for a category starting at `start_month`
    fn months_accumulated(self, month: u32, start_month: u32) -> u32 {
        match self {
            RampPolicy::AccumulateFromGate => (month + 1).saturating_sub(start_month),
            RampPolicy::AccumulateUnderwater => month,
        }
    }
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Number of months to project (months 1..=horizon)
    #[serde(default = "default_horizon")]
    pub horizon_months: u32,

    #[serde(default)]
    pub ramp_policy: RampPolicy,

    #[serde(default = "default_permanent_start")]
    pub permanent_start_month: u32,

    #[serde(default = "default_float_pool_start")]
    pub float_pool_start_month: u32,

    #[serde(default = "default_locum_start")]
    pub locum_start_month: u32,
}

fn default_horizon() -> u32 { DEFAULT_HORIZON_MONTHS }
fn default_permanent_start() -> u32 { PERMANENT_START_MONTH }
fn default_float_pool_start() -> u32 { FLOAT_POOL_START_MONTH }
fn default_locum_start() -> u32 { LOCUM_START_MONTH }

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            ramp_policy: RampPolicy::AccumulateFromGate,
            permanent_start_month: PERMANENT_START_MONTH,
            float_pool_start_month: FLOAT_POOL_START_MONTH,
            locum_start_month: LOCUM_START_MONTH,
        }
    }
}

impl ProjectionConfig {
    pub fn with_horizon(mut self, horizon_months: u32) -> Self {
        self.horizon_months = horizon_months;
        self
    }

    pub fn with_ramp_policy(mut self, ramp_policy: RampPolicy) -> Self {
        self.ramp_policy = ramp_policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.horizon_months == 0 {
            return Err(RoiError::Configuration("horizon_months must be at least 1".into()));
        }
        for (name, month) in [
            ("permanent_start_month", self.permanent_start_month),
            ("float_pool_start_month", self.float_pool_start_month),
            ("locum_start_month", self.locum_start_month),
        ] {
            if month == 0 {
                return Err(RoiError::Configuration(format!("{} must be at least 1 (months are 1-indexed)", name)));
            }
        }
        Ok(())
    }
}

/// Provider accumulation for one staffing category
struct RampTrack {
    start_month: u32,
    onboard_rate: f64,
    days_per_provider: f64,
}

impl RampTrack {
    /// Active providers and capped shift volume for a month
    fn month(&self, month: u32, policy: RampPolicy, cap: f64) -> (f64, f64) {
        if month < self.start_month {
            return (0.0, 0.0);
        }
        let providers = self.onboard_rate * policy.months_accumulated(month, self.start_month) as f64;
        let shifts = (providers * self.days_per_provider).min(cap);
        (providers, shifts)
    }
}

/// Stateless projection engine; each call to [`ProjectionEngine::project`] is independent
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project shifts and costs for every month of the horizon
    ///
    /// Fails before computing anything if the assumptions or the configuration are
    /// malformed; otherwise always produces `horizon_months` rows.
    pub fn project(&self, assumptions: &AssumptionSet) -> Result<ProjectionResult> {
        self.config.validate()?;
        assumptions.validate()?;

        let config = &self.config;
        let cap = assumptions.max_monthly_shifts;
        debug!(
            "Projecting {} months (cap {} shifts/month, {:?})",
            config.horizon_months, cap, config.ramp_policy
        );

        let permanent = RampTrack {
            start_month: config.permanent_start_month,
            onboard_rate: assumptions.permanent_onboard_rate,
            days_per_provider: assumptions.permanent_days_per_provider,
        };
        let float_pool = RampTrack {
            start_month: config.float_pool_start_month,
            onboard_rate: assumptions.float_pool_onboard_rate,
            days_per_provider: assumptions.float_pool_days_per_provider,
        };

        let rows: Vec<MonthlyRow> = (1..=config.horizon_months)
            .map(|month| {
                let (permanent_providers, permanent_shifts) = permanent.month(month, config.ramp_policy, cap);
                let (float_pool_providers, float_pool_shifts) = float_pool.month(month, config.ramp_policy, cap);

                // Locums cover the share of capacity permanent and float staff leave open
                let (decay_factor, locum_shifts) = if month >= config.locum_start_month {
                    let covered = permanent_shifts + float_pool_shifts;
                    let uncovered = (cap - covered).max(0.0);
                    let decay = uncovered / cap;
                    // Divide last so whole shift counts survive the floor
                    let shifts = (assumptions.locum_open_days * assumptions.locum_days_per_provider * uncovered / cap).floor();
                    (decay, shifts)
                } else {
                    (1.0, 0.0)
                };

                let locum_providers = if assumptions.locum_days_per_provider > 0.0 {
                    locum_shifts / assumptions.locum_days_per_provider
                } else {
                    0.0
                };

                let permanent_cost = permanent_shifts * assumptions.permanent_shift_cost;
                let float_pool_cost = float_pool_shifts * assumptions.float_pool_shift_cost;
                let locum_cost = locum_shifts * assumptions.hospitalist_rate;
                let total_cost = permanent_cost + float_pool_cost + locum_cost;

                MonthlyRow {
                    month,
                    permanent_providers,
                    float_pool_providers,
                    locum_providers,
                    permanent_shifts,
                    float_pool_shifts,
                    locum_shifts,
                    decay_factor,
                    permanent_cost,
                    float_pool_cost,
                    locum_cost,
                    total_cost,
                    monthly_savings: assumptions.baseline_monthly_cost - total_cost,
                }
            })
            .collect();

        let summary = aggregate(&rows, assumptions.baseline_monthly_cost);
        debug!(
            "Projection complete: actual ${:.2}, baseline ${:.2}, savings ${:.2}",
            summary.total_actual_cost, summary.total_baseline_cost, summary.total_savings
        );

        Ok(ProjectionResult {
            horizon_months: config.horizon_months,
            ramp_policy: config.ramp_policy,
            rows,
            summary,
        })
    }
}

/// Project with the default ramp schedule over `horizon_months`
pub fn project(assumptions: &AssumptionSet, horizon_months: u32) -> Result<ProjectionResult> {
    ProjectionEngine::new(ProjectionConfig::default().with_horizon(horizon_months)).project(assumptions)
}

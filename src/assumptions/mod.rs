//! Staffing assumptions: the typed inputs of a projection
//!
//! An [`AssumptionSet`] is built fresh for every projection. Values arrive as a
//! name -> value mapping (see [`ParameterResolver`]) and every field defaults to 0
//! except the blended per-shift costs for permanent and float pool staff.

mod schema;
pub mod resolver;
pub mod loader;

pub use schema::CellSchema;
pub use resolver::{ParameterResolver, ResolvePolicy};
pub use loader::{load_assumptions, load_raw_from_csv, load_raw_from_csv_reader, load_raw_from_json, RawAssumptions};

use crate::error::{Result, RoiError};
use serde::{Deserialize, Serialize};

/// Default blended cost per permanent shift ($)
pub const DEFAULT_PERMANENT_SHIFT_COST: f64 = 100.0;

/// Default blended cost per float pool shift ($)
pub const DEFAULT_FLOAT_POOL_SHIFT_COST: f64 = 80.0;

/// Every assumption the projection understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssumptionKey {
    PermanentOnboardRate,
    PermanentDaysPerProvider,
    FloatPoolOnboardRate,
    FloatPoolDaysPerProvider,
    LocumOpenDays,
    LocumDaysPerProvider,
    HospitalistRate,
    MaxMonthlyShifts,
    BaselineMonthlyCost,
    PermanentShiftCost,
    FloatPoolShiftCost,
}

impl AssumptionKey {
    pub const ALL: [AssumptionKey; 11] = [
        AssumptionKey::PermanentOnboardRate,
        AssumptionKey::PermanentDaysPerProvider,
        AssumptionKey::FloatPoolOnboardRate,
        AssumptionKey::FloatPoolDaysPerProvider,
        AssumptionKey::LocumOpenDays,
        AssumptionKey::LocumDaysPerProvider,
        AssumptionKey::HospitalistRate,
        AssumptionKey::MaxMonthlyShifts,
        AssumptionKey::BaselineMonthlyCost,
        AssumptionKey::PermanentShiftCost,
        AssumptionKey::FloatPoolShiftCost,
    ];

    /// Canonical snake_case name
    pub fn name(self) -> &'static str {
        match self {
            AssumptionKey::PermanentOnboardRate => "permanent_onboard_rate",
            AssumptionKey::PermanentDaysPerProvider => "permanent_days_per_provider",
            AssumptionKey::FloatPoolOnboardRate => "float_pool_onboard_rate",
            AssumptionKey::FloatPoolDaysPerProvider => "float_pool_days_per_provider",
            AssumptionKey::LocumOpenDays => "locum_open_days",
            AssumptionKey::LocumDaysPerProvider => "locum_days_per_provider",
            AssumptionKey::HospitalistRate => "hospitalist_rate",
            AssumptionKey::MaxMonthlyShifts => "max_monthly_shifts",
            AssumptionKey::BaselineMonthlyCost => "baseline_monthly_cost",
            AssumptionKey::PermanentShiftCost => "permanent_shift_cost",
            AssumptionKey::FloatPoolShiftCost => "float_pool_shift_cost",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Value used when the key is missing from the input mapping
    pub fn default_value(self) -> f64 {
        match self {
            AssumptionKey::PermanentShiftCost => DEFAULT_PERMANENT_SHIFT_COST,
            AssumptionKey::FloatPoolShiftCost => DEFAULT_FLOAT_POOL_SHIFT_COST,
            _ => 0.0,
        }
    }
}

impl std::fmt::Display for AssumptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved staffing assumptions for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssumptionSet {
    /// Providers onboarded per month on the permanent track
    #[serde(default)]
    pub permanent_onboard_rate: f64,

    /// Shifts each permanent provider works per month
    #[serde(default)]
    pub permanent_days_per_provider: f64,

    /// Providers onboarded per month into the float pool
    #[serde(default)]
    pub float_pool_onboard_rate: f64,

    /// Shifts each float pool provider works per month
    #[serde(default)]
    pub float_pool_days_per_provider: f64,

    /// Monthly open-shift target assignable to locums
    #[serde(default)]
    pub locum_open_days: f64,

    /// Shifts one locum provider covers per month
    #[serde(default)]
    pub locum_days_per_provider: f64,

    /// Cost per locum shift ($)
    #[serde(default)]
    pub hospitalist_rate: f64,

    /// System-wide capacity cap (shifts/month); must be positive to project
    #[serde(default)]
    pub max_monthly_shifts: f64,

    /// Reference monthly cost ($) for the savings comparison
    #[serde(default)]
    pub baseline_monthly_cost: f64,

    /// Blended cost per permanent shift ($)
    #[serde(default = "default_permanent_shift_cost")]
    pub permanent_shift_cost: f64,

    /// Blended cost per float pool shift ($)
    #[serde(default = "default_float_pool_shift_cost")]
    pub float_pool_shift_cost: f64,
}

fn default_permanent_shift_cost() -> f64 { DEFAULT_PERMANENT_SHIFT_COST }
fn default_float_pool_shift_cost() -> f64 { DEFAULT_FLOAT_POOL_SHIFT_COST }

impl Default for AssumptionSet {
    fn default() -> Self {
        Self {
            permanent_onboard_rate: 0.0,
            permanent_days_per_provider: 0.0,
            float_pool_onboard_rate: 0.0,
            float_pool_days_per_provider: 0.0,
            locum_open_days: 0.0,
            locum_days_per_provider: 0.0,
            hospitalist_rate: 0.0,
            max_monthly_shifts: 0.0,
            baseline_monthly_cost: 0.0,
            permanent_shift_cost: DEFAULT_PERMANENT_SHIFT_COST,
            float_pool_shift_cost: DEFAULT_FLOAT_POOL_SHIFT_COST,
        }
    }
}

impl AssumptionSet {
    pub fn get(&self, key: AssumptionKey) -> f64 {
        match key {
            AssumptionKey::PermanentOnboardRate => self.permanent_onboard_rate,
            AssumptionKey::PermanentDaysPerProvider => self.permanent_days_per_provider,
            AssumptionKey::FloatPoolOnboardRate => self.float_pool_onboard_rate,
            AssumptionKey::FloatPoolDaysPerProvider => self.float_pool_days_per_provider,
            AssumptionKey::LocumOpenDays => self.locum_open_days,
            AssumptionKey::LocumDaysPerProvider => self.locum_days_per_provider,
            AssumptionKey::HospitalistRate => self.hospitalist_rate,
            AssumptionKey::MaxMonthlyShifts => self.max_monthly_shifts,
            AssumptionKey::BaselineMonthlyCost => self.baseline_monthly_cost,
            AssumptionKey::PermanentShiftCost => self.permanent_shift_cost,
            AssumptionKey::FloatPoolShiftCost => self.float_pool_shift_cost,
        }
    }

    pub fn set(&mut self, key: AssumptionKey, value: f64) {
        let slot = match key {
            AssumptionKey::PermanentOnboardRate => &mut self.permanent_onboard_rate,
            AssumptionKey::PermanentDaysPerProvider => &mut self.permanent_days_per_provider,
            AssumptionKey::FloatPoolOnboardRate => &mut self.float_pool_onboard_rate,
            AssumptionKey::FloatPoolDaysPerProvider => &mut self.float_pool_days_per_provider,
            AssumptionKey::LocumOpenDays => &mut self.locum_open_days,
            AssumptionKey::LocumDaysPerProvider => &mut self.locum_days_per_provider,
            AssumptionKey::HospitalistRate => &mut self.hospitalist_rate,
            AssumptionKey::MaxMonthlyShifts => &mut self.max_monthly_shifts,
            AssumptionKey::BaselineMonthlyCost => &mut self.baseline_monthly_cost,
            AssumptionKey::PermanentShiftCost => &mut self.permanent_shift_cost,
            AssumptionKey::FloatPoolShiftCost => &mut self.float_pool_shift_cost,
        };
        *slot = value;
    }

    /// Check the invariants a projection relies on
    ///
    /// Negative or non-finite values are `InvalidInput`; a capacity cap that is not
    /// strictly positive is a `Configuration` error since the locum decay factor is
    /// a ratio against it.
    pub fn validate(&self) -> Result<()> {
        for key in AssumptionKey::ALL {
            let value = self.get(key);
            if !value.is_finite() {
                return Err(RoiError::invalid_input(key.name(), format!("value {} is not a finite number", value)));
            }
            if value < 0.0 && key != AssumptionKey::MaxMonthlyShifts {
                return Err(RoiError::invalid_input(key.name(), format!("value {} is negative", value)));
            }
        }
        if self.max_monthly_shifts <= 0.0 {
            return Err(RoiError::Configuration(format!(
                "max_monthly_shifts must be positive, got {}",
                self.max_monthly_shifts
            )));
        }
        Ok(())
    }

    /// Adjustable range for each assumption, `[0, multiplier × value]`
    ///
    /// Input surfaces render one control per assumption over this range; the
    /// source workbook tool used a multiplier of 2.
    pub fn parameter_ranges(&self, multiplier: f64) -> Vec<ParameterRange> {
        AssumptionKey::ALL
            .iter()
            .map(|&key| {
                let value = self.get(key);
                ParameterRange {
                    key,
                    min: 0.0,
                    max: (value * multiplier).max(0.0),
                    value,
                }
            })
            .collect()
    }
}

/// Slider bounds for one assumption
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRange {
    pub key: AssumptionKey,
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

//! Projection engine for monthly shift coverage and staffing cost

mod engine;
mod rows;
mod aggregate;

pub use engine::{project, ProjectionEngine, ProjectionConfig, RampPolicy};
pub use rows::{MonthlyRow, ProjectionResult, ShiftCategory};
pub use aggregate::{aggregate, CategoryTotals, ProjectionSummary};

// ============================================================================
// Default Ramp Schedule
// ============================================================================
// Months are 1-indexed. A category contributes nothing before its start month.
// - Permanent providers need a 3 month onboarding lead time
// - Float pool deployment follows a slower track
// - Locums fill the gap left by permanent and float coverage from month 4

/// Default planning horizon (months)
pub const DEFAULT_HORIZON_MONTHS: u32 = 24;

/// First month permanent providers contribute shifts
pub const PERMANENT_START_MONTH: u32 = 4;

/// First month float pool providers contribute shifts
pub const FLOAT_POOL_START_MONTH: u32 = 12;

/// First month locum shifts are allocated
pub const LOCUM_START_MONTH: u32 = 4;

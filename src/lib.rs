//! Staffing ROI - monthly shift coverage and cost projections for staffing deployment
//!
//! This library provides:
//! - Resolution of named staffing assumptions (canonical names or worksheet labels)
//! - Month-by-month projection of permanent, float pool and locum shifts
//! - Capacity capping and demand-decay allocation of uncovered shifts to locums
//! - Cost totals and savings against a monthly baseline

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{Result, RoiError};
pub use assumptions::{AssumptionSet, CellSchema, ParameterResolver, ResolvePolicy};
pub use projection::{project, MonthlyRow, ProjectionConfig, ProjectionEngine, ProjectionResult, RampPolicy};
pub use report::SavingsOutcome;
pub use scenario::{Scenario, ScenarioRunner};

//! Run several staffing-mix scenarios and rank them by savings
//!
//! Projections are independent, so scenarios are fanned out with rayon.

use crate::assumptions::AssumptionSet;
use crate::error::Result;
use crate::projection::{ProjectionEngine, ProjectionResult};
use crate::report::SavingsOutcome;
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;

/// A named assumption set
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub assumptions: AssumptionSet,
}

impl Scenario {
    pub fn new(name: impl Into<String>, assumptions: AssumptionSet) -> Self {
        Self {
            name: name.into(),
            assumptions,
        }
    }
}

/// Projection of one scenario
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: ProjectionResult,
}

impl ScenarioOutcome {
    pub fn savings_outcome(&self) -> SavingsOutcome {
        SavingsOutcome::of(&self.result.summary)
    }
}

pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new(engine: ProjectionEngine) -> Self {
        Self { engine }
    }

    /// Project every scenario; fails on the first malformed scenario
    ///
    /// Outcomes are sorted by total savings, largest first.
    pub fn run(&self, scenarios: &[Scenario]) -> Result<Vec<ScenarioOutcome>> {
        info!("Running {} scenarios", scenarios.len());

        let mut outcomes = scenarios
            .par_iter()
            .map(|scenario| -> Result<ScenarioOutcome> {
                let result = self.engine.project(&scenario.assumptions)?;
                Ok(ScenarioOutcome {
                    name: scenario.name.clone(),
                    result,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        outcomes.sort_by(|a, b| {
            b.result
                .summary
                .total_savings
                .total_cmp(&a.result.summary.total_savings)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(outcomes)
    }
}

/// One line of the scenario comparison table
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ComparisonRow<'a> {
    scenario: &'a str,
    permanent_cost: f64,
    float_pool_cost: f64,
    locum_cost: f64,
    actual_cost: f64,
    baseline_cost: f64,
    savings: f64,
}

impl<'a> From<&'a ScenarioOutcome> for ComparisonRow<'a> {
    fn from(outcome: &'a ScenarioOutcome) -> Self {
        let summary = &outcome.result.summary;
        Self {
            scenario: &outcome.name,
            permanent_cost: summary.permanent.cost,
            float_pool_cost: summary.float_pool.cost,
            locum_cost: summary.locum.cost,
            actual_cost: summary.total_actual_cost,
            baseline_cost: summary.total_baseline_cost,
            savings: summary.total_savings,
        }
    }
}

/// Write ranked outcomes as a CSV table, one row per scenario
pub fn write_comparison_csv<W: Write>(outcomes: &[ScenarioOutcome], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        wtr.serialize(ComparisonRow::from(outcome))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoiError;
    use crate::projection::ProjectionConfig;

    fn base() -> AssumptionSet {
        AssumptionSet {
            locum_open_days: 30.0,
            locum_days_per_provider: 10.0,
            hospitalist_rate: 2000.0,
            max_monthly_shifts: 1000.0,
            baseline_monthly_cost: 600_000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_ranked_by_savings() {
        let locum_only = Scenario::new("locum-only", base());
        let permanent_mix = Scenario::new(
            "permanent-mix",
            AssumptionSet {
                permanent_onboard_rate: 5.0,
                permanent_days_per_provider: 20.0,
                ..base()
            },
        );

        let runner = ScenarioRunner::new(ProjectionEngine::new(ProjectionConfig::default()));
        let outcomes = runner.run(&[locum_only, permanent_mix]).unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].name, "permanent-mix");
        assert!(outcomes[0].result.summary.total_savings > outcomes[1].result.summary.total_savings);
    }

    #[test]
    fn test_malformed_scenario_fails() {
        let broken = Scenario::new(
            "no-capacity",
            AssumptionSet {
                max_monthly_shifts: 0.0,
                ..base()
            },
        );
        let runner = ScenarioRunner::new(ProjectionEngine::default());
        let err = runner.run(&[Scenario::new("ok", base()), broken]).unwrap_err();
        assert!(matches!(err, RoiError::Configuration(_)));
    }

    #[test]
    fn test_comparison_csv_quotes_names() {
        let runner = ScenarioRunner::new(ProjectionEngine::default());
        let outcomes = runner.run(&[Scenario::new("Site A, nights", base())]).unwrap();

        let mut buf = Vec::new();
        write_comparison_csv(&outcomes, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Scenario,PermanentCost,FloatPoolCost,LocumCost,ActualCost,BaselineCost,Savings")
        );
        assert!(lines.next().unwrap().starts_with("\"Site A, nights\","));

        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        let records: Vec<csv::StringRecord> = rdr.records().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 7);
        assert_eq!(&records[0][0], "Site A, nights");
        let savings: f64 = records[0][6].parse().unwrap();
        assert_eq!(savings, outcomes[0].result.summary.total_savings);
    }
}

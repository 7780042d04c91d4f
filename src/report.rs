//! Output helpers for projection results: CSV rows, JSON, and text summaries

use crate::error::Result;
use crate::projection::{ProjectionResult, ProjectionSummary, ShiftCategory};
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// Sign of the total savings, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsOutcome {
    Savings,
    OverBaseline,
    BreakEven,
}

impl SavingsOutcome {
    /// Classify savings; amounts under half a cent count as break-even
    pub fn from_savings(total_savings: f64) -> Self {
        if total_savings.abs() < 0.005 {
            SavingsOutcome::BreakEven
        } else if total_savings > 0.0 {
            SavingsOutcome::Savings
        } else {
            SavingsOutcome::OverBaseline
        }
    }

    pub fn of(summary: &ProjectionSummary) -> Self {
        Self::from_savings(summary.total_savings)
    }
}

impl fmt::Display for SavingsOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SavingsOutcome::Savings => "savings",
            SavingsOutcome::OverBaseline => "over baseline",
            SavingsOutcome::BreakEven => "break-even",
        };
        f.write_str(text)
    }
}

/// Write one CSV line per month, with a header row
pub fn write_rows_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in &result.rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the full result (rows and summary) as pretty JSON
pub fn write_json<W: Write>(result: &ProjectionResult, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, result)?;
    Ok(())
}

/// Human-readable summary of totals and savings
pub struct SummaryDisplay<'a>(pub &'a ProjectionResult);

impl fmt::Display for SummaryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let summary = &result.summary;

        writeln!(f, "Projection Summary ({} months, {:?}):", result.horizon_months, result.ramp_policy)?;
        for category in ShiftCategory::ALL {
            let totals = summary.category(category);
            writeln!(
                f,
                "  {:<14} shifts={:>10.0}  cost=${:>14.2}",
                category.label(),
                totals.shifts,
                totals.cost
            )?;
        }
        writeln!(f, "  Total actual cost:   ${:.2}", summary.total_actual_cost)?;
        writeln!(f, "  Total baseline cost: ${:.2}", summary.total_baseline_cost)?;

        match SavingsOutcome::of(summary) {
            SavingsOutcome::Savings => writeln!(f, "  Savings:             ${:.2}", summary.total_savings),
            SavingsOutcome::OverBaseline => writeln!(f, "  Over baseline by:    ${:.2}", -summary.total_savings),
            SavingsOutcome::BreakEven => writeln!(f, "  Break-even against baseline"),
        }
    }
}

pub fn format_summary(result: &ProjectionResult) -> String {
    SummaryDisplay(result).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::AssumptionSet;
    use crate::projection::{project, MonthlyRow};

    fn sample() -> ProjectionResult {
        let assumptions = AssumptionSet {
            permanent_onboard_rate: 5.0,
            permanent_days_per_provider: 20.0,
            max_monthly_shifts: 1960.0,
            baseline_monthly_cost: 100_000.0,
            ..Default::default()
        };
        project(&assumptions, 6).expect("Failed to project")
    }

    #[test]
    fn test_savings_outcome() {
        assert_eq!(SavingsOutcome::from_savings(1_000.0), SavingsOutcome::Savings);
        assert_eq!(SavingsOutcome::from_savings(-0.01), SavingsOutcome::OverBaseline);
        assert_eq!(SavingsOutcome::from_savings(0.0), SavingsOutcome::BreakEven);
        assert_eq!(SavingsOutcome::OverBaseline.to_string(), "over baseline");
    }

    #[test]
    fn test_csv_output() {
        let result = sample();
        let mut buf = Vec::new();
        write_rows_csv(&result, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("month,permanent_providers,"));

        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        let rows: Vec<MonthlyRow> = rdr.deserialize().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(rows, result.rows);
    }

    #[test]
    fn test_json_output() {
        let result = sample();
        let mut buf = Vec::new();
        write_json(&result, &mut buf).unwrap();
        let parsed: ProjectionResult = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.horizon_months, 6);
        assert_eq!(parsed.rows.len(), 6);
        assert_eq!(parsed.summary, result.summary);
    }

    #[test]
    fn test_format_summary() {
        let result = sample();
        let text = format_summary(&result);
        // 100 + 200 + 300 permanent shifts at $100 against a $600k baseline
        assert!(text.contains("Total actual cost:   $60000.00"));
        assert!(text.contains("Savings:             $540000.00"));
        assert!(text.contains("VISTA Locums"));
    }

    #[test]
    fn test_summary_over_baseline() {
        let assumptions = AssumptionSet {
            permanent_onboard_rate: 5.0,
            permanent_days_per_provider: 20.0,
            max_monthly_shifts: 1960.0,
            baseline_monthly_cost: 5_000.0,
            ..Default::default()
        };
        let result = project(&assumptions, 6).expect("Failed to project");
        let text = SummaryDisplay(&result).to_string();
        // $60k actual against a $30k baseline
        assert!(text.contains("Over baseline by:    $30000.00"));
        assert!(!text.contains("Savings:"));
    }
}

//! Declared schema of the worksheet labels and cells that feed each assumption
//!
//! Inputs are matched by name only. A label is compared after trimming,
//! collapsing inner whitespace and lowercasing, so "Providers Onboarded per Month"
//! and "providers  onboarded per month " are the same alias.

use super::AssumptionKey;
use crate::error::{Result, RoiError};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Alias table mapping input names to assumption keys
#[derive(Debug, Clone)]
pub struct CellSchema {
    aliases: HashMap<String, AssumptionKey>,
}

#[derive(Debug, Deserialize)]
struct AliasRecord {
    key: String,
    alias: String,
}

impl CellSchema {
    /// Schema that only accepts the canonical snake_case names
    pub fn canonical() -> Self {
        let mut schema = Self { aliases: HashMap::new() };
        for key in AssumptionKey::ALL {
            schema.add_alias(key, key.name());
        }
        schema
    }

    /// Register an additional label or cell reference for a key
    pub fn add_alias(&mut self, key: AssumptionKey, alias: &str) {
        self.aliases.insert(normalize(alias), key);
    }

    pub fn with_alias(mut self, key: AssumptionKey, alias: &str) -> Self {
        self.add_alias(key, alias);
        self
    }

    /// Look up the key an input name refers to
    pub fn lookup(&self, name: &str) -> Option<AssumptionKey> {
        self.aliases.get(&normalize(name)).copied()
    }

    /// All aliases registered for a key, sorted
    pub fn aliases_for(&self, key: AssumptionKey) -> Vec<&str> {
        let mut found: Vec<&str> = self.aliases
            .iter()
            .filter(|(_, k)| **k == key)
            .map(|(alias, _)| alias.as_str())
            .collect();
        found.sort_unstable();
        found
    }

    /// Canonical schema extended with `key,alias` rows from a CSV reader
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut schema = Self::canonical();
        schema.extend_from_csv_reader(reader)?;
        Ok(schema)
    }

    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Add `key,alias` rows; an unrecognized key is `InvalidInput`
    pub fn extend_from_csv_reader<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        for record in rdr.deserialize() {
            let record: AliasRecord = record?;
            let key = AssumptionKey::from_name(&record.key)
                .ok_or_else(|| RoiError::invalid_input(&record.key, "not a recognized assumption"))?;
            self.add_alias(key, &record.alias);
        }
        Ok(())
    }

    pub fn extend_from_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let file = std::fs::File::open(path)?;
        self.extend_from_csv_reader(file)
    }
}

impl Default for CellSchema {
    /// Canonical names plus the row labels used in the deployment workbook
    fn default() -> Self {
        Self::canonical()
            .with_alias(AssumptionKey::PermanentOnboardRate, "Providers Onboarded per Month")
            .with_alias(AssumptionKey::PermanentDaysPerProvider, "Average Days per provider per Month")
            .with_alias(AssumptionKey::FloatPoolOnboardRate, "Float Pool Providers Onboarded per Month")
            .with_alias(AssumptionKey::FloatPoolDaysPerProvider, "Float Pool Average Days per provider per Month")
            .with_alias(AssumptionKey::LocumOpenDays, "Open Days")
            .with_alias(AssumptionKey::LocumDaysPerProvider, "Locum Days per Provider")
            .with_alias(AssumptionKey::HospitalistRate, "Hospitalist")
            .with_alias(AssumptionKey::MaxMonthlyShifts, "Max Monthly Shifts")
            .with_alias(AssumptionKey::BaselineMonthlyCost, "Baseline Monthly Cost")
    }
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

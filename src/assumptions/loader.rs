//! Load raw assumption mappings from CSV or JSON files

use super::{AssumptionSet, CellSchema, ParameterResolver, ResolvePolicy};
use crate::error::{Result, RoiError};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Name -> value pairs in file order, not yet validated
pub type RawAssumptions = Vec<(String, Value)>;

#[derive(Debug, Deserialize)]
struct AssumptionRecord {
    name: String,
    value: String,
}

/// Read `name,value` rows; blank values are treated as missing
pub fn load_raw_from_csv_reader<R: Read>(reader: R) -> Result<RawAssumptions> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut raw = Vec::new();
    for record in rdr.deserialize() {
        let record: AssumptionRecord = record?;
        if record.value.is_empty() {
            debug!("Skipping blank value for '{}'", record.name);
            continue;
        }
        raw.push((record.name, Value::String(record.value)));
    }
    Ok(raw)
}

pub fn load_raw_from_csv<P: AsRef<Path>>(path: P) -> Result<RawAssumptions> {
    let file = File::open(path)?;
    load_raw_from_csv_reader(file)
}

/// Read a JSON object of name -> value
pub fn load_raw_from_json<P: AsRef<Path>>(path: P) -> Result<RawAssumptions> {
    let file = File::open(path)?;
    let map: serde_json::Map<String, Value> = serde_json::from_reader(BufReader::new(file))?;
    Ok(map.into_iter().collect())
}

/// Load and resolve an assumption file, dispatching on its extension
pub fn load_assumptions<P: AsRef<Path>>(path: P, schema: CellSchema, policy: ResolvePolicy) -> Result<AssumptionSet> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let raw = match extension.as_deref() {
        Some("csv") => load_raw_from_csv(path)?,
        Some("json") => load_raw_from_json(path)?,
        _ => {
            return Err(RoiError::invalid_input(
                path.display().to_string(),
                "assumption files must be .csv or .json",
            ))
        }
    };
    info!("Loaded {} assumption entries from {}", raw.len(), path.display());

    let resolver = ParameterResolver::new(schema, policy);
    resolver.resolve(raw.iter().map(|(name, value)| (name, value)))
}

//! Resolve a raw name -> value mapping into an [`AssumptionSet`]
//!
//! Missing keys take their defaults and unknown names are skipped. Values that
//! are not numbers are always rejected; negatives are rejected or clamped to 0
//! depending on the [`ResolvePolicy`].

use super::{AssumptionKey, AssumptionSet, CellSchema};
use crate::error::{Result, RoiError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// What to do with a negative input value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvePolicy {
    /// Fail with `InvalidInput`
    #[default]
    Reject,
    /// Replace with 0 and log a warning
    Clamp,
}

#[derive(Debug, Clone, Default)]
pub struct ParameterResolver {
    schema: CellSchema,
    policy: ResolvePolicy,
}

impl ParameterResolver {
    pub fn new(schema: CellSchema, policy: ResolvePolicy) -> Self {
        Self { schema, policy }
    }

    pub fn policy(&self) -> ResolvePolicy {
        self.policy
    }

    pub fn schema(&self) -> &CellSchema {
        &self.schema
    }

    /// Resolve loosely typed values (numbers or numeric text)
    pub fn resolve<'a, I>(&self, raw: I) -> Result<AssumptionSet>
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        let mut set = AssumptionSet::default();
        let mut seen = HashSet::new();
        for (name, value) in raw {
            let Some(key) = self.schema.lookup(name) else {
                debug!("Ignoring unrecognized assumption '{}'", name);
                continue;
            };
            check_duplicate(&mut seen, key, name)?;
            let number = parse_numeric(name, value)?;
            set.set(key, self.apply_policy(key, name, number)?);
        }
        Ok(set)
    }

    /// Resolve values that are already numeric
    pub fn resolve_numeric(&self, values: &HashMap<String, f64>) -> Result<AssumptionSet> {
        let mut set = AssumptionSet::default();
        let mut seen = HashSet::new();
        for (name, &value) in values {
            let Some(key) = self.schema.lookup(name) else {
                debug!("Ignoring unrecognized assumption '{}'", name);
                continue;
            };
            check_duplicate(&mut seen, key, name)?;
            if !value.is_finite() {
                return Err(RoiError::invalid_input(name, format!("value {} is not a finite number", value)));
            }
            set.set(key, self.apply_policy(key, name, value)?);
        }
        Ok(set)
    }

    fn apply_policy(&self, key: AssumptionKey, name: &str, value: f64) -> Result<f64> {
        if value >= 0.0 {
            return Ok(value);
        }
        match self.policy {
            ResolvePolicy::Reject => Err(RoiError::invalid_input(name, format!("value {} is negative", value))),
            ResolvePolicy::Clamp => {
                warn!("Clamping negative value {} for {} ('{}') to 0", value, key, name);
                Ok(0.0)
            }
        }
    }
}

/// A key may be supplied once, under any one of its aliases
fn check_duplicate(seen: &mut HashSet<AssumptionKey>, key: AssumptionKey, name: &str) -> Result<()> {
    if seen.insert(key) {
        Ok(())
    } else {
        Err(RoiError::invalid_input(name, format!("duplicate of {}", key)))
    }
}

/// Read a number out of a JSON value; numeric text may carry `$` and `,` separators
fn parse_numeric(name: &str, value: &Value) -> Result<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s.trim().chars().filter(|c| *c != ',' && *c != '$').collect();
            cleaned.parse::<f64>().ok()
        }
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(RoiError::invalid_input(name, format!("{} is not numeric", value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(pairs: &[(&str, Value)]) -> Vec<(String, Value)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    fn resolve(resolver: &ParameterResolver, pairs: &[(&str, Value)]) -> Result<AssumptionSet> {
        let entries = raw(pairs);
        resolver.resolve(entries.iter().map(|(k, v)| (k, v)))
    }

    #[test]
    fn test_missing_keys_default() {
        let resolver = ParameterResolver::default();
        let set = resolve(&resolver, &[]).unwrap();
        assert_eq!(set, AssumptionSet::default());
    }

    #[test]
    fn test_resolves_names_and_labels() {
        let resolver = ParameterResolver::default();
        let set = resolve(
            &resolver,
            &[
                ("permanent_onboard_rate", json!(5)),
                ("Average Days per provider per Month", json!("20")),
                ("Hospitalist", json!("$2,150.50")),
                ("Unrelated cell", json!("text")),
            ],
        )
        .unwrap();
        assert_eq!(set.permanent_onboard_rate, 5.0);
        assert_eq!(set.permanent_days_per_provider, 20.0);
        assert_eq!(set.hospitalist_rate, 2150.5);
    }

    #[test]
    fn test_non_numeric_rejected() {
        let resolver = ParameterResolver::new(CellSchema::default(), ResolvePolicy::Clamp);
        for bad in [json!("twenty"), json!(true), Value::Null, json!([1, 2])] {
            let err = resolve(&resolver, &[("locum_open_days", bad)]).unwrap_err();
            match err {
                RoiError::InvalidInput { key, .. } => assert_eq!(key, "locum_open_days"),
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_negative_rejected_by_default() {
        let resolver = ParameterResolver::default();
        let err = resolve(&resolver, &[("hospitalist_rate", json!(-10))]).unwrap_err();
        assert!(matches!(err, RoiError::InvalidInput { .. }));
    }

    #[test]
    fn test_negative_clamped() {
        let resolver = ParameterResolver::new(CellSchema::default(), ResolvePolicy::Clamp);
        let set = resolve(&resolver, &[("hospitalist_rate", json!(-10)), ("locum_open_days", json!(40))]).unwrap();
        assert_eq!(set.hospitalist_rate, 0.0);
        assert_eq!(set.locum_open_days, 40.0);
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let resolver = ParameterResolver::default();
        let err = resolve(
            &resolver,
            &[("permanent_onboard_rate", json!(5)), ("Providers Onboarded per Month", json!(7))],
        )
        .unwrap_err();
        match err {
            RoiError::InvalidInput { key, reason } => {
                assert_eq!(key, "Providers Onboarded per Month");
                assert_eq!(reason, "duplicate of permanent_onboard_rate");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        // Repeating the same name is a duplicate too
        let repeated = resolve(&resolver, &[("hospitalist_rate", json!(1)), ("hospitalist_rate", json!(2))]);
        assert!(matches!(repeated, Err(RoiError::InvalidInput { .. })));
    }

    #[test]
    fn test_duplicate_alias_rejected_numeric() {
        let resolver = ParameterResolver::default();
        for _ in 0..20 {
            let mut values = HashMap::new();
            values.insert("permanent_onboard_rate".to_string(), 5.0);
            values.insert("Providers Onboarded per Month".to_string(), 7.0);
            match resolver.resolve_numeric(&values) {
                Err(RoiError::InvalidInput { reason, .. }) => {
                    assert_eq!(reason, "duplicate of permanent_onboard_rate")
                }
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_resolve_numeric() {
        let resolver = ParameterResolver::default();
        let mut values = HashMap::new();
        values.insert("max_monthly_shifts".to_string(), 1960.0);
        values.insert("float_pool_shift_cost".to_string(), 90.0);
        let set = resolver.resolve_numeric(&values).unwrap();
        assert_eq!(set.max_monthly_shifts, 1960.0);
        assert_eq!(set.float_pool_shift_cost, 90.0);
        assert_eq!(set.permanent_shift_cost, 100.0);

        values.insert("locum_open_days".to_string(), f64::INFINITY);
        assert!(resolver.resolve_numeric(&values).is_err());
    }
}

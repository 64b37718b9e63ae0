//! Ordered list of labeled calculations to run later.

use crate::calculation::{Calculation, Outcome};
use crate::error::{PlanError, PlanResult};
use scuba_core::DiveResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One labeled calculation in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingEntry {
    pub label: String,
    pub calculation: Calculation,
}

/// Calculations queued up and run in one pass.
///
/// A plan file is a YAML list of entries:
///
/// ```yaml
/// - label: bottom mix
///   calculation:
///     kind: best_o2_mix
///     depth: 100
///     ppo2: 1.4
/// - label: turn
///   calculation:
///     kind: turn_pressure
///     volume: 500.0
///     pressure: 3000
///     baseline: 100.0
///     tank_count: 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingCalculations {
    entries: Vec<PendingEntry>,
}

impl PendingCalculations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, calculation: Calculation) {
        self.entries.push(PendingEntry {
            label: label.into(),
            calculation,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingEntry> + '_ {
        self.entries.iter()
    }

    /// Run every entry in order.
    ///
    /// A failing entry does not stop the ones after it; each result is
    /// returned next to its label.
    pub fn run_all(&self) -> Vec<(&str, DiveResult<Outcome>)> {
        self.entries
            .iter()
            .map(|entry| {
                let result = entry.calculation.run();
                match &result {
                    Ok(outcome) => debug!(
                        label = %entry.label,
                        kind = entry.calculation.kind(),
                        %outcome,
                        "calculation done"
                    ),
                    Err(err) => debug!(
                        label = %entry.label,
                        kind = entry.calculation.kind(),
                        %err,
                        "calculation failed"
                    ),
                }
                (entry.label.as_str(), result)
            })
            .collect()
    }

    /// Parse a YAML plan. Labels must be non-empty.
    pub fn from_yaml_str(s: &str) -> PlanResult<Self> {
        let plan: Self = serde_yaml::from_str(s)?;
        if plan.entries.iter().any(|e| e.label.trim().is_empty()) {
            return Err(PlanError::Invalid {
                what: "entry with empty label",
            });
        }
        Ok(plan)
    }

    pub fn to_yaml_string(&self) -> PlanResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl FromIterator<PendingEntry> for PendingCalculations {
    fn from_iter<I: IntoIterator<Item = PendingEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

use crate::model::Parameter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A ruleset defining guideline limits for water-quality parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub rules: Vec<ParameterRuleDef>,
}

/// A single guideline limit within a ruleset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterRuleDef {
    /// Rule name used in violations (e.g. "pH range").
    pub name: String,
    pub parameter: Parameter,
    pub condition: Condition,
    /// What a breach means (e.g. "chloramine toxicity").
    pub meaning: String,
    /// Optional rules only apply when explicitly enabled (see
    /// `EvaluateOptions::include_optional`).
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub note: Option<String>,
}

/// The comparison a rule applies to the raw, unscaled measurement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Condition {
    /// Inclusive range: `min <= value <= max`.
    Range { min: f64, max: f64 },
    /// Upper bound: `value <= limit`.
    Max { limit: f64 },
}

impl Condition {
    pub fn holds(&self, value: f64) -> bool {
        match self {
            Condition::Range { min, max } => value >= *min && value <= *max,
            Condition::Max { limit } => value <= *limit,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Range { min, max } => write!(f, "{min}..={max}"),
            Condition::Max { limit } => write!(f, "<= {limit}"),
        }
    }
}

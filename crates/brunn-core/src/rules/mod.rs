pub mod builtin;
pub mod schema;

use crate::error::BrunnError;
use schema::{Condition, RuleSetDef};
use std::path::Path;

/// Load a ruleset from a JSON file.
pub fn load_ruleset(path: &Path) -> Result<RuleSetDef, BrunnError> {
    let content = std::fs::read_to_string(path).map_err(|e| BrunnError::RulesetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let ruleset: RuleSetDef =
        serde_json::from_str(&content).map_err(|e| BrunnError::RulesetLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// Parse a ruleset from a JSON string (no file path context).
pub fn parse_ruleset_str(json: &str) -> Result<RuleSetDef, BrunnError> {
    let ruleset: RuleSetDef = serde_json::from_str(json).map_err(BrunnError::Json)?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// Validate that a ruleset is well-formed.
pub fn validate_ruleset(ruleset: &RuleSetDef) -> Result<(), BrunnError> {
    if ruleset.rules.is_empty() {
        return Err(BrunnError::RulesetInvalid("rules must not be empty".into()));
    }

    for rule in &ruleset.rules {
        if rule.name.is_empty() {
            return Err(BrunnError::RulesetInvalid(
                "rule name must not be empty".into(),
            ));
        }

        match rule.condition {
            Condition::Range { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err(BrunnError::RulesetInvalid(format!(
                        "rule '{}' has a non-finite bound",
                        rule.name
                    )));
                }
                if min >= max {
                    return Err(BrunnError::RulesetInvalid(format!(
                        "rule '{}' has inverted range {min}..={max}",
                        rule.name
                    )));
                }
            }
            Condition::Max { limit } => {
                if !limit.is_finite() {
                    return Err(BrunnError::RulesetInvalid(format!(
                        "rule '{}' has a non-finite limit",
                        rule.name
                    )));
                }
                if limit < 0.0 {
                    return Err(BrunnError::RulesetInvalid(format!(
                        "rule '{}' has a negative limit {limit}",
                        rule.name
                    )));
                }
            }
        }
    }

    Ok(())
}

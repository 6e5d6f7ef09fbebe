use crate::error::BrunnError;
use crate::rules::schema::RuleSetDef;

const WHO_DRINKING_WATER_JSON: &str = include_str!("../../../../rules/who-drinking-water.json");

/// Available predefined rulesets.
pub const PRESETS: &[&str] = &["who"];

/// Load a predefined ruleset by name.
pub fn load_preset(name: &str) -> Result<RuleSetDef, BrunnError> {
    match name {
        "who" => {
            let ruleset: RuleSetDef = serde_json::from_str(WHO_DRINKING_WATER_JSON)?;
            Ok(ruleset)
        }
        _ => Err(BrunnError::RulesetInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

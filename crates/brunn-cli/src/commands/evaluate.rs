use brunn_core::error::BrunnError;
use brunn_core::inference::{builtin, RandomForest, StandardScaler};
use brunn_core::rules::{self, builtin as rule_presets, schema::RuleSetDef};
use brunn_core::EvaluateOptions;
use std::path::PathBuf;

use crate::output::{self, EvaluationResult, SampleInput, SampleVerdict};

#[allow(clippy::too_many_arguments)]
pub fn run(
    input_file: PathBuf,
    scaler_file: Option<PathBuf>,
    model_file: Option<PathBuf>,
    rule_file: Option<PathBuf>,
    preset: Option<String>,
    include_tds: bool,
    output_format: &str,
    verbose: bool,
) -> Result<(), BrunnError> {
    // Artifacts: explicit files win, bundled demo otherwise.
    let scaler = match scaler_file {
        Some(path) => StandardScaler::load(&path)?,
        None => builtin::demo_scaler()?,
    };
    let forest = match model_file {
        Some(path) => RandomForest::load(&path)?,
        None => builtin::demo_forest()?,
    };

    let ruleset: RuleSetDef = match (rule_file, preset) {
        (Some(path), _) => rules::load_ruleset(&path)?,
        (None, Some(name)) => rule_presets::load_preset(&name)?,
        (None, None) => rule_presets::load_preset("who")?,
    };

    let options = EvaluateOptions {
        include_optional: include_tds,
    };

    let json_bytes = std::fs::read(&input_file)?;
    let input: SampleInput = serde_json::from_slice(&json_bytes)?;

    let mut samples = Vec::new();
    for (i, labeled) in input.into_vec().into_iter().enumerate() {
        let sample_id = labeled.id.unwrap_or_else(|| format!("sample-{}", i + 1));
        let verdict =
            brunn_core::evaluate_sample(&labeled.sample, &scaler, &forest, &ruleset, &options)?;
        samples.push(SampleVerdict { sample_id, verdict });
    }

    let result = EvaluationResult { samples };

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print(&result, verbose),
    }

    Ok(())
}

use crate::output::EvaluationResult;
use brunn_core::error::BrunnError;

pub fn print(result: &EvaluationResult) -> Result<(), BrunnError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

use crate::error::BrunnError;
use crate::inference::{RandomForest, StandardScaler};

const DEMO_SCALER_JSON: &str = include_str!("../../../../artifacts/demo-scaler.json");
const DEMO_FOREST_JSON: &str = include_str!("../../../../artifacts/demo-forest.json");

/// Bundled demo scaler fit on typical potability-survey statistics.
pub fn demo_scaler() -> Result<StandardScaler, BrunnError> {
    StandardScaler::from_json(DEMO_SCALER_JSON)
}

/// Bundled demo forest, small enough to read by hand. Real deployments
/// pass their own exported artifacts on the command line.
pub fn demo_forest() -> Result<RandomForest, BrunnError> {
    RandomForest::from_json(DEMO_FOREST_JSON)
}

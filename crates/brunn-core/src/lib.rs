pub mod engine;
pub mod error;
pub mod inference;
pub mod model;
pub mod rules;

pub use engine::{evaluate, Confidence, DecisionBasis, EvaluateOptions, Verdict, Violation};
pub use error::BrunnError;
pub use model::{Label, Parameter, WaterSample};

use inference::{Classifier, FeatureScaler};
use rules::schema::RuleSetDef;

/// Main API entry point: evaluate one water sample.
///
/// The scaler and classifier are pre-fit artifacts owned by the caller
/// and loaded once; they are only read here, so sharing them across
/// concurrent evaluations needs no locking.
pub fn evaluate_sample(
    sample: &WaterSample,
    scaler: &dyn FeatureScaler,
    classifier: &dyn Classifier,
    ruleset: &RuleSetDef,
    options: &EvaluateOptions,
) -> Result<Verdict, BrunnError> {
    engine::evaluate(sample, scaler, classifier, ruleset, options)
}

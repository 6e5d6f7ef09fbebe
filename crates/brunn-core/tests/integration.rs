//! End-to-end tests through evaluate_sample() with JSON-loaded artifacts,
//! exercising the same path the CLI takes: scaler -> forest -> guideline
//! rules -> verdict.

use brunn_core::engine::{DecisionBasis, EvaluateOptions};
use brunn_core::inference::{builtin, Classifier, FeatureScaler, RandomForest, StandardScaler};
use brunn_core::rules::builtin::load_preset;
use brunn_core::{evaluate_sample, BrunnError, Label, WaterSample};

fn sample(chloramines: f64, sulfate: f64, turbidity: f64) -> WaterSample {
    WaterSample {
        ph: 7.0,
        hardness: 196.36,
        solids: 22014.09,
        chloramines,
        sulfate,
        conductivity: 426.20,
        organic_carbon: 14.28,
        trihalomethanes: 66.40,
        turbidity,
    }
}

// ---------------------------------------------------------------------------
// Demo artifacts end to end
// ---------------------------------------------------------------------------

#[test]
fn clean_sample_is_potable_end_to_end() {
    let scaler = builtin::demo_scaler().unwrap();
    let forest = builtin::demo_forest().unwrap();
    let ruleset = load_preset("who").unwrap();

    let verdict = evaluate_sample(
        &sample(3.0, 200.0, 3.0),
        &scaler,
        &forest,
        &ruleset,
        &EvaluateOptions::default(),
    )
    .unwrap();

    assert!(verdict.potable);
    assert!(!verdict.override_applied);
    assert!(verdict.violations.is_empty());
    assert_eq!(verdict.basis, DecisionBasis::Classifier);
    // The demo forest exposes vote fractions, so confidence is a
    // probability, not a placeholder.
    assert!(matches!(
        verdict.confidence,
        brunn_core::Confidence::Probability(_)
    ));
}

#[test]
fn chloramines_and_sulfate_breach_overrides_forest() {
    let scaler = builtin::demo_scaler().unwrap();
    let forest = builtin::demo_forest().unwrap();
    let ruleset = load_preset("who").unwrap();

    // ph 7.0, chloramines 7.12 > 4.0, sulfate 333.6 > 250: override fires
    // whatever the forest thinks.
    let verdict = evaluate_sample(
        &sample(7.12, 333.60, 3.96),
        &scaler,
        &forest,
        &ruleset,
        &EvaluateOptions::default(),
    )
    .unwrap();

    assert!(!verdict.potable);
    assert!(verdict.override_applied);
    let rules: Vec<&str> = verdict.violations.iter().map(|v| v.rule.as_str()).collect();
    assert!(rules.contains(&"chloramines limit"));
    assert!(rules.contains(&"sulfate limit"));
}

#[test]
fn verdict_serializes_to_json() {
    let scaler = builtin::demo_scaler().unwrap();
    let forest = builtin::demo_forest().unwrap();
    let ruleset = load_preset("who").unwrap();

    let verdict = evaluate_sample(
        &sample(7.12, 333.60, 3.96),
        &scaler,
        &forest,
        &ruleset,
        &EvaluateOptions::default(),
    )
    .unwrap();

    let json = serde_json::to_string(&verdict).unwrap();
    assert!(json.contains("\"override_applied\":true"));
    assert!(json.contains("threshold_override"));
}

// ---------------------------------------------------------------------------
// Hand-built artifacts: the engine only sees the trait seams
// ---------------------------------------------------------------------------

#[test]
fn hand_built_artifacts_from_json() {
    let scaler = StandardScaler::from_json(
        r#"{ "mean": [0,0,0,0,0,0,0,0,0], "scale": [1,1,1,1,1,1,1,1,1] }"#,
    )
    .unwrap();
    // One stump on raw pH (identity scaling): ph <= 8.0 -> potable.
    let forest = RandomForest::from_json(
        r#"{
            "n_classes": 2,
            "trees": [{
                "features": [0, -2, -2],
                "thresholds": [8.0, -2.0, -2.0],
                "left": [1, -1, -1],
                "right": [2, -1, -1],
                "predictions": [null, 1, 0]
            }]
        }"#,
    )
    .unwrap();
    let ruleset = load_preset("who").unwrap();

    let verdict = evaluate_sample(
        &sample(3.0, 200.0, 3.0),
        &scaler,
        &forest,
        &ruleset,
        &EvaluateOptions::default(),
    )
    .unwrap();
    assert!(verdict.potable);

    // ph 8.3 is within guideline range but past the stump's split: the
    // classifier alone rejects it, with no violation to blame.
    let mut borderline = sample(3.0, 200.0, 3.0);
    borderline.ph = 8.3;
    let verdict = evaluate_sample(
        &borderline,
        &scaler,
        &forest,
        &ruleset,
        &EvaluateOptions::default(),
    )
    .unwrap();
    assert!(!verdict.potable);
    assert!(!verdict.override_applied);
    assert_eq!(verdict.basis, DecisionBasis::MultivariatePattern);
}

// ---------------------------------------------------------------------------
// Collaborator failures surface unchanged
// ---------------------------------------------------------------------------

struct BrokenClassifier;

impl Classifier for BrokenClassifier {
    fn predict(&self, _features: &[f64; 9]) -> Result<Label, BrunnError> {
        Err(BrunnError::Inference("model artifact truncated".into()))
    }
}

struct IdentityScaler;

impl FeatureScaler for IdentityScaler {
    fn transform(&self, features: &[f64; 9]) -> Result<[f64; 9], BrunnError> {
        Ok(*features)
    }
}

#[test]
fn classifier_failure_propagates() {
    let ruleset = load_preset("who").unwrap();
    let result = evaluate_sample(
        &sample(3.0, 200.0, 3.0),
        &IdentityScaler,
        &BrokenClassifier,
        &ruleset,
        &EvaluateOptions::default(),
    );
    assert!(matches!(result, Err(BrunnError::Inference(_))));
}

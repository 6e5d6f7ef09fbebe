use crate::error::BrunnError;
use crate::inference::{Classifier, FeatureScaler};
use crate::model::{Label, Parameter, WaterSample};
use crate::rules::schema::{ParameterRuleDef, RuleSetDef};
use serde::{Deserialize, Serialize};

/// Options controlling an evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateOptions {
    /// Apply rules marked optional in the ruleset (e.g. the TDS limit,
    /// which regulatory practice applies inconsistently).
    pub include_optional: bool,
}

/// One guideline limit breached by the raw sample values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String,
    pub parameter: Parameter,
    pub observed: f64,
    /// Textual limit description (e.g. "<= 250").
    pub limit: String,
    pub meaning: String,
}

/// How strongly the classifier favored the potable class.
///
/// Tagged so a coarse placeholder can never be mistaken for a calibrated
/// probability. Both variants carry a 0-100 percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum Confidence {
    /// Derived from the classifier's probability for the potable class.
    Probability(f64),
    /// Fixed coarse value for label-only classifiers.
    Placeholder(f64),
}

impl Confidence {
    pub fn percent(&self) -> f64 {
        match self {
            Confidence::Probability(p) | Confidence::Placeholder(p) => *p,
        }
    }
}

/// What ultimately decided the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionBasis {
    /// One or more guideline limits were breached; the classifier was
    /// overridden (or agreed).
    ThresholdOverride,
    /// No limits breached; the classifier's label stands.
    Classifier,
    /// Not potable with zero limit breaches: the classifier judged the
    /// combination of parameters unsafe even though no single threshold
    /// explains it.
    MultivariatePattern,
}

/// The authoritative potability verdict for one sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub potable: bool,
    /// The classifier's raw label, before any override.
    pub classifier_label: Label,
    pub confidence: Confidence,
    pub violations: Vec<Violation>,
    pub override_applied: bool,
    pub basis: DecisionBasis,
    /// Human-readable explanation.
    pub reason: String,
}

/// Produce a potability verdict for one sample.
///
/// Pure: deterministic given deterministic collaborators, no I/O, never
/// mutates the sample. Collaborator failures propagate unchanged; invalid
/// samples are rejected, never coerced.
pub fn evaluate(
    sample: &WaterSample,
    scaler: &dyn FeatureScaler,
    classifier: &dyn Classifier,
    ruleset: &RuleSetDef,
    options: &EvaluateOptions,
) -> Result<Verdict, BrunnError> {
    sample.validate()?;

    let features = sample.feature_vector();
    let scaled = scaler.transform(&features)?;
    let label = classifier.predict(&scaled)?;
    let probability = classifier.probability(&scaled)?;

    // Guideline rules apply to the raw, unscaled measurements.
    let violations = check_rules(sample, ruleset, options);

    let (potable, override_applied, basis) = if violations.is_empty() {
        let basis = if label.is_potable() {
            DecisionBasis::Classifier
        } else {
            DecisionBasis::MultivariatePattern
        };
        (label.is_potable(), false, basis)
    } else {
        (false, true, DecisionBasis::ThresholdOverride)
    };

    let confidence = match probability {
        Some(p) => Confidence::Probability(p * 100.0),
        // Coarse mode for label-only classifiers, kept deliberately.
        None if label.is_potable() => Confidence::Placeholder(100.0),
        None => Confidence::Placeholder(25.0),
    };

    let reason = build_reason(&violations, label, basis);

    Ok(Verdict {
        potable,
        classifier_label: label,
        confidence,
        violations,
        override_applied,
        basis,
        reason,
    })
}

fn check_rules(
    sample: &WaterSample,
    ruleset: &RuleSetDef,
    options: &EvaluateOptions,
) -> Vec<Violation> {
    ruleset
        .rules
        .iter()
        .filter(|rule| options.include_optional || !rule.optional)
        .filter_map(|rule| {
            let observed = sample.value_of(rule.parameter);
            if rule.condition.holds(observed) {
                None
            } else {
                Some(violation(rule, observed))
            }
        })
        .collect()
}

fn violation(rule: &ParameterRuleDef, observed: f64) -> Violation {
    Violation {
        rule: rule.name.clone(),
        parameter: rule.parameter,
        observed,
        limit: rule.condition.to_string(),
        meaning: rule.meaning.clone(),
    }
}

fn build_reason(violations: &[Violation], label: Label, basis: DecisionBasis) -> String {
    match basis {
        DecisionBasis::ThresholdOverride => {
            let parts: Vec<String> = violations
                .iter()
                .map(|v| {
                    format!(
                        "{}: {} {} outside {} ({})",
                        v.rule,
                        v.observed,
                        v.parameter.unit(),
                        v.limit,
                        v.meaning
                    )
                })
                .collect();
            let agreement = if label.is_potable() {
                "overriding classifier verdict"
            } else {
                "classifier agrees"
            };
            format!("Not potable, {}: {}", agreement, parts.join("; "))
        }
        DecisionBasis::Classifier => {
            "Potable: all guideline limits met and classifier verdict is potable".to_string()
        }
        DecisionBasis::MultivariatePattern => {
            "Not potable: no single guideline limit breached, but the classifier judged the \
             combination of parameters unsafe"
                .to_string()
        }
    }
}

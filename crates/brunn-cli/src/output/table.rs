use crate::output::EvaluationResult;
use brunn_core::{Confidence, DecisionBasis};

pub fn print(result: &EvaluationResult, verbose: bool) {
    let multi_sample = result.samples.len() > 1;

    for (i, sample) in result.samples.iter().enumerate() {
        if multi_sample {
            if i > 0 {
                println!();
            }
            println!("--- Sample: {} ---\n", sample.sample_id);
        }

        let v = &sample.verdict;
        let headline = if v.potable { "POTABLE" } else { "NOT POTABLE" };
        let confidence_note = match v.confidence {
            Confidence::Probability(pct) => format!("{pct:.1}% confidence"),
            Confidence::Placeholder(pct) => format!("{pct:.0}% (coarse, model has no probability)"),
        };
        println!("  Verdict: {} ({})\n", headline, confidence_note);

        if !v.violations.is_empty() {
            println!("  Breached limits:");
            for violation in &v.violations {
                println!(
                    "    {} -> {} {} outside {}  ({})",
                    violation.rule,
                    violation.observed,
                    violation.parameter.unit(),
                    violation.limit,
                    violation.meaning,
                );
            }
            println!();
        }

        if v.override_applied {
            println!("  Guideline limits override the classifier here.");
        } else if v.basis == DecisionBasis::MultivariatePattern {
            println!("  No single limit breached; the classifier flagged the combination.");
        }

        if verbose {
            println!("  Classifier label: {}", v.classifier_label);
            println!("  {}", v.reason);
        }
        println!();
    }
}

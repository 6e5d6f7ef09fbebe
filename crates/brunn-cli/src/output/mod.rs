pub mod json;
pub mod table;

use brunn_core::Verdict;
use serde::{Deserialize, Serialize};

/// A sample's verdict, tagged with its input identifier.
#[derive(Debug, Clone, Serialize)]
pub struct SampleVerdict {
    pub sample_id: String,
    pub verdict: Verdict,
}

/// Full result across all samples in the input file.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub samples: Vec<SampleVerdict>,
}

/// Input form: a sample object with an optional id, or an array of them.
#[derive(Debug, Clone, Deserialize)]
pub struct LabeledSample {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub sample: brunn_core::WaterSample,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SampleInput {
    Many(Vec<LabeledSample>),
    One(LabeledSample),
}

impl SampleInput {
    pub fn into_vec(self) -> Vec<LabeledSample> {
        match self {
            SampleInput::Many(samples) => samples,
            SampleInput::One(sample) => vec![sample],
        }
    }
}

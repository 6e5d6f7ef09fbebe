use crate::error::BrunnError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of measurements in a complete water sample.
pub const FEATURE_COUNT: usize = 9;

/// The nine measured water-quality parameters.
///
/// `ALL` fixes the canonical feature order the scaler and classifier were
/// trained on. Reordering silently corrupts predictions, so positional
/// access never leaves this crate (see [`WaterSample::feature_vector`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Ph,
    Hardness,
    Solids,
    Chloramines,
    Sulfate,
    Conductivity,
    OrganicCarbon,
    Trihalomethanes,
    Turbidity,
}

impl Parameter {
    /// Canonical training order.
    pub const ALL: [Parameter; FEATURE_COUNT] = [
        Parameter::Ph,
        Parameter::Hardness,
        Parameter::Solids,
        Parameter::Chloramines,
        Parameter::Sulfate,
        Parameter::Conductivity,
        Parameter::OrganicCarbon,
        Parameter::Trihalomethanes,
        Parameter::Turbidity,
    ];

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Hardness => "mg/L",
            Parameter::Solids => "ppm",
            Parameter::Chloramines => "ppm",
            Parameter::Sulfate => "mg/L",
            Parameter::Conductivity => "uS/cm",
            Parameter::OrganicCarbon => "ppm",
            Parameter::Trihalomethanes => "ug/L",
            Parameter::Turbidity => "NTU",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Hardness => "Hardness",
            Parameter::Solids => "Total dissolved solids",
            Parameter::Chloramines => "Chloramines",
            Parameter::Sulfate => "Sulfate",
            Parameter::Conductivity => "Conductivity",
            Parameter::OrganicCarbon => "Organic carbon",
            Parameter::Trihalomethanes => "Trihalomethanes",
            Parameter::Turbidity => "Turbidity",
        }
    }

    /// Serde-facing snake_case name, used in rule files and messages.
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::Ph => "ph",
            Parameter::Hardness => "hardness",
            Parameter::Solids => "solids",
            Parameter::Chloramines => "chloramines",
            Parameter::Sulfate => "sulfate",
            Parameter::Conductivity => "conductivity",
            Parameter::OrganicCarbon => "organic_carbon",
            Parameter::Trihalomethanes => "trihalomethanes",
            Parameter::Turbidity => "turbidity",
        }
    }

    /// Generous physical sanity bounds. Values outside are rejected as
    /// malformed input rather than clamped.
    pub fn sanity_bounds(&self) -> (f64, f64) {
        match self {
            Parameter::Ph => (0.0, 14.0),
            Parameter::Hardness => (0.0, 1_000.0),
            Parameter::Solids => (0.0, 100_000.0),
            Parameter::Chloramines => (0.0, 50.0),
            Parameter::Sulfate => (0.0, 2_000.0),
            Parameter::Conductivity => (0.0, 5_000.0),
            Parameter::OrganicCarbon => (0.0, 100.0),
            Parameter::Trihalomethanes => (0.0, 500.0),
            Parameter::Turbidity => (0.0, 50.0),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One complete set of water-quality measurements.
///
/// Fields are named, never positional: callers cannot hand the engine a
/// raw vector in the wrong order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterSample {
    pub ph: f64,
    pub hardness: f64,
    pub solids: f64,
    pub chloramines: f64,
    pub sulfate: f64,
    pub conductivity: f64,
    pub organic_carbon: f64,
    pub trihalomethanes: f64,
    pub turbidity: f64,
}

impl WaterSample {
    pub fn value_of(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Ph => self.ph,
            Parameter::Hardness => self.hardness,
            Parameter::Solids => self.solids,
            Parameter::Chloramines => self.chloramines,
            Parameter::Sulfate => self.sulfate,
            Parameter::Conductivity => self.conductivity,
            Parameter::OrganicCarbon => self.organic_carbon,
            Parameter::Trihalomethanes => self.trihalomethanes,
            Parameter::Turbidity => self.turbidity,
        }
    }

    /// Assemble the canonical training-order feature vector.
    ///
    /// Crate-internal on purpose: the only path from named fields to a
    /// positional vector goes through `Parameter::ALL`.
    pub(crate) fn feature_vector(&self) -> [f64; FEATURE_COUNT] {
        let mut features = [0.0; FEATURE_COUNT];
        for (slot, parameter) in features.iter_mut().zip(Parameter::ALL) {
            *slot = self.value_of(parameter);
        }
        features
    }

    /// Reject non-finite or physically impossible values. Nothing is
    /// clamped or defaulted.
    pub fn validate(&self) -> Result<(), BrunnError> {
        for parameter in Parameter::ALL {
            let value = self.value_of(parameter);
            if !value.is_finite() {
                return Err(BrunnError::InvalidInput {
                    parameter: parameter.key().to_string(),
                    value,
                    reason: "not a finite number".to_string(),
                });
            }
            let (min, max) = parameter.sanity_bounds();
            if value < min || value > max {
                return Err(BrunnError::InvalidInput {
                    parameter: parameter.key().to_string(),
                    value,
                    reason: format!("outside plausible range {min}..={max}"),
                });
            }
        }
        Ok(())
    }
}

/// Classifier output as a tagged verdict rather than a bare 0/1 scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    NotPotable,
    Potable,
}

impl Label {
    /// Map a model class index (0 = not potable, 1 = potable).
    pub fn from_class_index(index: usize) -> Result<Label, BrunnError> {
        match index {
            0 => Ok(Label::NotPotable),
            1 => Ok(Label::Potable),
            other => Err(BrunnError::Inference(format!(
                "classifier produced unknown class index {other}"
            ))),
        }
    }

    pub fn is_potable(&self) -> bool {
        matches!(self, Label::Potable)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Potable => write!(f, "Potable"),
            Label::NotPotable => write!(f, "Not potable"),
        }
    }
}

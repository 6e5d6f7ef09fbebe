pub mod builtin;
pub mod forest;
pub mod scaler;
pub mod tree;

use crate::error::BrunnError;
use crate::model::{Label, FEATURE_COUNT};

pub use forest::RandomForest;
pub use scaler::StandardScaler;
pub use tree::DecisionTree;

/// A pre-fit feature normalizer.
///
/// Implementations are ready to use as loaded; the engine never fits one.
pub trait FeatureScaler {
    fn transform(&self, features: &[f64; FEATURE_COUNT])
        -> Result<[f64; FEATURE_COUNT], BrunnError>;
}

/// A pre-trained binary potability classifier.
pub trait Classifier {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Label, BrunnError>;

    /// Probability of the potable class, when the model exposes one.
    ///
    /// `None` means the model only produces bare labels; callers fall back
    /// to a coarse placeholder confidence and must not treat it as
    /// calibrated.
    fn probability(&self, features: &[f64; FEATURE_COUNT]) -> Result<Option<f64>, BrunnError> {
        let _ = features;
        Ok(None)
    }
}

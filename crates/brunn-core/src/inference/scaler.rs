use crate::error::BrunnError;
use crate::inference::FeatureScaler;
use crate::model::FEATURE_COUNT;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A pre-fit standardizing scaler: `(x - mean) / scale` per feature.
///
/// The JSON form is the exported state of the scaler the classifier was
/// trained with; this crate only applies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, BrunnError> {
        let scaler = StandardScaler { mean, scale };
        scaler.check()?;
        Ok(scaler)
    }

    pub fn from_json(json: &str) -> Result<Self, BrunnError> {
        let scaler: StandardScaler = serde_json::from_str(json)?;
        scaler.check()?;
        Ok(scaler)
    }

    pub fn load(path: &Path) -> Result<Self, BrunnError> {
        let content = std::fs::read_to_string(path).map_err(|e| BrunnError::ArtifactLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content).map_err(|e| BrunnError::ArtifactLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn check(&self) -> Result<(), BrunnError> {
        if self.mean.len() != FEATURE_COUNT {
            return Err(BrunnError::ShapeMismatch {
                expected: FEATURE_COUNT,
                got: self.mean.len(),
            });
        }
        if self.scale.len() != FEATURE_COUNT {
            return Err(BrunnError::ShapeMismatch {
                expected: FEATURE_COUNT,
                got: self.scale.len(),
            });
        }
        if self
            .mean
            .iter()
            .chain(self.scale.iter())
            .any(|v| !v.is_finite())
        {
            return Err(BrunnError::ArtifactInvalid(
                "scaler contains non-finite values".into(),
            ));
        }
        if self.scale.iter().any(|s| *s == 0.0) {
            return Err(BrunnError::ArtifactInvalid(
                "scaler has a zero scale factor".into(),
            ));
        }
        Ok(())
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(
        &self,
        features: &[f64; FEATURE_COUNT],
    ) -> Result<[f64; FEATURE_COUNT], BrunnError> {
        let mut scaled = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            scaled[i] = (features[i] - self.mean[i]) / self.scale[i];
        }
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_standardizes() {
        let scaler = StandardScaler::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
            vec![2.0; 9],
        )
        .unwrap();
        let scaled = scaler
            .transform(&[3.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 13.0])
            .unwrap();
        assert_eq!(scaled[0], 1.0);
        assert_eq!(scaled[1], 0.0);
        assert_eq!(scaled[8], 2.0);
    }

    #[test]
    fn test_wrong_width_rejected() {
        assert!(matches!(
            StandardScaler::new(vec![0.0; 8], vec![1.0; 9]),
            Err(BrunnError::ShapeMismatch { expected: 9, got: 8 })
        ));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let mut scale = vec![1.0; 9];
        scale[4] = 0.0;
        assert!(StandardScaler::new(vec![0.0; 9], scale).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{ "mean": [0,0,0,0,0,0,0,0,0], "scale": [1,1,1,1,1,1,1,1,1] }"#;
        let scaler = StandardScaler::from_json(json).unwrap();
        let identity = scaler
            .transform(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
            .unwrap();
        assert_eq!(identity, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_non_finite_rejected() {
        let json = r#"{ "mean": [0,0,0,0,0,0,0,0,null], "scale": [1,1,1,1,1,1,1,1,1] }"#;
        assert!(StandardScaler::from_json(json).is_err());
    }
}

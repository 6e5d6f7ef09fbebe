use crate::error::BrunnError;
use crate::inference::tree::{DecisionTree, TreeDef};
use crate::inference::Classifier;
use crate::model::{Label, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized form of a trained random forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestDef {
    pub n_classes: usize,
    pub trees: Vec<TreeDef>,
}

/// A pre-trained random forest classifier (inference only).
///
/// Each tree votes independently; the majority class wins and the vote
/// fraction for the potable class doubles as a probability estimate.
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_classes: usize,
}

impl RandomForest {
    pub fn from_def(def: &ForestDef) -> Result<Self, BrunnError> {
        if def.trees.is_empty() {
            return Err(BrunnError::ArtifactInvalid("empty forest".into()));
        }
        if def.n_classes != 2 {
            return Err(BrunnError::ArtifactInvalid(format!(
                "potability forest must be binary, got {} classes",
                def.n_classes
            )));
        }
        let trees = def
            .trees
            .iter()
            .map(|t| DecisionTree::from_def(t, def.n_classes))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RandomForest {
            trees,
            n_classes: def.n_classes,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, BrunnError> {
        let def: ForestDef = serde_json::from_str(json)?;
        Self::from_def(&def)
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

    /// Vote count per class for one sample.
    fn votes(&self, features: &[f64; FEATURE_COUNT]) -> Vec<usize> {
        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            votes[tree.predict(features)] += 1;
        }
        votes
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn total_nodes(&self) -> usize {
        self.trees.iter().map(DecisionTree::n_nodes).sum()
    }

    pub fn max_depth(&self) -> usize {
        self.trees.iter().map(DecisionTree::depth).max().unwrap_or(0)
    }
}

impl Classifier for RandomForest {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Label, BrunnError> {
        let votes = self.votes(features);
        // Ties break toward not potable: class 0 wins on equal votes.
        let class = if votes[1] > votes[0] { 1 } else { 0 };
        Label::from_class_index(class)
    }

    fn probability(&self, features: &[f64; FEATURE_COUNT]) -> Result<Option<f64>, BrunnError> {
        let votes = self.votes(features);
        Ok(Some(votes[1] as f64 / self.trees.len() as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(feature: i32, threshold: f64, below: usize, above: usize) -> TreeDef {
        TreeDef {
            features: vec![feature, -2, -2],
            thresholds: vec![threshold, -2.0, -2.0],
            left: vec![1, -1, -1],
            right: vec![2, -1, -1],
            predictions: vec![None, Some(below), Some(above)],
        }
    }

    fn constant(class: usize) -> TreeDef {
        TreeDef {
            features: vec![-2],
            thresholds: vec![-2.0],
            left: vec![-1],
            right: vec![-1],
            predictions: vec![Some(class)],
        }
    }

    fn forest(trees: Vec<TreeDef>) -> RandomForest {
        RandomForest::from_def(&ForestDef {
            n_classes: 2,
            trees,
        })
        .unwrap()
    }

    fn features(f0: f64, f1: f64) -> [f64; FEATURE_COUNT] {
        let mut fs = [0.0; FEATURE_COUNT];
        fs[0] = f0;
        fs[1] = f1;
        fs
    }

    #[test]
    fn test_unanimous_vote() {
        let rf = forest(vec![
            stump(0, 0.5, 0, 1),
            stump(1, 0.5, 0, 1),
            constant(1),
        ]);
        let fs = features(0.7, 0.7);
        assert_eq!(rf.predict(&fs).unwrap(), Label::Potable);
        assert_eq!(rf.probability(&fs).unwrap(), Some(1.0));
    }

    #[test]
    fn test_majority_vote() {
        let rf = forest(vec![
            stump(0, 0.5, 0, 1),
            stump(1, 0.5, 0, 1),
            constant(1),
        ]);
        // stump0 -> 0, stump1 -> 1, constant -> 1
        let fs = features(0.3, 0.7);
        assert_eq!(rf.predict(&fs).unwrap(), Label::Potable);
        let p = rf.probability(&fs).unwrap().unwrap();
        assert!((p - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_tie_breaks_not_potable() {
        let rf = forest(vec![constant(0), constant(1)]);
        assert_eq!(
            rf.predict(&features(0.0, 0.0)).unwrap(),
            Label::NotPotable
        );
    }

    #[test]
    fn test_metadata() {
        let rf = forest(vec![stump(0, 0.5, 0, 1), constant(1)]);
        assert_eq!(rf.n_trees(), 2);
        assert_eq!(rf.total_nodes(), 4);
        assert_eq!(rf.max_depth(), 1);
    }

    #[test]
    fn test_empty_forest_rejected() {
        assert!(RandomForest::from_def(&ForestDef {
            n_classes: 2,
            trees: vec![],
        })
        .is_err());
    }

    #[test]
    fn test_non_binary_forest_rejected() {
        assert!(RandomForest::from_def(&ForestDef {
            n_classes: 3,
            trees: vec![constant(1)],
        })
        .is_err());
    }
}

use crate::error::BrunnError;
use crate::model::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

/// A node in a trained decision tree.
#[derive(Debug, Clone)]
enum Node {
    /// Terminal node carrying the predicted class index.
    Leaf { class: usize },
    /// Internal split: `features[feature] <= threshold` goes left.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Serialized form of one tree, mirroring sklearn's parallel-array export.
///
/// `feature == -2` marks a leaf; leaf nodes carry their class in
/// `predictions`, internal nodes carry child indices in `left`/`right`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeDef {
    pub features: Vec<i32>,
    pub thresholds: Vec<f64>,
    pub left: Vec<i32>,
    pub right: Vec<i32>,
    pub predictions: Vec<Option<usize>>,
}

/// A single pre-trained decision tree (inference only).
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Build a tree from its serialized parallel-array form.
    ///
    /// Every structural assumption traversal relies on is checked here,
    /// so `predict` cannot index out of bounds on a loaded artifact.
    pub fn from_def(def: &TreeDef, n_classes: usize) -> Result<Self, BrunnError> {
        let n = def.features.len();
        if n == 0 {
            return Err(BrunnError::ArtifactInvalid("empty tree".into()));
        }
        if def.thresholds.len() != n
            || def.left.len() != n
            || def.right.len() != n
            || def.predictions.len() != n
        {
            return Err(BrunnError::ArtifactInvalid(
                "inconsistent tree array lengths".into(),
            ));
        }

        let mut nodes = Vec::with_capacity(n);
        for i in 0..n {
            if def.features[i] < 0 {
                let class = def.predictions[i].ok_or_else(|| {
                    BrunnError::ArtifactInvalid(format!("leaf node {i} has no prediction"))
                })?;
                if class >= n_classes {
                    return Err(BrunnError::ArtifactInvalid(format!(
                        "leaf node {i} predicts class {class} of {n_classes}"
                    )));
                }
                nodes.push(Node::Leaf { class });
            } else {
                let feature = def.features[i] as usize;
                if feature >= FEATURE_COUNT {
                    return Err(BrunnError::ArtifactInvalid(format!(
                        "node {i} splits on feature {feature} of {FEATURE_COUNT}"
                    )));
                }
                if !def.thresholds[i].is_finite() {
                    return Err(BrunnError::ArtifactInvalid(format!(
                        "node {i} has a non-finite threshold"
                    )));
                }
                let left = child_index(def.left[i], n, i)?;
                let right = child_index(def.right[i], n, i)?;
                nodes.push(Node::Split {
                    feature,
                    threshold: def.thresholds[i],
                    left,
                    right,
                });
            }
        }

        Ok(DecisionTree { nodes })
    }

    /// Classify one sample by walking root to leaf.
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> usize {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { class } => return *class,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    /// Longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.node_depth(0)
    }

    fn node_depth(&self, idx: usize) -> usize {
        match &self.nodes[idx] {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => {
                1 + self.node_depth(*left).max(self.node_depth(*right))
            }
        }
    }
}

// Children must sit after their parent (sklearn's export guarantees
// this), which also rules out cycles in a corrupt artifact.
fn child_index(raw: i32, n_nodes: usize, parent: usize) -> Result<usize, BrunnError> {
    if raw < 0 || raw as usize >= n_nodes || raw as usize <= parent {
        return Err(BrunnError::ArtifactInvalid(format!(
            "node {parent} has dangling child index {raw}"
        )));
    }
    Ok(raw as usize)
}

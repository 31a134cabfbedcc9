//! A single regression tree.
//!
//! Nodes are stored in a flat array with the root at index 0 and every child
//! index strictly greater than its parent's, so traversal always terminates.
//! Samples with `x < threshold` go left; a NaN input follows `default_left`.

use ecocast_core::errors::ArtifactError;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn unit_cover() -> f64 {
    1.0
}

/// One node of a regression tree, as serialized in model artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        #[serde(default = "default_true")]
        default_left: bool,
        /// Training-sample weight that reached this node.
        #[serde(default = "unit_cover")]
        cover: f64,
    },
    Leaf {
        value: f64,
        #[serde(default = "unit_cover")]
        cover: f64,
    },
}

impl TreeNode {
    pub fn cover(&self) -> f64 {
        match self {
            Self::Split { cover, .. } | Self::Leaf { cover, .. } => *cover,
        }
    }
}

/// Validated regression tree with precomputed node expectations.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    nodes: Vec<TreeNode>,
    /// Cover-weighted mean output of the subtree rooted at each node.
    expectations: Vec<f64>,
}

impl RegressionTree {
    /// Validate node structure against the model's feature count.
    ///
    /// `tree` is the tree's position in the ensemble, used in error messages.
    ///
    /// # Errors
    /// `InvalidTree` if the nodes do not form a single tree rooted at 0,
    /// reference an unknown feature, or carry non-finite numbers.
    pub fn new(nodes: Vec<TreeNode>, n_features: usize, tree: usize) -> Result<Self, ArtifactError> {
        let invalid = |node: usize, reason: String| ArtifactError::InvalidTree { tree, node, reason };

        if nodes.is_empty() {
            return Err(invalid(0, "tree has no nodes".to_string()));
        }

        let mut parents = vec![0usize; nodes.len()];
        for (i, node) in nodes.iter().enumerate() {
            let cover = node.cover();
            if !cover.is_finite() || cover <= 0.0 {
                return Err(invalid(i, format!("cover must be positive, got {cover}")));
            }
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    if feature >= n_features {
                        return Err(invalid(
                            i,
                            format!("feature index {feature} out of range ({n_features} features)"),
                        ));
                    }
                    if threshold.is_nan() {
                        return Err(invalid(i, "threshold is NaN".to_string()));
                    }
                    for child in [left, right] {
                        if child <= i || child >= nodes.len() {
                            return Err(invalid(i, format!("invalid child index {child}")));
                        }
                        parents[child] += 1;
                    }
                }
                TreeNode::Leaf { value, .. } => {
                    if !value.is_finite() {
                        return Err(invalid(i, format!("leaf value is not finite: {value}")));
                    }
                }
            }
        }

        if let Some(orphan) = (1..nodes.len()).find(|&i| parents[i] != 1) {
            return Err(invalid(
                orphan,
                format!("node has {} parents, expected 1", parents[orphan]),
            ));
        }

        let expectations = Self::expectations(&nodes);
        Ok(Self {
            nodes,
            expectations,
        })
    }

    /// Children always follow their parent, so one reverse pass suffices.
    fn expectations(nodes: &[TreeNode]) -> Vec<f64> {
        let mut expected = vec![0.0; nodes.len()];
        for i in (0..nodes.len()).rev() {
            expected[i] = match nodes[i] {
                TreeNode::Leaf { value, .. } => value,
                TreeNode::Split { left, right, .. } => {
                    let wl = nodes[left].cover();
                    let wr = nodes[right].cover();
                    (wl * expected[left] + wr * expected[right]) / (wl + wr)
                }
            };
        }
        expected
    }

    /// Expected output over the training distribution.
    pub fn expected_value(&self) -> f64 {
        self.expectations[0]
    }

    fn next(&self, node: &TreeNode, features: &[f64]) -> Option<usize> {
        match *node {
            TreeNode::Leaf { .. } => None,
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
                default_left,
                ..
            } => {
                let x = features[feature];
                let go_left = if x.is_nan() {
                    default_left
                } else {
                    x < threshold
                };
                Some(if go_left { left } else { right })
            }
        }
    }

    /// Leaf value for one sample. Caller guarantees `features` covers every split feature.
    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        while let Some(child) = self.next(&self.nodes[idx], features) {
            idx = child;
        }
        self.expectations[idx]
    }

    /// Add this tree's per-feature path attribution into `contributions`.
    ///
    /// Each split credits its feature with the change in expected output
    /// between the node and the child taken, so
    /// `expected_value() + Σ credited == predict(features)`.
    pub fn attribute(&self, features: &[f64], contributions: &mut [f64]) {
        let mut idx = 0;
        while let Some(child) = self.next(&self.nodes[idx], features) {
            if let TreeNode::Split { feature, .. } = self.nodes[idx] {
                contributions[feature] += self.expectations[child] - self.expectations[idx];
            }
            idx = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> Vec<TreeNode> {
        vec![
            TreeNode::Split {
                feature: 0,
                threshold: 50.0,
                left: 1,
                right: 2,
                default_left: true,
                cover: 100.0,
            },
            TreeNode::Leaf {
                value: 5.0,
                cover: 40.0,
            },
            TreeNode::Leaf {
                value: 25.0,
                cover: 60.0,
            },
        ]
    }

    #[test]
    fn strict_less_than_goes_left() {
        let tree = RegressionTree::new(stump(), 1, 0).unwrap();
        assert_eq!(tree.predict(&[49.9]), 5.0);
        assert_eq!(tree.predict(&[50.0]), 25.0);
    }

    #[test]
    fn nan_follows_default_direction() {
        let tree = RegressionTree::new(stump(), 1, 0).unwrap();
        assert_eq!(tree.predict(&[f64::NAN]), 5.0);
    }

    #[test]
    fn expectation_is_cover_weighted() {
        let tree = RegressionTree::new(stump(), 1, 0).unwrap();
        assert!((tree.expected_value() - 17.0).abs() < 1e-12);
    }

    #[test]
    fn attribution_is_additive() {
        let tree = RegressionTree::new(stump(), 1, 0).unwrap();
        let mut contributions = [0.0];
        tree.attribute(&[80.0], &mut contributions);
        assert!((tree.expected_value() + contributions[0] - tree.predict(&[80.0])).abs() < 1e-12);
    }

    #[test]
    fn backward_child_is_rejected() {
        let mut nodes = stump();
        nodes[0] = TreeNode::Split {
            feature: 0,
            threshold: 1.0,
            left: 0,
            right: 2,
            default_left: true,
            cover: 1.0,
        };
        let err = RegressionTree::new(nodes, 1, 3).unwrap_err();
        assert!(err.to_string().contains("tree 3"));
    }

    #[test]
    fn feature_out_of_range_is_rejected() {
        assert!(RegressionTree::new(stump(), 0, 0).is_err());
    }

    #[test]
    fn shared_child_is_rejected() {
        let nodes = vec![
            TreeNode::Split {
                feature: 0,
                threshold: 1.0,
                left: 1,
                right: 1,
                default_left: true,
                cover: 1.0,
            },
            TreeNode::Leaf {
                value: 1.0,
                cover: 1.0,
            },
        ];
        assert!(RegressionTree::new(nodes, 1, 0).is_err());
    }

    #[test]
    fn leaf_and_split_deserialize_untagged() {
        let json = r#"[
            {"feature": 0, "threshold": 50.0, "left": 1, "right": 2, "cover": 100.0},
            {"value": 5.0, "cover": 40.0},
            {"value": 25.0}
        ]"#;
        let nodes: Vec<TreeNode> = serde_json::from_str(json).unwrap();
        assert!(matches!(nodes[0], TreeNode::Split { default_left: true, .. }));
        assert_eq!(nodes[2].cover(), 1.0);
    }
}

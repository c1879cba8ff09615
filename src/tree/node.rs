use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;

use crate::error::{LogicError, Result};
use crate::tree::comparison::Comparison;

/// Named feature values of one sample.
pub type Features = BTreeMap<String, f64>;

/// A decision tree node: either a Boolean test with two children or a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Split {
        feature: String,
        threshold: f64,
        #[serde(default)]
        comparison: Comparison,
        on_true: Box<Node>,
        on_false: Box<Node>,
    },
    Leaf {
        prediction: String,
    },
}

/// One test taken on the way from the root to a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub feature: String,
    pub comparison: Comparison,
    pub threshold: f64,
    pub value: f64,
    pub outcome: bool,
}

/// The full path a sample took through the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub decisions: Vec<Decision>,
    pub prediction: String,
}

impl Node {
    pub fn leaf(prediction: impl Into<String>) -> Node {
        Node::Leaf { prediction: prediction.into() }
    }

    pub fn split(
        feature: impl Into<String>,
        comparison: Comparison,
        threshold: f64,
        on_true: Node,
        on_false: Node,
    ) -> Node {
        Node::Split {
            feature: feature.into(),
            threshold,
            comparison,
            on_true: Box::new(on_true),
            on_false: Box::new(on_false),
        }
    }

    /// Walks from this node to a leaf and returns its prediction.
    pub fn predict(&self, features: &Features) -> Result<&str> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { prediction } => return Ok(prediction.as_str()),
                Node::Split { feature, threshold, comparison, on_true, on_false } => {
                    let decision = decide(feature, *comparison, *threshold, features)?;
                    node = if decision.outcome { &**on_true } else { &**on_false };
                }
            }
        }
    }

    /// Like `predict`, but records every test along the way.
    pub fn trace(&self, features: &Features) -> Result<Trace> {
        let mut decisions = Vec::new();
        let mut node = self;
        loop {
            match node {
                Node::Leaf { prediction } => {
                    return Ok(Trace { decisions, prediction: prediction.clone() });
                }
                Node::Split { feature, threshold, comparison, on_true, on_false } => {
                    let decision = decide(feature, *comparison, *threshold, features)?;
                    node = if decision.outcome { &**on_true } else { &**on_false };
                    decisions.push(decision);
                }
            }
        }
    }

    /// Number of splits on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Split { on_true, on_false, .. } => 1 + on_true.depth().max(on_false.depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Split { on_true, on_false, .. } => on_true.leaf_count() + on_false.leaf_count(),
        }
    }
}

/// Applies one split's Boolean test to a sample.
fn decide(
    feature: &str,
    comparison: Comparison,
    threshold: f64,
    features: &Features,
) -> Result<Decision> {
    let value = *features
        .get(feature)
        .ok_or_else(|| LogicError::MissingFeature(feature.to_owned()))?;
    let outcome = comparison.test(value, threshold);
    log::debug!("{feature} = {value} {comparison} {threshold} -> {outcome}");
    Ok(Decision {
        feature: feature.to_owned(),
        comparison,
        threshold,
        value,
        outcome,
    })
}

use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::error::{LogicError, Result};
use crate::tree::node::{Features, Node, Trace};

/// A named decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Title shown above the test cases, e.g. "Should I Go Outside?".
    pub name: String,
    pub root: Node,
}

/// A labelled sample to run through a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub description: String,
    pub features: Features,
}

impl TestCase {
    pub fn new(description: impl Into<String>, features: &[(&str, f64)]) -> TestCase {
        TestCase {
            description: description.into(),
            features: features.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }
}

impl DecisionTree {
    pub fn new(name: impl Into<String>, root: Node) -> DecisionTree {
        DecisionTree { name: name.into(), root }
    }

    pub fn predict(&self, features: &Features) -> Result<&str> {
        self.root.predict(features)
    }

    pub fn trace(&self, features: &Features) -> Result<Trace> {
        self.root.trace(features)
    }

    /// Serializes the tree to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json(path.as_ref(), self)
    }

    /// Deserializes a tree from a JSON file previously written by `save_json`.
    pub fn load_json(path: impl AsRef<Path>) -> Result<DecisionTree> {
        read_json(path.as_ref())
    }
}

/// Loads a JSON array of test cases.
pub fn load_cases_json(path: impl AsRef<Path>) -> Result<Vec<TestCase>> {
    read_json(path.as_ref())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let unable = |e: &dyn std::fmt::Display| {
        LogicError::UnableToWrite(path.display().to_string(), e.to_string())
    };
    let file = std::fs::File::create(path).map_err(|e| unable(&e))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value).map_err(|e| unable(&e))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let unable = |e: &dyn std::fmt::Display| {
        LogicError::UnableToRead(path.display().to_string(), e.to_string())
    };
    let file = std::fs::File::open(path).map_err(|e| unable(&e))?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| unable(&e))
}

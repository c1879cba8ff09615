use serde::{Serialize, Deserialize};
use std::path::PathBuf;

use crate::error::Result;
use crate::gates::gate::Gate;
use crate::tree::tree::DecisionTree;
use crate::tree::weather::go_outside_tree;

/// A printable part of the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Gates,
    Circuit,
    Tree,
    Xor,
    Vectorized,
    Takeaways,
}

impl Section {
    /// The full walkthrough, in presentation order.
    pub const ALL: [Section; 6] = [
        Section::Gates,
        Section::Circuit,
        Section::Tree,
        Section::Xor,
        Section::Vectorized,
        Section::Takeaways,
    ];
}

/// Options for one demo run.
///
/// - `sections`    — what to print, in order; the title banner is printed
///                   only when every section is selected
/// - `gates`       — which truth tables the gates section shows
/// - `json`        — emit one JSON document instead of text
/// - `tree`        — an already loaded tree; takes precedence over `tree_path`
/// - `tree_path`   — decision tree file replacing the built-in weather tree
/// - `cases_path`  — JSON array of test cases replacing the built-in four
/// - `trace`       — print each Boolean test taken through the tree
/// - `random_rows` — replace the fixed vectorized dataset with random samples
/// - `seed`        — seed for `random_rows`
/// - `grid`        — weight/bias range searched for single-unit gates
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub sections: Vec<Section>,
    pub gates: Vec<Gate>,
    pub json: bool,
    pub tree: Option<DecisionTree>,
    pub tree_path: Option<PathBuf>,
    pub cases_path: Option<PathBuf>,
    pub trace: bool,
    pub random_rows: Option<usize>,
    pub seed: u64,
    pub grid: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            sections: Section::ALL.to_vec(),
            gates: Gate::ALL.to_vec(),
            json: false,
            tree: None,
            tree_path: None,
            cases_path: None,
            trace: false,
            random_rows: None,
            seed: 42,
            grid: 2,
        }
    }
}

impl DemoConfig {
    /// Config printing a single section with otherwise default options.
    pub fn only(section: Section) -> DemoConfig {
        DemoConfig { sections: vec![section], ..DemoConfig::default() }
    }

    pub fn is_full_walkthrough(&self) -> bool {
        self.sections == Section::ALL
    }

    /// The decision tree this run uses: `tree`, else the file at `tree_path`,
    /// else the built-in weather tree.
    pub fn tree_in_use(&self) -> Result<DecisionTree> {
        match (&self.tree, &self.tree_path) {
            (Some(tree), _) => Ok(tree.clone()),
            (None, Some(path)) => DecisionTree::load_json(path),
            (None, None) => Ok(go_outside_tree()),
        }
    }
}

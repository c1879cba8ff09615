use serde::{Serialize, Deserialize};
use std::io::Write;

use crate::error::Result;
use crate::report::format::{banner, BANNER_WIDTH};
use crate::tree::node::{Features, Trace};
use crate::tree::tree::{DecisionTree, TestCase};
use crate::tree::weather::{IS_RAINING, TEMPERATURE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub description: String,
    pub features: Features,
    pub trace: Trace,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeReport {
    pub name: String,
    pub depth: usize,
    pub leaves: usize,
    pub cases: Vec<CaseOutcome>,
}

impl TreeReport {
    pub fn build(tree: &DecisionTree, cases: &[TestCase]) -> Result<TreeReport> {
        let cases = cases
            .iter()
            .map(|case| {
                Ok(CaseOutcome {
                    description: case.description.clone(),
                    features: case.features.clone(),
                    trace: tree.trace(&case.features)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(TreeReport {
            name: tree.name.clone(),
            depth: tree.root.depth(),
            leaves: tree.root.leaf_count(),
            cases,
        })
    }

    pub fn render<W: Write>(&self, out: &mut W, show_trace: bool) -> Result<()> {
        write!(out, "{}", banner(&format!("Decision Tree: {}", self.name)))?;
        writeln!(out)?;
        writeln!(out, "Test Cases:")?;
        writeln!(out, "{}", "-".repeat(BANNER_WIDTH))?;
        for case in &self.cases {
            writeln!(out)?;
            writeln!(out, "{}:", case.description)?;
            writeln!(out, "  {}", describe_features(&case.features))?;
            if show_trace {
                for decision in &case.trace.decisions {
                    writeln!(
                        out,
                        "    {} {} {} ({}) -> {}",
                        decision.feature,
                        decision.comparison,
                        decision.threshold,
                        decision.value,
                        decision.outcome,
                    )?;
                }
            }
            writeln!(out, "  Decision: {}", case.trace.prediction)?;
        }
        Ok(())
    }
}

/// `Temperature: 75°F, Raining: 0` for weather samples, `name: value, ...` otherwise.
fn describe_features(features: &Features) -> String {
    match (features.get(TEMPERATURE), features.get(IS_RAINING)) {
        (Some(t), Some(r)) if features.len() == 2 => format!("Temperature: {t}°F, Raining: {r}"),
        _ => {
            let pairs: Vec<String> = features.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            pairs.join(", ")
        }
    }
}

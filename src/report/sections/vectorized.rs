use serde::{Serialize, Deserialize};
use std::io::Write;

use crate::error::Result;
use crate::report::format::banner;
use crate::vectorized::dataset::{Dataset, VectorizedResults};
use crate::vectorized::ops::format_array;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizedReport {
    pub feature_a: Vec<u8>,
    pub feature_b: Vec<u8>,
    pub results: VectorizedResults,
}

impl VectorizedReport {
    pub fn build(dataset: &Dataset) -> Result<VectorizedReport> {
        Ok(VectorizedReport {
            feature_a: dataset.feature_a()?,
            feature_b: dataset.feature_b()?,
            results: dataset.evaluate()?,
        })
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", banner("Vectorized Boolean Operations (ML-Style)"))?;

        writeln!(out)?;
        writeln!(out, "Dataset:")?;
        writeln!(out, "Feature A: {}", format_array(&self.feature_a))?;
        writeln!(out, "Feature B: {}", format_array(&self.feature_b))?;

        writeln!(out)?;
        writeln!(out, "Vectorized Results:")?;
        writeln!(out, "AND:       {}", format_array(&self.results.and))?;
        writeln!(out, "OR:        {}", format_array(&self.results.or))?;
        writeln!(out, "XOR:       {}", format_array(&self.results.xor))?;

        writeln!(out)?;
        writeln!(out, "This is how ML processes thousands of examples at once!")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_demo_dataset() {
        let mut out = Vec::new();
        VectorizedReport::build(&Dataset::demo().unwrap())
            .unwrap()
            .render(&mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let body = text.split_once("(ML-Style)\n").unwrap().1;
        let expected = "============================================================

Dataset:
Feature A: [0 0 1 1 0 1]
Feature B: [0 1 0 1 1 1]

Vectorized Results:
AND:       [0 0 0 1 0 1]
OR:        [0 1 1 1 1 1]
XOR:       [0 1 1 0 1 0]

This is how ML processes thousands of examples at once!
";
        assert_eq!(body, expected);
    }

    #[test]
    fn random_dataset_renders_its_size() {
        let report = VectorizedReport::build(&Dataset::random(10, 3)).unwrap();
        assert_eq!(report.feature_a.len(), 10);
        assert_eq!(report.results.and.len(), 10);
    }
}

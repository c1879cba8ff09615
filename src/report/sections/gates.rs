use serde::{Serialize, Deserialize};
use std::io::Write;

use crate::error::Result;
use crate::gates::gate::Gate;
use crate::gates::truth_table::TruthTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatesReport {
    pub truth_tables: Vec<TruthTable>,
}

impl GatesReport {
    pub fn build(gates: &[Gate]) -> GatesReport {
        GatesReport {
            truth_tables: gates.iter().map(|&gate| TruthTable::for_gate(gate)).collect(),
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        for table in &self.truth_tables {
            write!(out, "{table}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tables_in_requested_order() {
        let mut out = Vec::new();
        GatesReport::build(&[Gate::Xor, Gate::Not]).render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let xor = text.find("XOR Gate Truth Table").unwrap();
        let not = text.find("NOT Gate Truth Table").unwrap();
        assert!(xor < not);
        assert!(!text.contains("AND Gate"));
    }
}

use serde::{Serialize, Deserialize};
use std::fmt;

use crate::gates::gate::Gate;
use crate::report::format::{rule, TABLE_WIDTH};

/// One line of a truth table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthRow {
    pub inputs: Vec<u8>,
    pub output: u8,
}

/// Every input combination of a gate paired with its output.
///
/// Rows are ordered by counting up in binary with input A as the most
/// significant bit: `00, 01, 10, 11` for two inputs, `0, 1` for one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    pub gate: Gate,
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    pub fn for_gate(gate: Gate) -> TruthTable {
        let rows = input_combinations(gate.arity())
            .into_iter()
            .filter_map(|inputs| {
                gate.apply(&inputs).map(|output| TruthRow { inputs, output })
            })
            .collect();
        TruthTable { gate, rows }
    }

    /// Output column only, in row order.
    pub fn outputs(&self) -> Vec<u8> {
        self.rows.iter().map(|row| row.output).collect()
    }
}

/// All `n`-bit input vectors in ascending binary order.
pub fn input_combinations(n: usize) -> Vec<Vec<u8>> {
    (0..1usize << n)
        .map(|value| {
            (0..n)
                .rev()
                .map(|bit| ((value >> bit) & 1) as u8)
                .collect()
        })
        .collect()
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", rule(TABLE_WIDTH))?;
        writeln!(f, "{} Gate Truth Table", self.gate.name())?;
        writeln!(f, "{}", rule(TABLE_WIDTH))?;
        if self.gate.arity() == 2 {
            writeln!(f, "A | B | Output")?;
            writeln!(f, "--|---|-------")?;
        } else {
            writeln!(f, "A | Output")?;
            writeln!(f, "--|-------")?;
        }
        for row in &self.rows {
            for bit in &row.inputs {
                write!(f, "{bit} | ")?;
            }
            writeln!(f, "  {}", row.output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn combinations_count_up_in_binary() {
        assert_eq!(input_combinations(1), vec![vec![0], vec![1]]);
        assert_eq!(
            input_combinations(2),
            vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
        );
        assert_eq!(input_combinations(3).len(), 8);
        assert_eq!(input_combinations(3)[5], vec![1, 0, 1]);
    }

    #[test]
    fn outputs_per_gate() {
        assert_eq!(TruthTable::for_gate(Gate::And).outputs(), vec![0, 0, 0, 1]);
        assert_eq!(TruthTable::for_gate(Gate::Or).outputs(), vec![0, 1, 1, 1]);
        assert_eq!(TruthTable::for_gate(Gate::Not).outputs(), vec![1, 0]);
        assert_eq!(TruthTable::for_gate(Gate::Xor).outputs(), vec![0, 1, 1, 0]);
        assert_eq!(TruthTable::for_gate(Gate::Nand).outputs(), vec![1, 1, 1, 0]);
        assert_eq!(TruthTable::for_gate(Gate::Nor).outputs(), vec![1, 0, 0, 0]);
    }

    #[test]
    fn renders_two_input_table() {
        let text = TruthTable::for_gate(Gate::And).to_string();
        let expected = "\n\
========================================\n\
AND Gate Truth Table\n\
========================================\n\
A | B | Output\n\
--|---|-------\n\
0 | 0 |   0\n\
0 | 1 |   0\n\
1 | 0 |   0\n\
1 | 1 |   1\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn renders_single_input_table() {
        let text = TruthTable::for_gate(Gate::Not).to_string();
        assert!(text.contains("NOT Gate Truth Table\n"));
        assert!(text.ends_with("A | Output\n--|-------\n0 |   1\n1 |   0\n"));
    }
}

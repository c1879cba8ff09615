use serde::{Serialize, Deserialize};

use crate::gates::gate::{and, nand, not, or, xor};
use crate::gates::truth_table::input_combinations;

/// One row of the XOR-from-simpler-gates table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionRow {
    pub a: u8,
    pub b: u8,
    pub or: u8,
    pub and: u8,
    pub nand: u8,
    pub xor: u8,
}

impl DecompositionRow {
    pub fn new(a: u8, b: u8) -> DecompositionRow {
        let and_ab = and(a, b);
        DecompositionRow {
            a,
            b,
            or: or(a, b),
            and: and_ab,
            nand: not(and_ab),
            xor: xor(a, b),
        }
    }

    /// True when `(A OR B) AND NOT(A AND B)` agrees with the XOR column.
    pub fn is_consistent(&self) -> bool {
        and(self.or, self.nand) == self.xor && self.nand == nand(self.a, self.b)
    }
}

/// `(a, b, a XOR b)` for every input pair.
pub fn xor_rows() -> Vec<(u8, u8, u8)> {
    input_combinations(2)
        .into_iter()
        .map(|pair| (pair[0], pair[1], xor(pair[0], pair[1])))
        .collect()
}

/// True when every row of the breakdown reproduces its XOR column.
pub fn breakdown_consistent(rows: &[DecompositionRow]) -> bool {
    rows.iter().all(DecompositionRow::is_consistent)
}

pub fn decomposition_rows() -> Vec<DecompositionRow> {
    xor_rows()
        .into_iter()
        .map(|(a, b, _)| DecompositionRow::new(a, b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_rows_in_order() {
        assert_eq!(xor_rows(), vec![(0, 0, 0), (0, 1, 1), (1, 0, 1), (1, 1, 0)]);
    }

    #[test]
    fn every_decomposition_row_is_consistent() {
        let rows = decomposition_rows();
        assert_eq!(rows.len(), 4);
        assert!(breakdown_consistent(&rows));
        assert_eq!(rows[3], DecompositionRow { a: 1, b: 1, or: 1, and: 1, nand: 0, xor: 0 });
    }

    #[test]
    fn tampered_row_is_inconsistent() {
        let mut row = DecompositionRow::new(0, 1);
        row.xor = 0;
        assert!(!row.is_consistent());
        let mut rows = decomposition_rows();
        rows[1] = row;
        assert!(!breakdown_consistent(&rows));
    }
}

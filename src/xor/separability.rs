use serde::{Serialize, Deserialize};
use std::ops::RangeInclusive;

use crate::error::{LogicError, Result};
use crate::gates::gate::Gate;
use crate::gates::truth_table::TruthTable;
use crate::xor::activation::Activation;
use crate::xor::layer::Layer;

/// Largest weight or bias magnitude `find_linear_unit` will search.
pub const MAX_GRID: i32 = 16;

/// A single threshold unit: fires when `weights · x + bias > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearUnit {
    pub weights: Vec<i32>,
    pub bias: i32,
}

impl LinearUnit {
    pub fn fires(&self, inputs: &[u8]) -> u8 {
        let sum: i64 = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(&w, &x)| i64::from(w) * i64::from(x))
            .sum();
        (sum + i64::from(self.bias) > 0) as u8
    }

    pub fn to_layer(&self) -> Result<Layer> {
        let weights = self.weights.iter().map(|&w| w as f64).collect();
        Layer::from_units(&[(weights, self.bias as f64)], Activation::Step)
    }
}

/// Searches integer weights and bias in `grid` for one unit reproducing `gate`.
///
/// Exhaustive and deterministic: candidates are visited in ascending order of
/// bias then weights, and the first match is returned. `None` means no
/// straight line separates the gate's 0 rows from its 1 rows within the grid,
/// which is always the case for XOR. Bounds beyond `MAX_GRID` are rejected.
pub fn find_linear_unit(gate: Gate, grid: RangeInclusive<i32>) -> Result<Option<LinearUnit>> {
    for &bound in [grid.start(), grid.end()] {
        if bound.unsigned_abs() > MAX_GRID.unsigned_abs() {
            return Err(LogicError::GridTooLarge(i64::from(bound), MAX_GRID));
        }
    }
    let table = TruthTable::for_gate(gate);
    let values: Vec<i32> = grid.collect();
    let arity = gate.arity();
    if values.is_empty() {
        return Ok(None);
    }

    let candidates = values.len().pow(arity as u32);
    for &bias in &values {
        for index in 0..candidates {
            let mut rest = index;
            let weights: Vec<i32> = (0..arity)
                .map(|_| {
                    let w = values[rest % values.len()];
                    rest /= values.len();
                    w
                })
                .collect();
            let unit = LinearUnit { weights, bias };
            if table.rows.iter().all(|row| unit.fires(&row.inputs) == row.output) {
                log::debug!("{gate} realised by {unit:?}");
                return Ok(Some(unit));
            }
        }
    }
    log::debug!("{gate} has no single-unit realisation");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearly_separable_gates_have_a_unit() {
        for gate in [Gate::And, Gate::Or, Gate::Not, Gate::Nand, Gate::Nor] {
            let unit = find_linear_unit(gate, -2..=2).unwrap().unwrap_or_else(|| panic!("{gate}"));
            let table = TruthTable::for_gate(gate);
            for row in &table.rows {
                assert_eq!(unit.fires(&row.inputs), row.output);
            }
        }
    }

    #[test]
    fn xor_has_none() {
        assert_eq!(find_linear_unit(Gate::Xor, -5..=5).unwrap(), None);
    }

    #[test]
    fn empty_grid_finds_nothing() {
        #[allow(clippy::reversed_empty_ranges)]
        let grid = 1..=0;
        assert_eq!(find_linear_unit(Gate::And, grid).unwrap(), None);
    }

    #[test]
    fn unit_converts_to_equivalent_layer() {
        let unit = find_linear_unit(Gate::And, -2..=2).unwrap().unwrap();
        let layer = unit.to_layer().unwrap();
        assert_eq!(layer.feed_from(&[1.0, 1.0]).unwrap(), vec![1.0]);
        assert_eq!(layer.feed_from(&[1.0, 0.0]).unwrap(), vec![0.0]);
    }

    #[test]
    fn oversized_grids_are_rejected() {
        assert!(find_linear_unit(Gate::Or, -MAX_GRID..=MAX_GRID).unwrap().is_some());
        assert!(matches!(
            find_linear_unit(Gate::Xor, -1_500_000_000..=1_500_000_000),
            Err(LogicError::GridTooLarge(-1_500_000_000, MAX_GRID))
        ));
        assert!(matches!(
            find_linear_unit(Gate::And, 0..=MAX_GRID + 1),
            Err(LogicError::GridTooLarge(17, MAX_GRID))
        ));
    }

    #[test]
    fn extreme_weights_do_not_overflow() {
        let unit = LinearUnit { weights: vec![i32::MAX, i32::MAX], bias: i32::MAX };
        assert_eq!(unit.fires(&[1, 1]), 1);
        let unit = LinearUnit { weights: vec![i32::MIN, i32::MIN], bias: i32::MIN };
        assert_eq!(unit.fires(&[1, 1]), 0);
    }
}

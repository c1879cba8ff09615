use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::gates::gate::Gate;

/// One named gate evaluation, e.g. `AND(1, 1) = 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualComputation {
    pub gate: Gate,
    pub inputs: Vec<u8>,
    pub output: u8,
}

impl IndividualComputation {
    pub fn new(gate: Gate, inputs: Vec<u8>) -> Result<IndividualComputation> {
        let output = gate.eval(&inputs)?;
        Ok(IndividualComputation { gate, inputs, output })
    }

    /// `AND(1, 1) = 1`
    pub fn describe(&self) -> String {
        let args: Vec<String> = self.inputs.iter().map(u8::to_string).collect();
        format!("{}({}) = {}", self.gate, args.join(", "), self.output)
    }
}

/// The sample computations shown after the truth tables.
pub fn individual_computations() -> Result<Vec<IndividualComputation>> {
    [
        (Gate::And, vec![1, 1]),
        (Gate::Or, vec![0, 1]),
        (Gate::Not, vec![1]),
        (Gate::Xor, vec![1, 1]),
        (Gate::Nand, vec![1, 1]),
        (Gate::Nor, vec![0, 0]),
    ]
    .into_iter()
    .map(|(gate, inputs)| IndividualComputation::new(gate, inputs))
    .collect()
}

/// A numbered step of a circuit built from separate gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitStep {
    pub step: usize,
    pub computation: IndividualComputation,
}

/// Chains NOT after AND and checks the result against a NAND gate.
///
/// Returns the steps and the single-gate NAND result for comparison.
pub fn nand_walkthrough(a: u8, b: u8) -> Result<(Vec<CircuitStep>, IndividualComputation)> {
    let and = IndividualComputation::new(Gate::And, vec![a, b])?;
    let not = IndividualComputation::new(Gate::Not, vec![and.output])?;
    let nand = IndividualComputation::new(Gate::Nand, vec![a, b])?;
    log::debug!("NOT(AND({a}, {b})) = {} vs NAND = {}", not.output, nand.output);

    let steps = vec![
        CircuitStep { step: 1, computation: and },
        CircuitStep { step: 2, computation: not },
    ];
    Ok((steps, nand))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_computations_describe_themselves() {
        let lines: Vec<String> = individual_computations()
            .unwrap()
            .iter()
            .map(IndividualComputation::describe)
            .collect();
        assert_eq!(
            lines,
            vec![
                "AND(1, 1) = 1",
                "OR(0, 1) = 1",
                "NOT(1) = 0",
                "XOR(1, 1) = 0",
                "NAND(1, 1) = 0",
                "NOR(0, 0) = 1",
            ]
        );
    }

    #[test]
    fn separate_gates_match_nand() {
        for a in 0..=1 {
            for b in 0..=1 {
                let (steps, nand) = nand_walkthrough(a, b).unwrap();
                assert_eq!(steps.len(), 2);
                assert_eq!(steps[1].computation.output, nand.output);
            }
        }
    }

    #[test]
    fn walkthrough_rejects_non_bits() {
        assert!(nand_walkthrough(2, 1).is_err());
    }
}

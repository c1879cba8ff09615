use serde::{Serialize, Deserialize};
use std::io::Write;

use crate::circuit::walkthrough::{
    individual_computations, nand_walkthrough, CircuitStep, IndividualComputation,
};
use crate::error::Result;

/// Sample gate evaluations plus NAND rebuilt from separate AND and NOT gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitReport {
    pub computations: Vec<IndividualComputation>,
    pub steps: Vec<CircuitStep>,
    pub equivalent: IndividualComputation,
}

impl CircuitReport {
    pub fn build() -> Result<CircuitReport> {
        let (steps, equivalent) = nand_walkthrough(1, 1)?;
        Ok(CircuitReport {
            computations: individual_computations()?,
            steps,
            equivalent,
        })
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "=== Individual Gate Computations ===")?;
        for computation in &self.computations {
            writeln!(out, "{}", computation.describe())?;
        }

        writeln!(out)?;
        writeln!(out, "=== Combined Circuit Example ===")?;
        let inputs: Vec<String> = self.equivalent.inputs.iter().map(u8::to_string).collect();
        writeln!(out, "Computing: NOT(AND({})) using separate gates", inputs.join(", "))?;
        for step in &self.steps {
            writeln!(out, "Step {} - {}", step.step, step.computation.describe())?;
        }
        writeln!(out, "This is equivalent to {}", self.equivalent.describe())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_walkthrough() {
        let mut out = Vec::new();
        CircuitReport::build().unwrap().render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "
=== Individual Gate Computations ===
AND(1, 1) = 1
OR(0, 1) = 1
NOT(1) = 0
XOR(1, 1) = 0
NAND(1, 1) = 0
NOR(0, 0) = 1

=== Combined Circuit Example ===
Computing: NOT(AND(1, 1)) using separate gates
Step 1 - AND(1, 1) = 1
Step 2 - NOT(1) = 0
This is equivalent to NAND(1, 1) = 0
";
        assert_eq!(text, expected);
    }
}

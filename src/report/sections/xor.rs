use serde::{Serialize, Deserialize};
use std::io::Write;

use crate::circuit::expr::{equivalent, xor_or_and_nand, xor_sum_of_products, Expr};
use crate::error::{LogicError, Result};
use crate::gates::gate::Gate;
use crate::report::format::banner;
use crate::xor::network::Network;
use crate::xor::problem::{breakdown_consistent, decomposition_rows, xor_rows, DecompositionRow};
use crate::xor::separability::{find_linear_unit, LinearUnit, MAX_GRID};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparabilityResult {
    pub gate: Gate,
    pub unit: Option<LinearUnit>,
}

/// Output of the hand-wired network for one input pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRow {
    pub a: u8,
    pub b: u8,
    pub hidden: Vec<u8>,
    pub output: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XorReport {
    pub truth_table: Vec<(u8, u8, u8)>,
    pub decompositions: Vec<String>,
    pub decompositions_verified: bool,
    pub breakdown: Vec<DecompositionRow>,
    pub breakdown_verified: bool,
    pub grid: i32,
    pub single_unit: Vec<SeparabilityResult>,
    pub network: Vec<NetworkRow>,
}

impl XorReport {
    /// `grid` bounds the integer weights tried for single-unit gates (`-grid..=grid`).
    pub fn build(grid: i32) -> Result<XorReport> {
        let low = grid
            .checked_neg()
            .ok_or(LogicError::GridTooLarge(i64::from(grid), MAX_GRID))?;
        let xor_gate = Expr::gate(Gate::Xor, vec![Expr::input(0), Expr::input(1)]);
        let forms = [xor_sum_of_products(), xor_or_and_nand()];
        let mut verified = true;
        for form in &forms {
            verified &= equivalent(form, &xor_gate, 2)?;
        }

        let breakdown = decomposition_rows();
        let breakdown_verified = breakdown_consistent(&breakdown);
        if !breakdown_verified {
            log::warn!("XOR breakdown table disagrees with XOR");
        }

        let single_unit = [Gate::And, Gate::Or, Gate::Nand, Gate::Nor, Gate::Xor]
            .into_iter()
            .map(|gate| Ok(SeparabilityResult { gate, unit: find_linear_unit(gate, low..=grid)? }))
            .collect::<Result<Vec<_>>>()?;

        let net = Network::xor()?;
        let network = xor_rows()
            .into_iter()
            .map(|(a, b, _)| {
                Ok(NetworkRow {
                    a,
                    b,
                    hidden: net.hidden_bits(a, b)?,
                    output: net.classify(a, b)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(XorReport {
            truth_table: xor_rows(),
            decompositions: forms.iter().map(Expr::to_string).collect(),
            decompositions_verified: verified,
            breakdown,
            breakdown_verified,
            grid,
            single_unit,
            network,
        })
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", banner("The XOR Problem: Why Neural Networks Need Multiple Layers"))?;

        writeln!(out)?;
        writeln!(out, "XOR Truth Table:")?;
        writeln!(out, "A | B | XOR")?;
        writeln!(out, "--|---|----")?;
        for (a, b, x) in &self.truth_table {
            writeln!(out, "{a} | {b} |  {x}")?;
        }

        writeln!(out)?;
        writeln!(out, "Why XOR is special for ML:")?;
        writeln!(out, "- Cannot be solved with a single linear decision boundary")?;
        writeln!(out, "- Requires at least 2 layers (hidden layer + output layer)")?;
        writeln!(out, "- This is why 'deep' learning exists!")?;

        writeln!(out)?;
        writeln!(out, "Solution: Combine multiple Boolean operations")?;
        for (i, form) in self.decompositions.iter().enumerate() {
            let lead = if i == 0 { "XOR(A, B) =" } else { "          =" };
            writeln!(out, "{lead} {form}")?;
        }
        if self.decompositions_verified {
            writeln!(out, "(checked against XOR for every input pair)")?;
        }

        writeln!(out)?;
        writeln!(out, "Breaking down XOR into simpler gates:")?;
        writeln!(out, "A | B | A OR B | A AND B | NOT(A AND B) | XOR")?;
        writeln!(out, "--|---|--------|---------|--------------|----")?;
        for row in &self.breakdown {
            writeln!(
                out,
                "{} | {} |   {}    |    {}    |      {}       |  {}",
                row.a, row.b, row.or, row.and, row.nand, row.xor
            )?;
        }
        if self.breakdown_verified {
            writeln!(out, "(every row: (A OR B) AND NOT(A AND B) equals XOR)")?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "Single threshold unit, integer weights and bias in [{}, {}]:",
            -self.grid, self.grid
        )?;
        for result in &self.single_unit {
            match &result.unit {
                Some(unit) => writeln!(
                    out,
                    "  {:<4} fires when {:?} . x + {} > 0",
                    result.gate.name(),
                    unit.weights,
                    unit.bias
                )?,
                None => writeln!(out, "  {:<4} no single unit works", result.gate.name())?,
            }
        }

        writeln!(out)?;
        writeln!(out, "Two-layer threshold network (hidden: OR, NAND; output: AND):")?;
        writeln!(out, "A | B | OR | NAND | Output")?;
        writeln!(out, "--|---|----|------|-------")?;
        for row in &self.network {
            let h = |i: usize| row.hidden.get(i).copied().unwrap_or(0);
            writeln!(out, "{} | {} |  {} |   {}  |   {}", row.a, row.b, h(0), h(1), row.output)?;
        }
        Ok(())
    }
}

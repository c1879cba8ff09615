use serde::{Serialize, Deserialize};
use std::fmt;

use crate::error::{LogicError, Result};
use crate::gates::gate::{check_bit, Gate};
use crate::gates::truth_table::input_combinations;

/// A combinational circuit written as an expression tree of gates.
///
/// Inputs are referenced by position and displayed as letters (`A`, `B`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expr {
    Input { index: usize },
    Const { value: u8 },
    Apply { gate: Gate, args: Vec<Expr> },
}

impl Expr {
    pub fn input(index: usize) -> Expr {
        Expr::Input { index }
    }

    pub fn constant(value: u8) -> Expr {
        Expr::Const { value }
    }

    pub fn gate(gate: Gate, args: Vec<Expr>) -> Expr {
        Expr::Apply { gate, args }
    }

    pub fn not(inner: Expr) -> Expr {
        Expr::gate(Gate::Not, vec![inner])
    }

    pub fn and(lhs: Expr, rhs: Expr) -> Expr {
        Expr::gate(Gate::And, vec![lhs, rhs])
    }

    pub fn or(lhs: Expr, rhs: Expr) -> Expr {
        Expr::gate(Gate::Or, vec![lhs, rhs])
    }

    /// Evaluates the circuit for one input assignment.
    pub fn eval(&self, inputs: &[u8]) -> Result<u8> {
        match self {
            Expr::Input { index } => {
                let bit = inputs
                    .get(*index)
                    .copied()
                    .ok_or(LogicError::UnboundInput(*index, inputs.len()))?;
                check_bit(bit)
            }
            Expr::Const { value } => check_bit(*value),
            Expr::Apply { gate, args } => {
                let values = args
                    .iter()
                    .map(|arg| arg.eval(inputs))
                    .collect::<Result<Vec<u8>>>()?;
                gate.eval(&values)
            }
        }
    }

    /// Number of inputs the circuit reads (highest referenced index + 1).
    pub fn input_count(&self) -> usize {
        match self {
            Expr::Input { index } => index + 1,
            Expr::Const { .. } => 0,
            Expr::Apply { args, .. } => args.iter().map(Expr::input_count).max().unwrap_or(0),
        }
    }

    /// Outputs over every input assignment, in truth table order.
    pub fn outputs(&self) -> Result<Vec<u8>> {
        input_combinations(self.input_count())
            .iter()
            .map(|inputs| self.eval(inputs))
            .collect()
    }

    fn is_binary(&self) -> bool {
        matches!(self, Expr::Apply { args, .. } if args.len() > 1)
    }
}

/// Name of the input at `index`: A..Z, then `X26`, `X27`, ...
fn input_name(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        format!("X{index}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Input { index } => f.write_str(&input_name(*index)),
            Expr::Const { value } => write!(f, "{value}"),
            Expr::Apply { gate, args } => match args.as_slice() {
                [inner] if inner.is_binary() => write!(f, "{gate}({inner})"),
                [inner] => write!(f, "{gate}-{inner}"),
                _ => {
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, " {gate} ")?;
                        }
                        if arg.is_binary() {
                            write!(f, "({arg})")?;
                        } else {
                            write!(f, "{arg}")?;
                        }
                    }
                    Ok(())
                }
            },
        }
    }
}

/// True when both circuits agree on every assignment of `inputs` bits.
pub fn equivalent(lhs: &Expr, rhs: &Expr, inputs: usize) -> Result<bool> {
    for assignment in input_combinations(inputs) {
        if lhs.eval(&assignment)? != rhs.eval(&assignment)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// `(A AND NOT-B) OR (NOT-A AND B)`
pub fn xor_sum_of_products() -> Expr {
    Expr::or(
        Expr::and(Expr::input(0), Expr::not(Expr::input(1))),
        Expr::and(Expr::not(Expr::input(0)), Expr::input(1)),
    )
}

/// `(A OR B) AND NOT(A AND B)`
pub fn xor_or_and_nand() -> Expr {
    Expr::and(
        Expr::or(Expr::input(0), Expr::input(1)),
        Expr::not(Expr::and(Expr::input(0), Expr::input(1))),
    )
}

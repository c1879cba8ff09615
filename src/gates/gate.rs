use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LogicError, Result};

/// Logic gates over 0/1 bits.
///
/// `Nand` and `Nor` are not primitive: they are evaluated as `Not` applied to
/// `And` / `Or`, the same way a circuit built from separate chips would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    And,
    Or,
    Not,
    Xor,
    Nand,
    Nor,
}

impl Gate {
    /// Every gate, in the order they are presented.
    pub const ALL: [Gate; 6] = [Gate::And, Gate::Or, Gate::Not, Gate::Xor, Gate::Nand, Gate::Nor];

    pub fn name(&self) -> &'static str {
        match self {
            Gate::And  => "AND",
            Gate::Or   => "OR",
            Gate::Not  => "NOT",
            Gate::Xor  => "XOR",
            Gate::Nand => "NAND",
            Gate::Nor  => "NOR",
        }
    }

    /// Number of inputs the gate consumes.
    pub fn arity(&self) -> usize {
        match self {
            Gate::Not => 1,
            _ => 2,
        }
    }

    /// Evaluates the gate, checking both the input count and that every input is a bit.
    pub fn eval(&self, inputs: &[u8]) -> Result<u8> {
        if inputs.len() != self.arity() {
            return Err(LogicError::ArityMismatch(
                self.name().to_owned(),
                self.arity(),
                inputs.len(),
            ));
        }
        for &bit in inputs {
            check_bit(bit)?;
        }
        self.apply(inputs).ok_or_else(|| {
            LogicError::ArityMismatch(self.name().to_owned(), self.arity(), inputs.len())
        })
    }

    /// Unchecked evaluation; `None` when the input count does not fit the gate.
    pub(crate) fn apply(&self, inputs: &[u8]) -> Option<u8> {
        match (self, inputs) {
            (Gate::Not, [a])     => Some(not(*a)),
            (Gate::And, [a, b])  => Some(and(*a, *b)),
            (Gate::Or, [a, b])   => Some(or(*a, *b)),
            (Gate::Xor, [a, b])  => Some(xor(*a, *b)),
            (Gate::Nand, [a, b]) => Some(nand(*a, *b)),
            (Gate::Nor, [a, b])  => Some(nor(*a, *b)),
            _ => None,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gate {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Gate> {
        let wanted = s.trim();
        Gate::ALL
            .iter()
            .copied()
            .find(|gate| gate.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LogicError::UnknownGate(s.to_owned()))
    }
}

/// Returns the bit unchanged if it is 0 or 1.
pub fn check_bit(bit: u8) -> Result<u8> {
    match bit {
        0 | 1 => Ok(bit),
        other => Err(LogicError::InvalidBit(other as i64)),
    }
}

// Truthiness follows the usual convention: anything non-zero is 1.

/// 1 only when both inputs are 1.
pub fn and(a: u8, b: u8) -> u8 {
    (a != 0 && b != 0) as u8
}

/// 1 when at least one input is 1.
pub fn or(a: u8, b: u8) -> u8 {
    (a != 0 || b != 0) as u8
}

/// Inverse of the input.
pub fn not(a: u8) -> u8 {
    (a == 0) as u8
}

/// 1 when the inputs differ.
pub fn xor(a: u8, b: u8) -> u8 {
    ((a != 0) != (b != 0)) as u8
}

pub fn nand(a: u8, b: u8) -> u8 {
    not(and(a, b))
}

pub fn nor(a: u8, b: u8) -> u8 {
    not(or(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_input_gates_match_their_definitions() {
        for a in 0..=1u8 {
            for b in 0..=1u8 {
                assert_eq!(and(a, b), a & b);
                assert_eq!(or(a, b), a | b);
                assert_eq!(xor(a, b), a ^ b);
                assert_eq!(nand(a, b), 1 - (a & b));
                assert_eq!(nor(a, b), 1 - (a | b));
            }
        }
    }

    #[test]
    fn not_inverts() {
        assert_eq!(not(0), 1);
        assert_eq!(not(1), 0);
    }

    #[test]
    fn nonzero_counts_as_one() {
        assert_eq!(and(7, 1), 1);
        assert_eq!(xor(2, 1), 0);
        assert_eq!(not(5), 0);
    }

    #[test]
    fn eval_rejects_wrong_arity() {
        let err = Gate::Not.eval(&[1, 0]).unwrap_err();
        assert!(matches!(err, LogicError::ArityMismatch(ref name, 1, 2) if name == "NOT"));
        assert!(Gate::And.eval(&[1]).is_err());
    }

    #[test]
    fn eval_rejects_non_bits() {
        assert!(matches!(Gate::Or.eval(&[0, 2]), Err(LogicError::InvalidBit(2))));
    }

    #[test]
    fn eval_dispatches() {
        assert_eq!(Gate::And.eval(&[1, 1]).unwrap(), 1);
        assert_eq!(Gate::Or.eval(&[0, 1]).unwrap(), 1);
        assert_eq!(Gate::Not.eval(&[1]).unwrap(), 0);
        assert_eq!(Gate::Xor.eval(&[1, 1]).unwrap(), 0);
        assert_eq!(Gate::Nand.eval(&[1, 1]).unwrap(), 0);
        assert_eq!(Gate::Nor.eval(&[0, 0]).unwrap(), 1);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("nand".parse::<Gate>().unwrap(), Gate::Nand);
        assert_eq!(" Xor ".parse::<Gate>().unwrap(), Gate::Xor);
        assert!(matches!("xnor".parse::<Gate>(), Err(LogicError::UnknownGate(_))));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gate::Nor).unwrap(), "\"nor\"");
        let gate: Gate = serde_json::from_str("\"and\"").unwrap();
        assert_eq!(gate, Gate::And);
    }
}

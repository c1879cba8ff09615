use crate::error::{LogicError, Result};
use crate::gates::gate::Gate;

/// Applies a two-input gate element-wise over two bit vectors.
pub fn apply(gate: Gate, a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(LogicError::LengthMismatch(a.len(), b.len()));
    }
    a.iter()
        .zip(b)
        .map(|(&x, &y)| gate.eval(&[x, y]))
        .collect()
}

/// Applies a one-input gate element-wise.
pub fn apply_unary(gate: Gate, a: &[u8]) -> Result<Vec<u8>> {
    a.iter().map(|&x| gate.eval(&[x])).collect()
}

/// Renders bits the way array printouts usually look: `[0 1 1 0]`.
pub fn format_array(bits: &[u8]) -> String {
    let inner: Vec<String> = bits.iter().map(u8::to_string).collect();
    format!("[{}]", inner.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [u8; 6] = [0, 0, 1, 1, 0, 1];
    const B: [u8; 6] = [0, 1, 0, 1, 1, 1];

    #[test]
    fn elementwise_gates() {
        assert_eq!(apply(Gate::And, &A, &B).unwrap(), vec![0, 0, 0, 1, 0, 1]);
        assert_eq!(apply(Gate::Or, &A, &B).unwrap(), vec![0, 1, 1, 1, 1, 1]);
        assert_eq!(apply(Gate::Xor, &A, &B).unwrap(), vec![0, 1, 1, 0, 1, 0]);
        assert_eq!(apply_unary(Gate::Not, &A).unwrap(), vec![1, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn length_mismatch() {
        assert!(matches!(apply(Gate::And, &A, &B[..3]), Err(LogicError::LengthMismatch(6, 3))));
    }

    #[test]
    fn wrong_arity_is_reported() {
        assert!(matches!(apply(Gate::Not, &A, &B), Err(LogicError::ArityMismatch(..))));
        assert!(matches!(apply_unary(Gate::And, &A), Err(LogicError::ArityMismatch(..))));
    }

    #[test]
    fn empty_vectors_are_fine() {
        assert_eq!(apply(Gate::Xor, &[], &[]).unwrap(), Vec::<u8>::new());
        assert_eq!(format_array(&[]), "[]");
    }

    #[test]
    fn formats_like_an_array() {
        assert_eq!(format_array(&A), "[0 0 1 1 0 1]");
    }
}

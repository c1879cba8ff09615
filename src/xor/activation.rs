use serde::{Serialize, Deserialize};
use std::f64::consts::E;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Activation {
    /// Heaviside step: fires (1.0) only for strictly positive input.
    /// This is what turns a weighted sum into a logic gate.
    Step,
    /// Smooth counterpart of `Step`; large weights push it towards 0/1.
    Sigmoid,
}

impl Activation {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::Step => if x > 0.0 { 1.0 } else { 0.0 },
            Activation::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_strict() {
        assert_eq!(Activation::Step.function(0.0), 0.0);
        assert_eq!(Activation::Step.function(1e-9), 1.0);
        assert_eq!(Activation::Step.function(-3.0), 0.0);
    }

    #[test]
    fn sigmoid_is_centred() {
        assert!((Activation::Sigmoid.function(0.0) - 0.5).abs() < 1e-12);
        assert!(Activation::Sigmoid.function(10.0) > 0.99);
        assert!(Activation::Sigmoid.function(-10.0) < 0.01);
    }
}

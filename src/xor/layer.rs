use serde::{Serialize, Deserialize};

use crate::error::{LogicError, Result};
use crate::math::matrix::Matrix;
use crate::xor::activation::Activation;

/// A dense layer with fixed, hand-picked weights.
///
/// `weights` has shape (input_size, size): column `j` holds the incoming
/// weights of unit `j`. `biases` has shape (1, size).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub size: usize,
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: Activation,
}

impl Layer {
    /// Builds a layer from per-unit weight rows (`units[j]` = weights of unit `j`).
    pub fn from_units(units: &[(Vec<f64>, f64)], activation: Activation) -> Result<Layer> {
        let rows: Vec<Vec<f64>> = units.iter().map(|(w, _)| w.clone()).collect();
        let weights = Matrix::from_data(rows)?.transpose();
        let biases = Matrix::row(&units.iter().map(|(_, b)| *b).collect::<Vec<_>>());
        Ok(Layer {
            size: units.len(),
            weights,
            biases,
            activator: activation,
        })
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    /// a = activation(x · W + b)
    pub fn feed_from(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_size() {
            return Err(LogicError::LengthMismatch(self.input_size(), input.len()));
        }
        let z = Matrix::row(input).matmul(&self.weights)?.add(&self.biases)?;
        let a = z.map(|x| self.activator.function(x));
        Ok(a.data.into_iter().next().unwrap_or_default())
    }

    /// Same layer with every weight and bias multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Layer {
        Layer {
            size: self.size,
            weights: self.weights.map(|x| x * factor),
            biases: self.biases.map(|x| x * factor),
            activator: self.activator,
        }
    }
}

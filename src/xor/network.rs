use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::gates::gate::check_bit;
use crate::xor::activation::Activation;
use crate::xor::layer::Layer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    pub fn new(layers: Vec<Layer>) -> Network {
        Network { layers }
    }

    /// The 2-2-1 threshold network for XOR.
    ///
    /// Hidden unit 0 is an OR gate, hidden unit 1 a NAND gate, and the output
    /// unit ANDs them: `(A OR B) AND NOT(A AND B)`.
    pub fn xor() -> Result<Network> {
        Network::xor_with(Activation::Step)
    }

    /// The XOR network with sigmoid units, weights scaled by `sharpness`.
    pub fn xor_smooth(sharpness: f64) -> Result<Network> {
        let net = Network::xor_with(Activation::Sigmoid)?;
        Ok(Network::new(net.layers.iter().map(|l| l.scaled(sharpness)).collect()))
    }

    fn xor_with(activation: Activation) -> Result<Network> {
        let hidden = Layer::from_units(
            &[
                (vec![1.0, 1.0], -0.5),   // OR
                (vec![-1.0, -1.0], 1.5),  // NAND
            ],
            activation,
        )?;
        let output = Layer::from_units(&[(vec![1.0, 1.0], -1.5)], activation)?;
        Ok(Network::new(vec![hidden, output]))
    }

    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.feed_from(&current)?;
        }
        Ok(current)
    }

    /// Runs two bits through the network and thresholds the first output at 0.5.
    pub fn classify(&self, a: u8, b: u8) -> Result<u8> {
        let out = self.forward(&[check_bit(a)? as f64, check_bit(b)? as f64])?;
        Ok(out.first().map_or(0, |&y| (y >= 0.5) as u8))
    }

    /// Hidden-layer activations for one input, rounded to bits.
    pub fn hidden_bits(&self, a: u8, b: u8) -> Result<Vec<u8>> {
        match self.layers.first() {
            Some(layer) => Ok(layer
                .feed_from(&[check_bit(a)? as f64, check_bit(b)? as f64])?
                .into_iter()
                .map(|y| (y >= 0.5) as u8)
                .collect()),
            None => Ok(vec![]),
        }
    }
}

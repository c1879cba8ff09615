use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::gates::gate::Gate;
use crate::math::matrix::BitMatrix;
use crate::vectorized::ops::apply;

/// A tiny two-feature dataset: one row per sample, columns A and B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub samples: BitMatrix,
}

/// Every element-wise result computed over a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorizedResults {
    pub and: Vec<u8>,
    pub or: Vec<u8>,
    pub xor: Vec<u8>,
}

impl Dataset {
    pub fn from_features(a: Vec<u8>, b: Vec<u8>) -> Result<Dataset> {
        Ok(Dataset { samples: BitMatrix::from_columns(&[a, b])? })
    }

    /// The six-sample dataset used in the walkthrough.
    pub fn demo() -> Result<Dataset> {
        Dataset::from_features(vec![0, 0, 1, 1, 0, 1], vec![0, 1, 0, 1, 1, 1])
    }

    /// `rows` random samples, reproducible for a given `seed`.
    pub fn random(rows: usize, seed: u64) -> Dataset {
        let mut rng = StdRng::seed_from_u64(seed);
        Dataset { samples: BitMatrix::random(rows, 2, &mut rng) }
    }

    pub fn len(&self) -> usize {
        self.samples.rows
    }

    pub fn is_empty(&self) -> bool {
        self.samples.rows == 0
    }

    pub fn feature_a(&self) -> Result<Vec<u8>> {
        self.samples.column(0)
    }

    pub fn feature_b(&self) -> Result<Vec<u8>> {
        self.samples.column(1)
    }

    /// Runs AND, OR and XOR over the whole dataset at once.
    pub fn evaluate(&self) -> Result<VectorizedResults> {
        let (a, b) = (self.feature_a()?, self.feature_b()?);
        Ok(VectorizedResults {
            and: apply(Gate::And, &a, &b)?,
            or: apply(Gate::Or, &a, &b)?,
            xor: apply(Gate::Xor, &a, &b)?,
        })
    }
}

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{LogicError, Result};
use crate::gates::gate::check_bit;

/// Row-major dense matrix.
///
/// `Matrix<f64>` carries perceptron weights; `Matrix<u8>` (see `BitMatrix`)
/// carries datasets of 0/1 samples, one row per sample and one column per
/// feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T = f64> {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<T>>,
}

pub type BitMatrix = Matrix<u8>;

impl<T: Copy + Default> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Matrix<T> {
        Matrix {
            rows,
            cols,
            data: vec![vec![T::default(); cols]; rows],
        }
    }

    /// Builds a matrix from rows, rejecting ragged input.
    pub fn from_data(data: Vec<Vec<T>>) -> Result<Matrix<T>> {
        let cols = data.first().map_or(0, Vec::len);
        if let Some((i, row)) = data.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(LogicError::RaggedRow(i, row.len(), cols));
        }
        Ok(Matrix { rows: data.len(), cols, data })
    }

    pub fn column(&self, col: usize) -> Result<Vec<T>> {
        if col >= self.cols {
            return Err(LogicError::ColumnOutOfRange(col, self.cols));
        }
        Ok(self.data.iter().map(|row| row[col]).collect())
    }

    pub fn map<U, F>(&self, functor: F) -> Matrix<U>
    where
        F: Fn(T) -> U,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    pub fn transpose(&self) -> Matrix<T> {
        let mut res = Matrix::zeros(self.cols, self.rows);
        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }
        res
    }
}

impl Matrix<f64> {
    /// Single-row matrix, the shape a layer's input takes.
    pub fn row(values: &[f64]) -> Matrix<f64> {
        Matrix { rows: 1, cols: values.len(), data: vec![values.to_vec()] }
    }

    pub fn add(&self, rhs: &Matrix<f64>) -> Result<Matrix<f64>> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(LogicError::ShapeMismatch(self.rows, self.cols, rhs.rows, rhs.cols));
        }
        let mut res = Matrix::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }
        Ok(res)
    }

    pub fn matmul(&self, rhs: &Matrix<f64>) -> Result<Matrix<f64>> {
        if self.cols != rhs.rows {
            return Err(LogicError::ShapeMismatch(self.rows, self.cols, rhs.rows, rhs.cols));
        }
        let mut res = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }
                res.data[i][j] = sum;
            }
        }
        Ok(res)
    }
}

impl Matrix<u8> {
    /// Builds a matrix whose columns are the given equal-length bit vectors.
    pub fn from_columns(columns: &[Vec<u8>]) -> Result<BitMatrix> {
        let rows = columns.first().map_or(0, Vec::len);
        if let Some(col) = columns.iter().find(|col| col.len() != rows) {
            return Err(LogicError::LengthMismatch(rows, col.len()));
        }
        for &bit in columns.iter().flatten() {
            check_bit(bit)?;
        }
        let data = (0..rows)
            .map(|i| columns.iter().map(|col| col[i]).collect())
            .collect();
        Ok(Matrix { rows, cols: columns.len(), data })
    }

    /// Uniformly random 0/1 entries.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> BitMatrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(0..=1u8);
            }
        }
        res
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use crate::error::{check_len, NnError, Result};
use crate::math::vector::Vector;

/// Dense row-major matrix of `f64`.
///
/// The shape is derived from the data at construction and cannot be changed
/// afterwards. Serialized as a plain array of rows; deserialization rejects
/// ragged rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from its rows. Every row must have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        if let Some(bad) = data.iter().position(|row| row.len() != cols) {
            return Err(NnError::InvalidArgument(format!(
                "row {bad} has {} columns, expected {cols}",
                data[bad].len()
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Square matrix with `diag` on the diagonal and exact zeros elsewhere.
    pub fn from_diagonal(diag: &[f64]) -> Matrix {
        let mut res = Matrix::zeros(diag.len(), diag.len());
        for (i, &d) in diag.iter().enumerate() {
            res.data[i][i] = d;
        }
        res
    }

    /// Outer product `p · qᵗ`, shape `p.len() × q.len()`.
    pub fn outer(p: &[f64], q: &[f64]) -> Matrix {
        Matrix {
            rows: p.len(),
            cols: q.len(),
            data: p
                .iter()
                .map(|&pi| q.iter().map(|&qj| pi * qj).collect())
                .collect(),
        }
    }

    /// `n × 1` matrix holding `v`.
    pub fn column(v: &[f64]) -> Matrix {
        Matrix {
            rows: v.len(),
            cols: 1,
            data: v.iter().map(|&x| vec![x]).collect(),
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
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

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry `(i, j)`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.data.get(i)?.get(j).copied()
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Flattens a single-column matrix back into a vector.
    pub fn into_column(self) -> Result<Vector> {
        check_len("column matrix width", 1, self.cols)?;
        Ok(self.data.into_iter().map(|row| row[0]).collect())
    }

    /// `A · x`.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vector> {
        check_len("matrix-vector product", self.cols, x.len())?;
        Ok(self
            .data
            .iter()
            .map(|row| row.iter().zip(x).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// `Aᵗ · v`, without materializing the transpose.
    pub fn transpose_mul_vec(&self, v: &[f64]) -> Result<Vector> {
        check_len("transposed matrix-vector product", self.rows, v.len())?;
        let mut res = vec![0.0; self.cols];
        for (row, &vi) in self.data.iter().zip(v) {
            for (r, &a) in res.iter_mut().zip(row) {
                *r += a * vi;
            }
        }
        Ok(res)
    }

    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        check_len("matrix product", self.cols, rhs.rows)?;

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

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = NnError;

    fn try_from(data: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_data(data)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i][j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        for row in &self.data {
            let line: Vec<String> = row.iter().map(|x| format!("{x:>10.precision$}")).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

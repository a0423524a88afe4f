use crate::error::{check_len, Result};

/// Dense column vector.
pub type Vector = Vec<f64>;

/// Element-wise (Hadamard) product of two equal-length vectors.
pub fn hadamard(a: &[f64], b: &[f64]) -> Result<Vector> {
    check_len("hadamard product", a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).collect())
}

pub fn add(a: &[f64], b: &[f64]) -> Result<Vector> {
    check_len("vector sum", a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_len("dot product", a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

use crate::math::{Matrix, Vector};

/// Logistic sigmoid σ(x) = 1 / (1 + e^(−x)).
///
/// Both the function and its derivative are evaluated through e^(−|x|), so
/// large-magnitude inputs saturate toward 0 or 1 instead of overflowing into
/// `NaN`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sigmoid;

impl Sigmoid {
    pub fn function(x: f64) -> f64 {
        let e = (-x.abs()).exp();
        if x >= 0.0 {
            1.0 / (1.0 + e)
        } else {
            e / (1.0 + e)
        }
    }

    /// σ′(x) = e^x / (1 + e^x)², evaluated independently of [`Sigmoid::function`].
    ///
    /// σ′ is even, so e^(−|x|) / (1 + e^(−|x|))² gives the same value for any sign.
    pub fn derivative(x: f64) -> f64 {
        let e = (-x.abs()).exp();
        e / ((1.0 + e) * (1.0 + e))
    }

    pub fn function_vec(x: &[f64]) -> Vector {
        x.iter().map(|&v| Sigmoid::function(v)).collect()
    }

    /// Diagonal of the Jacobian of the element-wise sigmoid.
    pub fn derivative_vec(x: &[f64]) -> Vector {
        x.iter().map(|&v| Sigmoid::derivative(v)).collect()
    }

    /// Full Jacobian of the element-wise sigmoid: `diag(σ′(x))`.
    ///
    /// O(n²) in space; [`Sigmoid::derivative_vec`] carries the same information.
    pub fn jacobian(x: &[f64]) -> Matrix {
        Matrix::from_diagonal(&Sigmoid::derivative_vec(x))
    }
}

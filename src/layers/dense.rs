use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

use crate::activation::Sigmoid;
use crate::error::{check_len, NnError, Result};
use crate::math::vector::{add, hadamard};
use crate::math::{Matrix, Vector};
use crate::random::RandomGenerator;

/// Fully-connected layer `y = σ(A·x + b)`.
///
/// `weights` is `output_size × input_size`, `biases` has `output_size`
/// entries. Parameters are fixed after construction; every method is a
/// read-only function of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LayerParameters")]
pub struct Layer {
    weights: Matrix,
    biases: Vector,
}

/// Unchecked wire form of a [`Layer`].
#[derive(Deserialize)]
struct LayerParameters {
    weights: Matrix,
    biases: Vector,
}

impl TryFrom<LayerParameters> for Layer {
    type Error = NnError;

    fn try_from(p: LayerParameters) -> Result<Self> {
        Layer::from_parameters(p.weights, p.biases)
    }
}

/// `dL/dA`, `dL/db` and `dL/dx` for one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub a: Matrix,
    pub b: Vector,
    pub x: Vector,
}

impl Layer {
    /// Draws the weights, then the biases, from `generator`.
    pub fn new(output_size: usize, input_size: usize, generator: &mut RandomGenerator) -> Result<Layer> {
        if output_size == 0 || input_size == 0 {
            return Err(NnError::InvalidArgument(format!(
                "layer dimensions must be at least 1, got {output_size}x{input_size}"
            )));
        }
        let weights = generator.make_matrix(output_size, input_size)?;
        let biases = generator.make_vector(output_size)?;
        debug!(
            "initialized {output_size}x{input_size} layer from seed {}",
            generator.seed()
        );
        Ok(Layer { weights, biases })
    }

    /// Like [`Layer::new`], holding the lock across both draws so concurrent
    /// constructions never interleave their samples.
    pub fn new_shared(
        output_size: usize,
        input_size: usize,
        generator: &Mutex<RandomGenerator>,
    ) -> Result<Layer> {
        // A panic elsewhere cannot leave the generator mid-draw.
        let mut guard = generator.lock().unwrap_or_else(PoisonError::into_inner);
        Layer::new(output_size, input_size, &mut guard)
    }

    /// Builds a layer from explicit parameters.
    pub fn from_parameters(weights: Matrix, biases: Vector) -> Result<Layer> {
        if weights.rows() == 0 || weights.cols() == 0 {
            return Err(NnError::InvalidArgument(format!(
                "weights must be non-empty, got {}x{}",
                weights.rows(),
                weights.cols()
            )));
        }
        if weights.rows() != biases.len() {
            return Err(NnError::InvalidArgument(format!(
                "weights have {} rows but biases have {} entries",
                weights.rows(),
                biases.len()
            )));
        }
        Ok(Layer { weights, biases })
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &[f64] {
        &self.biases
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols()
    }

    pub fn output_size(&self) -> usize {
        self.weights.rows()
    }

    /// Pre-activation `z = A·x + b`.
    fn pre_activation(&self, x: &[f64]) -> Result<Vector> {
        check_len("layer input", self.input_size(), x.len())?;
        add(&self.weights.mul_vec(x)?, &self.biases)
    }

    /// `δ = σ′(z) ⊙ u`, i.e. `diag(σ′(z))·u` without the diagonal matrix.
    fn delta(&self, x: &[f64], u: &[f64]) -> Result<Vector> {
        check_len("upstream gradient", self.output_size(), u.len())?;
        let z = self.pre_activation(x)?;
        hadamard(&Sigmoid::derivative_vec(&z), u)
    }

    /// Forward pass `σ(A·x + b)`.
    pub fn predict(&self, x: &[f64]) -> Result<Vector> {
        Ok(Sigmoid::function_vec(&self.pre_activation(x)?))
    }

    /// `dL/dA = diag(σ′(z))·u·xᵗ`; entry `(i, j)` is `σ′(z_i)·u_i·x_j`.
    pub fn grad_a(&self, x: &[f64], u: &[f64]) -> Result<Matrix> {
        Ok(Matrix::outer(&self.delta(x, u)?, x))
    }

    /// `dL/db = diag(σ′(z))·u`.
    pub fn grad_b(&self, x: &[f64], u: &[f64]) -> Result<Vector> {
        self.delta(x, u)
    }

    /// `dL/dx = (uᵗ·diag(σ′(z))·A)ᵗ = Aᵗ·(u ⊙ σ′(z))`.
    pub fn grad_x(&self, x: &[f64], u: &[f64]) -> Result<Vector> {
        self.weights.transpose_mul_vec(&self.delta(x, u)?)
    }

    /// All three gradients from a single evaluation of `z`.
    pub fn gradients(&self, x: &[f64], u: &[f64]) -> Result<Gradients> {
        let delta = self.delta(x, u)?;
        Ok(Gradients {
            a: Matrix::outer(&delta, x),
            x: self.weights.transpose_mul_vec(&delta)?,
            b: delta,
        })
    }

    /// Serializes the layer parameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a layer from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<Layer> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

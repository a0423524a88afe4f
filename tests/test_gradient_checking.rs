// Numerical gradient checking: for L(x) = u · predict(x), central finite
// differences over A, b and x must agree with the analytic gradients.

use sigmoid_layer::math::vector::dot;
use sigmoid_layer::{Layer, Matrix, RandomGenerator};

const EPS: f64 = 1e-6;
const TOL: f64 = 1e-6;

fn loss(layer: &Layer, x: &[f64], u: &[f64]) -> f64 {
    dot(&layer.predict(x).unwrap(), u).unwrap()
}

fn with_weight(layer: &Layer, i: usize, j: usize, delta: f64) -> Layer {
    let mut rows: Vec<Vec<f64>> = layer.weights().rows_iter().map(<[f64]>::to_vec).collect();
    rows[i][j] += delta;
    Layer::from_parameters(Matrix::from_data(rows).unwrap(), layer.biases().to_vec()).unwrap()
}

fn with_bias(layer: &Layer, i: usize, delta: f64) -> Layer {
    let mut biases = layer.biases().to_vec();
    biases[i] += delta;
    Layer::from_parameters(layer.weights().clone(), biases).unwrap()
}

fn assert_close(analytic: f64, numeric: f64, what: &str) {
    let scale = analytic.abs().max(numeric.abs()).max(1.0);
    assert!(
        (analytic - numeric).abs() / scale < TOL,
        "{what}: analytic {analytic}, numeric {numeric}"
    );
}

/// Small weights keep the pre-activations away from saturation so the
/// finite differences are informative.
fn small_layer(seed: u64) -> Layer {
    let mut g = RandomGenerator::new(Some(seed));
    let layer = Layer::new(4, 3, &mut g).unwrap();
    let scaled = layer.weights().map(|w| w * 0.02);
    let biases = layer.biases().iter().map(|b| b * 0.02).collect();
    Layer::from_parameters(scaled, biases).unwrap()
}

const X: [f64; 3] = [0.7, -1.2, 0.4];
const U: [f64; 4] = [1.0, -0.5, 2.0, 0.3];

#[test]
fn test_grad_a_matches_finite_differences() {
    let layer = small_layer(1);
    let ga = layer.grad_a(&X, &U).unwrap();
    for i in 0..layer.output_size() {
        for j in 0..layer.input_size() {
            let plus = loss(&with_weight(&layer, i, j, EPS), &X, &U);
            let minus = loss(&with_weight(&layer, i, j, -EPS), &X, &U);
            assert_close(ga[(i, j)], (plus - minus) / (2.0 * EPS), "dL/dA");
        }
    }
}

#[test]
fn test_grad_b_matches_finite_differences() {
    let layer = small_layer(2);
    let gb = layer.grad_b(&X, &U).unwrap();
    for i in 0..layer.output_size() {
        let plus = loss(&with_bias(&layer, i, EPS), &X, &U);
        let minus = loss(&with_bias(&layer, i, -EPS), &X, &U);
        assert_close(gb[i], (plus - minus) / (2.0 * EPS), "dL/db");
    }
}

#[test]
fn test_grad_x_matches_finite_differences() {
    let layer = small_layer(3);
    let gx = layer.grad_x(&X, &U).unwrap();
    for j in 0..layer.input_size() {
        let mut xp = X;
        let mut xm = X;
        xp[j] += EPS;
        xm[j] -= EPS;
        let numeric = (loss(&layer, &xp, &U) - loss(&layer, &xm, &U)) / (2.0 * EPS);
        assert_close(gx[j], numeric, "dL/dx");
    }
}

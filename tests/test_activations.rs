// Properties of the sigmoid and its derivative, scalar and vector forms.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use sigmoid_layer::Sigmoid;

#[test]
fn test_sigmoid_half_at_zero() {
    assert_eq!(Sigmoid::function(0.0), 0.5);
}

#[test]
fn test_sigmoid_monotonic() {
    let xs: Vec<f64> = (-200..=200).map(|i| i as f64 * 0.1).collect();
    for pair in xs.windows(2) {
        assert!(Sigmoid::function(pair[0]) < Sigmoid::function(pair[1]));
    }
}

#[test]
fn test_jacobian_off_diagonal_exactly_zero() {
    let x = [-3.0, -0.5, 0.0, 0.5, 3.0];
    let jac = Sigmoid::jacobian(&x);
    for i in 0..x.len() {
        for j in 0..x.len() {
            if i == j {
                assert_eq!(jac[(i, j)], Sigmoid::derivative(x[i]));
            } else {
                assert_eq!(jac[(i, j)], 0.0);
            }
        }
    }
}

proptest! {
    #[test]
    fn sigmoid_strictly_inside_unit_interval(x in -30.0f64..30.0) {
        let y = Sigmoid::function(x);
        prop_assert!(y > 0.0 && y < 1.0);
    }

    #[test]
    fn derivative_matches_algebraic_identity(x in -50.0f64..50.0) {
        let s = Sigmoid::function(x);
        assert_abs_diff_eq!(Sigmoid::derivative(x), s * (1.0 - s), epsilon = 1e-12);
    }

    #[test]
    fn vector_form_is_elementwise(xs in prop::collection::vec(-20.0f64..20.0, 0..16)) {
        let ys = Sigmoid::function_vec(&xs);
        let ds = Sigmoid::derivative_vec(&xs);
        prop_assert_eq!(ys.len(), xs.len());
        for (i, &x) in xs.iter().enumerate() {
            prop_assert_eq!(ys[i], Sigmoid::function(x));
            prop_assert_eq!(ds[i], Sigmoid::derivative(x));
        }
    }

    #[test]
    fn jacobian_is_square_diagonal(xs in prop::collection::vec(-20.0f64..20.0, 1..8)) {
        let jac = Sigmoid::jacobian(&xs);
        prop_assert_eq!((jac.rows(), jac.cols()), (xs.len(), xs.len()));
        for i in 0..xs.len() {
            for j in 0..xs.len() {
                let expected = if i == j { Sigmoid::derivative(xs[i]) } else { 0.0 };
                prop_assert_eq!(jac[(i, j)], expected);
            }
        }
    }
}

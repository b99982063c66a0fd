use super::*;
use crate::autograd::check_grad;
use crate::test_utils::{assert_grad, init_test_logger};
use crate::value::values;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_neuron_parameters() {
    let neuron = Neuron::new(3, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(neuron.n_inputs(), 3);
    assert_eq!(neuron.num_parameters(), 4);
    assert_eq!(neuron.bias().data(), 0.0);
    assert!(neuron
        .weights()
        .iter()
        .all(|w| (-1.0..=1.0).contains(&w.data())));
    assert_eq!(neuron.activation(), Activation::Tanh);
}

#[test]
fn test_parameter_order_is_weights_then_bias() {
    let neuron = Neuron::from_weights(&[0.1, 0.2], 0.3);
    let data: Vec<f64> = neuron.parameters().iter().map(Value::data).collect();
    assert_eq!(data, vec![0.1, 0.2, 0.3]);
    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["w0", "w1", "bias"]);
}

#[test]
fn test_fixed_weights_scenario() {
    init_test_logger();
    let neuron = Neuron::from_weights(&[0.5, -0.5], 0.0);
    let out = neuron.activate(&values(&[1.0, 1.0])).unwrap();
    assert_eq!(out.data(), 0.0);

    out.backward();
    assert_grad(&neuron.weights()[0], 1.0, 1e-12);
    assert_grad(&neuron.weights()[1], 1.0, 1e-12);
    assert_grad(neuron.bias(), 1.0, 1e-12);
}

#[test]
fn test_forward_matches_formula() {
    let neuron = Neuron::from_weights(&[0.3, -0.8], 0.1);
    let out = neuron.activate(&values(&[2.0, 0.5])).unwrap();
    let expected = (0.3 * 2.0 - 0.8 * 0.5 + 0.1f64).tanh();
    assert!((out.data() - expected).abs() < 1e-12);
}

#[test]
fn test_input_gradients_match_finite_difference() {
    let neuron = Neuron::from_weights(&[0.7, -0.2, 0.4], -0.1);
    check_grad(|x| neuron.activate(x), &[0.5, -1.0, 0.25], 1e-6, 1e-4).unwrap();
}

#[test]
fn test_arity_mismatch() {
    let neuron = Neuron::from_weights(&[0.5, -0.5], 0.0);
    let err = neuron.activate(&values(&[1.0, 2.0, 3.0])).unwrap_err();
    assert_eq!(
        err,
        ScalarFlowError::ShapeMismatch {
            expected: 2,
            actual: 3,
            operation: "Neuron::forward".to_string(),
        }
    );
    assert!(neuron.forward(&values(&[1.0])).is_err());
}

#[test]
fn test_zero_grad() {
    let neuron = Neuron::from_weights(&[0.5, -0.5], 0.0);
    neuron
        .activate(&values(&[1.0, 2.0]))
        .unwrap()
        .backward();
    assert!(neuron.parameters().iter().any(|p| p.grad() != 0.0));
    neuron.zero_grad();
    assert!(neuron.parameters().iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_relu_activation() {
    let neuron = Neuron::with_activation(2, Activation::Relu, &mut StdRng::seed_from_u64(9)).unwrap();
    let out = neuron.activate(&values(&[0.0, 0.0])).unwrap();
    assert_eq!(out.data(), 0.0);
    assert_eq!(out.op(), crate::autograd::Op::Relu);
}

use super::*;
use crate::autograd::grad_check::check_grad;
use crate::value::values;
use approx::assert_relative_eq;

#[test]
fn test_reduction_parsing() {
    assert_eq!("mean".parse::<Reduction>().unwrap(), Reduction::Mean);
    assert_eq!("SUM".parse::<Reduction>().unwrap(), Reduction::Sum);
    assert!(matches!(
        "none".parse::<Reduction>(),
        Err(ScalarFlowError::ConfigurationError(_))
    ));
    assert_eq!(Reduction::default(), Reduction::Sum);
    assert_eq!(Reduction::Mean.to_string(), "mean");
}

#[test]
fn test_mse_sum_forward() {
    let mse = MSELoss::new(Reduction::Sum);
    let preds = values(&[1.0, 2.0]);
    let targets = values(&[1.5, 1.0]);
    let loss = mse.calculate(&preds, &targets).unwrap();
    assert_relative_eq!(loss.data(), 1.25, epsilon = 1e-12);
}

#[test]
fn test_mse_mean_forward() {
    let mse = MSELoss::new(Reduction::Mean);
    let preds = values(&[1.0, 2.0]);
    let targets = values(&[1.5, 1.0]);
    let loss = mse.calculate(&preds, &targets).unwrap();
    assert_relative_eq!(loss.data(), 0.625, epsilon = 1e-12);
}

#[test]
fn test_mse_backward() {
    let mse = MSELoss::new(Reduction::Sum);
    let preds = values(&[3.0, 0.5]);
    let targets = values(&[1.0, 1.0]);
    let loss = mse.calculate(&preds, &targets).unwrap();
    loss.backward();
    assert_relative_eq!(preds[0].grad(), 4.0, epsilon = 1e-12);
    assert_relative_eq!(preds[1].grad(), -1.0, epsilon = 1e-12);
    assert_relative_eq!(targets[0].grad(), -4.0, epsilon = 1e-12);
}

#[test]
fn test_mse_mean_backward_scales_by_count() {
    let mse = MSELoss::new(Reduction::Mean);
    let preds = values(&[3.0, 0.5]);
    let targets = values(&[1.0, 1.0]);
    mse.calculate(&preds, &targets).unwrap().backward();
    assert_relative_eq!(preds[0].grad(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(preds[1].grad(), -0.5, epsilon = 1e-12);
}

#[test]
fn test_mse_length_mismatch() {
    let mse = MSELoss::default();
    let result = mse.calculate(&values(&[1.0, 2.0]), &values(&[1.0, 2.0, 3.0]));
    assert_eq!(
        result.err(),
        Some(ScalarFlowError::ShapeMismatch {
            expected: 3,
            actual: 2,
            operation: "MSELoss::calculate".to_string(),
        })
    );
}

#[test]
fn test_mse_empty_input() {
    let mse = MSELoss::default();
    assert!(matches!(
        mse.calculate(&[], &[]),
        Err(ScalarFlowError::ConfigurationError(_))
    ));
}

#[test]
fn test_mse_grad_check() {
    let mse = MSELoss::new(Reduction::Mean);
    let targets = values(&[0.1, -0.4, 0.9]);
    check_grad(
        |preds| mse.calculate(preds, &targets),
        &[0.3, 0.2, -1.1],
        1e-6,
        1e-4,
    )
    .unwrap();
}

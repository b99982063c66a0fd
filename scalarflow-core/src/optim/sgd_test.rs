use super::*;
use crate::value::values;
use approx::assert_relative_eq;

/// Builds parameters and gives them known gradients through `sum(p * g)`.
fn params_with_grads(data: &[f64], grads: &[f64]) -> Vec<Value> {
    let params = values(data);
    let loss: Value = params
        .iter()
        .zip(grads)
        .map(|(p, &g)| p * g)
        .sum();
    loss.backward();
    params
}

#[test]
fn test_sgd_basic_step() -> Result<(), ScalarFlowError> {
    let params = params_with_grads(&[1.0, 2.0, 3.0, 4.0], &[0.1, 0.2, 0.3, 0.4]);
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1)?;
    optimizer.step()?;
    let expected = [0.99, 1.98, 2.97, 3.96];
    for (p, e) in params.iter().zip(expected) {
        assert_relative_eq!(p.data(), e, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_sgd_step_keeps_gradients() -> Result<(), ScalarFlowError> {
    let params = params_with_grads(&[1.0], &[0.5]);
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1)?;
    optimizer.step()?;
    assert_eq!(params[0].grad(), 0.5);
    optimizer.zero_grad();
    assert_eq!(params[0].grad(), 0.0);
    Ok(())
}

#[test]
fn test_sgd_zero_grad_step_is_noop() -> Result<(), ScalarFlowError> {
    let params = values(&[1.5, -2.5]);
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.5)?;
    optimizer.step()?;
    assert_eq!(params[0].data(), 1.5);
    assert_eq!(params[1].data(), -2.5);
    Ok(())
}

#[test]
fn test_sgd_momentum() -> Result<(), ScalarFlowError> {
    let params = params_with_grads(&[1.0], &[1.0]);
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1)?.with_momentum(0.9)?;
    optimizer.step()?;
    // v = 1.0
    assert_relative_eq!(params[0].data(), 0.9, epsilon = 1e-12);
    optimizer.step()?;
    // v = 0.9 * 1.0 + 1.0
    assert_relative_eq!(params[0].data(), 0.9 - 0.19, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), ScalarFlowError> {
    let params = params_with_grads(&[2.0], &[0.5]);
    let mut optimizer = SgdOptimizer::new(params.clone(), 0.1)?.with_weight_decay(0.1)?;
    optimizer.step()?;
    assert_relative_eq!(params[0].data(), 2.0 - 0.1 * (0.5 + 0.2), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_rejects_bad_hyperparameters() {
    assert!(matches!(
        SgdOptimizer::new(values(&[1.0]), -0.1),
        Err(ScalarFlowError::ConfigurationError(_))
    ));
    assert!(SgdOptimizer::new(values(&[1.0]), f64::NAN).is_err());
    let opt = SgdOptimizer::new(values(&[1.0]), 0.1).unwrap();
    assert!(opt.with_momentum(1.0).is_err());
    let opt = SgdOptimizer::new(values(&[1.0]), 0.1).unwrap();
    assert!(opt.with_weight_decay(-1.0).is_err());
}

#[test]
fn test_learning_rate_accessors() -> Result<(), ScalarFlowError> {
    let mut optimizer = SgdOptimizer::new(values(&[1.0]), 0.1)?;
    assert_eq!(optimizer.learning_rate(), 0.1);
    optimizer.set_learning_rate(0.05);
    assert_eq!(optimizer.learning_rate(), 0.05);
    optimizer.set_learning_rate(-3.0);
    assert_eq!(optimizer.learning_rate(), 0.05);
    Ok(())
}

use crate::error::ScalarFlowError;
use crate::value::{values, Value};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(#[from] ScalarFlowError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against central finite differences.
///
/// `func` receives fresh leaves built from `inputs` and must return the scalar
/// to differentiate. For every input, the gradient produced by `backward` is
/// compared with `(f(x + eps) - f(x - eps)) / (2 * eps)`. A pair passes when
/// the absolute difference is within `tolerance * max(1, |numerical|)`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarFlowError>,
{
    let leaves = values(inputs);
    let output = func(&leaves)?;
    output.backward();

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate_perturbed(&func, inputs, input_index, epsilon)?;
        let loss_minus = evaluate_perturbed(&func, inputs, input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance * numerical_grad.abs().max(1.0) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, ScalarFlowError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarFlowError>,
{
    let mut perturbed = inputs.to_vec();
    perturbed[index] += delta;
    Ok(func(&values(&perturbed))?.data())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;

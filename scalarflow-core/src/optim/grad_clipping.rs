use crate::error::ScalarFlowError;
use crate::value::Value;
use log::debug;

/// Clamps each gradient into `[-clip_value, clip_value]`.
///
/// NaN gradients are left as they are.
///
/// # Errors
/// `ConfigurationError` if `clip_value` is negative or NaN.
pub fn clip_grad_value<'a>(
    parameters: impl IntoIterator<Item = &'a Value>,
    clip_value: f64,
) -> Result<(), ScalarFlowError> {
    if clip_value.is_nan() || clip_value < 0.0 {
        return Err(ScalarFlowError::ConfigurationError(
            "clip_value must be non-negative".to_string(),
        ));
    }
    for param in parameters {
        param.clamp_grad(clip_value);
    }
    Ok(())
}

/// Rescales all gradients together so that their L2 norm does not exceed
/// `max_norm`.
///
/// The gradients are viewed as one concatenated vector. When its norm is
/// above `max_norm` every gradient is multiplied by
/// `max_norm / (norm + 1e-6)`. A non-finite norm leaves the gradients
/// untouched, and a `max_norm` of zero clears them.
///
/// Returns the norm measured before clipping.
///
/// # Errors
/// `ConfigurationError` if `max_norm` is negative or NaN.
pub fn clip_grad_norm(parameters: &[Value], max_norm: f64) -> Result<f64, ScalarFlowError> {
    if max_norm.is_nan() || max_norm < 0.0 {
        return Err(ScalarFlowError::ConfigurationError(
            "max_norm must be non-negative".to_string(),
        ));
    }

    let total_norm = parameters
        .iter()
        .map(|p| p.grad() * p.grad())
        .sum::<f64>()
        .sqrt();

    if total_norm > max_norm {
        let clip_coef = if max_norm == 0.0 {
            0.0
        } else if total_norm.is_finite() {
            max_norm / (total_norm + 1e-6)
        } else {
            1.0
        };
        if clip_coef < 1.0 {
            debug!(
                "Clipping gradient norm {:.6} to {:.6} (coef {:.6})",
                total_norm, max_norm, clip_coef
            );
            for param in parameters {
                param.scale_grad(clip_coef);
            }
        }
    }
    Ok(total_norm)
}

#[cfg(test)]
#[path = "grad_clipping_test.rs"]
mod tests;

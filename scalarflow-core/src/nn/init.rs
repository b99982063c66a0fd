//! Parameter initialisation.

use crate::error::ScalarFlowError;
use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Lower bound of the default weight distribution.
pub const WEIGHT_INIT_LOW: f64 = -1.0;
/// Upper bound of the default weight distribution.
pub const WEIGHT_INIT_HIGH: f64 = 1.0;

/// Creates `n` leaves drawn independently from `Uniform[low, high]`,
/// labelled `{prefix}0`, `{prefix}1`, …
///
/// # Errors
/// `ConfigurationError` if the bounds are not finite or `low > high`.
pub fn uniform<R>(
    n: usize,
    low: f64,
    high: f64,
    prefix: &str,
    rng: &mut R,
) -> Result<Vec<Value>, ScalarFlowError>
where
    R: Rng + ?Sized,
{
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(ScalarFlowError::ConfigurationError(format!(
            "invalid uniform bounds [{low}, {high}]"
        )));
    }
    let dist = Uniform::new_inclusive(low, high);
    Ok((0..n)
        .map(|i| Value::with_label(dist.sample(&mut *rng), format!("{prefix}{i}")))
        .collect())
}

/// Creates a single zero-valued leaf.
pub fn zero(label: &str) -> Value {
    Value::with_label(0.0, label)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;

use scalarflow_core::Value;
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

#[allow(dead_code)]
pub fn init_logger() {
    LOGGER_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Central-difference derivative of `f` at `x`.
#[allow(dead_code)]
pub fn numerical_derivative(f: impl Fn(&Value) -> Value, x: f64) -> f64 {
    let eps = 1e-6;
    let plus = f(&Value::new(x + eps)).data();
    let minus = f(&Value::new(x - eps)).data();
    (plus - minus) / (2.0 * eps)
}

/// Analytical derivative of `f` at `x`, from one backward pass.
#[allow(dead_code)]
pub fn analytical_derivative(f: impl Fn(&Value) -> Value, x: f64) -> f64 {
    let leaf = Value::new(x);
    f(&leaf).backward();
    leaf.grad()
}

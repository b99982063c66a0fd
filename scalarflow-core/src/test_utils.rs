use crate::Value;
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

/// Routes `log` output through env_logger's test writer. Safe to call from
/// every test.
pub(crate) fn init_test_logger() {
    LOGGER_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Asserts that `value.grad()` is within `tolerance` of `expected`.
pub(crate) fn assert_grad(value: &Value, expected: f64, tolerance: f64) {
    let actual = value.grad();
    if (actual - expected).abs() > tolerance {
        panic!(
            "Gradient mismatch for {:?}: actual={}, expected={}, diff={}, tolerance={}",
            value,
            actual,
            expected,
            (actual - expected).abs(),
            tolerance
        );
    }
}

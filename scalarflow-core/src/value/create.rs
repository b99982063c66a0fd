use super::Value;
use crate::error::ScalarFlowError;
use num_traits::ToPrimitive;
use std::fmt::Debug;
use std::str::FromStr;

/// Wraps each number in a fresh, independent leaf node.
pub fn values(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

impl Value {
    /// Promotes any primitive-convertible number to a constant leaf.
    ///
    /// # Errors
    /// Returns `NonNumericOperand` if the operand has no `f64` representation.
    pub fn try_from_number<T>(operand: T) -> Result<Value, ScalarFlowError>
    where
        T: ToPrimitive + Debug,
    {
        operand
            .to_f64()
            .map(Value::constant)
            .ok_or_else(|| ScalarFlowError::NonNumericOperand(format!("{operand:?}")))
    }
}

impl FromStr for Value {
    type Err = ScalarFlowError;

    /// Parses a numeric literal (surrounding whitespace allowed) into a leaf.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Value::new)
            .map_err(|_| ScalarFlowError::NonNumericOperand(s.to_string()))
    }
}

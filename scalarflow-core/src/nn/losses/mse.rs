use crate::error::ScalarFlowError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// How the per-example squared errors are combined into one loss node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarFlowError::ConfigurationError(format!(
                "unsupported reduction: {s}"
            ))),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduction::Mean => write!(f, "mean"),
            Reduction::Sum => write!(f, "sum"),
        }
    }
}

/// Squared-error loss built from the node operations, so the result
/// backpropagates like any other expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes `Σ (prediction - target)²`, divided by the count when the
    /// reduction is `Mean`.
    ///
    /// # Errors
    /// `ShapeMismatch` when the slices differ in length and
    /// `ConfigurationError` when they are empty.
    pub fn calculate(
        &self,
        predictions: &[Value],
        targets: &[Value],
    ) -> Result<Value, ScalarFlowError> {
        if predictions.len() != targets.len() {
            return Err(ScalarFlowError::shape_mismatch(
                targets.len(),
                predictions.len(),
                "MSELoss::calculate",
            ));
        }
        if predictions.is_empty() {
            return Err(ScalarFlowError::ConfigurationError(
                "MSELoss needs at least one prediction".to_string(),
            ));
        }

        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(pred, target)| (pred - target).pow(2.0))
            .sum();

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total * (1.0 / predictions.len() as f64),
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;

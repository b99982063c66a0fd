use crate::error::ScalarFlowError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;
use log::{trace, warn};

/// Stochastic gradient descent with optional momentum and L2 weight decay.
///
/// Each step computes `d = grad + weight_decay * data`; with momentum the
/// per-parameter buffer becomes `v = momentum * v + d` and replaces `d`.
/// The parameter then moves by `-lr * d`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    velocity: Vec<f64>,
}

impl SgdOptimizer {
    /// Creates a plain SGD optimizer over `params`.
    ///
    /// # Errors
    /// `ConfigurationError` if `lr` is negative or not finite.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        lr: f64,
    ) -> Result<Self, ScalarFlowError> {
        validate_lr(lr)?;
        let params: Vec<Value> = params.into_iter().collect();
        let velocity = vec![0.0; params.len()];
        Ok(SgdOptimizer {
            params,
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            velocity,
        })
    }

    /// # Errors
    /// `ConfigurationError` unless `0 <= momentum < 1`.
    pub fn with_momentum(mut self, momentum: f64) -> Result<Self, ScalarFlowError> {
        if !(0.0..1.0).contains(&momentum) {
            return Err(ScalarFlowError::ConfigurationError(format!(
                "momentum must be in [0, 1), got {momentum}"
            )));
        }
        self.momentum = momentum;
        Ok(self)
    }

    /// # Errors
    /// `ConfigurationError` if `weight_decay` is negative or not finite.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Result<Self, ScalarFlowError> {
        if !weight_decay.is_finite() || weight_decay < 0.0 {
            return Err(ScalarFlowError::ConfigurationError(format!(
                "weight_decay must be non-negative, got {weight_decay}"
            )));
        }
        self.weight_decay = weight_decay;
        Ok(self)
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }
}

fn validate_lr(lr: f64) -> Result<(), ScalarFlowError> {
    if !lr.is_finite() || lr < 0.0 {
        return Err(ScalarFlowError::ConfigurationError(format!(
            "learning rate must be non-negative, got {lr}"
        )));
    }
    Ok(())
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarFlowError> {
        for (param, velocity) in self.params.iter().zip(self.velocity.iter_mut()) {
            let mut d_p = param.grad();
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * param.data();
            }
            if self.momentum != 0.0 {
                *velocity = self.momentum * *velocity + d_p;
                d_p = *velocity;
            }
            if !d_p.is_finite() {
                warn!("SGD update for {:?} is not finite ({})", param, d_p);
            }
            param.set_data(param.data() - self.lr * d_p);
        }
        trace!("SGD step applied to {} parameters (lr={})", self.params.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) {
        if validate_lr(lr).is_err() {
            warn!("Ignoring invalid learning rate {}; keeping {}", lr, self.lr);
            return;
        }
        self.lr = lr;
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;

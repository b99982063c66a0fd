use crate::error::ScalarFlowError;

/// Common interface for the optimizers.
///
/// An optimizer owns handles to the parameters it updates. A training
/// iteration runs `zero_grad`, the forward pass, `backward` on the loss and
/// finally `step`.
pub trait Optimizer {
    /// Applies one update to every managed parameter using its accumulated
    /// gradient.
    ///
    /// # Errors
    /// Implementations may refuse to step with a non-finite gradient.
    fn step(&mut self) -> Result<(), ScalarFlowError>;

    /// Resets the gradient of every managed parameter to zero.
    fn zero_grad(&mut self);

    fn learning_rate(&self) -> f64;

    /// Replaces the learning rate used by subsequent steps.
    fn set_learning_rate(&mut self, lr: f64);
}

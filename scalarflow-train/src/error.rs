use crate::config::ConfigError;
use scalarflow_core::ScalarFlowError;
use thiserror::Error;

/// Errors surfaced by the training driver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainError {
    #[error(transparent)]
    Core(#[from] ScalarFlowError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The loss stopped being a finite number.
    #[error("training diverged at epoch {epoch}: loss = {loss}")]
    Diverged { epoch: usize, loss: f64 },
}

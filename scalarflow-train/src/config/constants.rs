//! Default values and environment variable names for [`TrainConfig`](super::TrainConfig).

/// Environment variable prefix (e.g. `SCALARFLOW_EPOCHS`).
pub(crate) const ENV_PREFIX: &str = "SCALARFLOW_";

pub(crate) const ENV_SEED: &str = "SEED";
pub(crate) const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub(crate) const ENV_EPOCHS: &str = "EPOCHS";
pub(crate) const ENV_HIDDEN_SIZES: &str = "HIDDEN_SIZES";
pub(crate) const ENV_LOG_EVERY: &str = "LOG_EVERY";
pub(crate) const ENV_GRAD_CLIP: &str = "GRAD_CLIP";
pub(crate) const ENV_MOMENTUM: &str = "MOMENTUM";

pub(crate) const DEFAULT_SEED: u64 = 42;
pub(crate) const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub(crate) const DEFAULT_EPOCHS: usize = 1000;
pub(crate) const DEFAULT_HIDDEN_SIZES: [usize; 3] = [12, 12, 1];
pub(crate) const DEFAULT_LOG_EVERY: usize = 100;
pub(crate) const DEFAULT_GRAD_CLIP: f64 = 0.0;
pub(crate) const DEFAULT_MOMENTUM: f64 = 0.0;

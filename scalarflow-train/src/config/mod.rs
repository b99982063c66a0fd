//! Training configuration.
//!
//! Load from the environment with [`from_env`] and check with
//! [`TrainConfig::validate`]. Defaults and variable names live in the
//! `constants` submodule.

mod builder;
mod constants;
mod error;

use constants::{
    DEFAULT_EPOCHS, DEFAULT_GRAD_CLIP, DEFAULT_HIDDEN_SIZES, DEFAULT_LEARNING_RATE,
    DEFAULT_LOG_EVERY, DEFAULT_MOMENTUM, DEFAULT_SEED,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalarflow_core::{Mlp, ScalarFlowError};

pub use builder::{env_key, env_parsed, env_string, from_env, parse_sizes};
pub use error::ConfigError;

/// Hyperparameters of one training run.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainConfig {
    /// Seed for weight initialisation.
    pub seed: u64,
    pub learning_rate: f64,
    pub epochs: usize,
    /// Layer widths after the input, the last one being the output width.
    pub hidden_sizes: Vec<usize>,
    /// Progress is logged every this many epochs (0 = never).
    pub log_every: usize,
    /// Maximum gradient L2 norm; 0 disables clipping.
    pub grad_clip: f64,
    pub momentum: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            hidden_sizes: DEFAULT_HIDDEN_SIZES.to_vec(),
            log_every: DEFAULT_LOG_EVERY,
            grad_clip: DEFAULT_GRAD_CLIP,
            momentum: DEFAULT_MOMENTUM,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.epochs == 0 {
            return Err(ConfigError::Validation(
                "epochs must be greater than 0".to_string(),
            ));
        }
        if self.hidden_sizes.is_empty() {
            return Err(ConfigError::Validation(
                "hidden_sizes must name at least one layer".to_string(),
            ));
        }
        if self.hidden_sizes.contains(&0) {
            return Err(ConfigError::Validation(format!(
                "hidden_sizes must all be positive, got {:?}",
                self.hidden_sizes
            )));
        }
        if !self.grad_clip.is_finite() || self.grad_clip < 0.0 {
            return Err(ConfigError::Validation(
                "grad_clip must be >= 0".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(ConfigError::Validation(
                "momentum must be in [0, 1)".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds a freshly initialised model reading `n_inputs` values,
    /// seeded from `self.seed`.
    pub fn build_model(&self, n_inputs: usize) -> Result<Mlp, ScalarFlowError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        Mlp::new(n_inputs, &self.hidden_sizes, &mut rng)
    }
}

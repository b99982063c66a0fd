//! # scalarflow-train
//!
//! Configuration, in-memory datasets and a full-batch gradient-descent
//! driver for `scalarflow-core` models.

pub mod config;
pub mod data;
pub mod error;
pub mod trainer;

pub use config::{from_env, ConfigError, TrainConfig};
pub use data::{demo_dataset, Dataset, Sample, VecDataset, HOLDOUT_INPUTS};
pub use error::TrainError;
pub use trainer::{EpochReport, Trainer, TrainingHistory};

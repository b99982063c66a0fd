//! Builds [`TrainConfig`] from `SCALARFLOW_*` environment variables.

use super::constants::{
    ENV_EPOCHS, ENV_GRAD_CLIP, ENV_HIDDEN_SIZES, ENV_LEARNING_RATE, ENV_LOG_EVERY, ENV_MOMENTUM,
    ENV_PREFIX, ENV_SEED,
};
use super::{ConfigError, TrainConfig};
use std::env::VarError;
use std::str::FromStr;

/// Full variable name for a suffix (`SEED` → `SCALARFLOW_SEED`).
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads a variable; `Ok(None)` when unset.
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads and parses a variable; `Ok(None)` when unset.
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = env_string(key)? else {
        return Ok(None);
    };
    let parsed = raw.trim().parse::<T>();
    match parsed {
        Ok(v) => Ok(Some(v)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            message: e.to_string(),
            value: raw,
        }),
    }
}

/// Parses a comma separated list of layer widths such as `"12, 12, 1"`.
pub fn parse_sizes(key: &str, raw: &str) -> Result<Vec<usize>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>().map_err(|e| ConfigError::Parse {
                key: key.to_string(),
                value: raw.to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}

/// Builds a [`TrainConfig`] from the environment, falling back to
/// [`TrainConfig::default`] for every unset variable.
///
/// The result is not validated; call [`TrainConfig::validate`] before use.
pub fn from_env() -> Result<TrainConfig, ConfigError> {
    let default = TrainConfig::default();

    let seed = env_parsed::<u64>(&env_key(ENV_SEED))?.unwrap_or(default.seed);
    let learning_rate =
        env_parsed::<f64>(&env_key(ENV_LEARNING_RATE))?.unwrap_or(default.learning_rate);
    let epochs = env_parsed::<usize>(&env_key(ENV_EPOCHS))?.unwrap_or(default.epochs);
    let sizes_key = env_key(ENV_HIDDEN_SIZES);
    let hidden_sizes = match env_string(&sizes_key)? {
        Some(raw) => parse_sizes(&sizes_key, &raw)?,
        None => default.hidden_sizes,
    };
    let log_every = env_parsed::<usize>(&env_key(ENV_LOG_EVERY))?.unwrap_or(default.log_every);
    let grad_clip = env_parsed::<f64>(&env_key(ENV_GRAD_CLIP))?.unwrap_or(default.grad_clip);
    let momentum = env_parsed::<f64>(&env_key(ENV_MOMENTUM))?.unwrap_or(default.momentum);

    Ok(TrainConfig {
        seed,
        learning_rate,
        epochs,
        hidden_sizes,
        log_every,
        grad_clip,
        momentum,
    })
}

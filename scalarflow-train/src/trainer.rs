//! Full-batch gradient descent over a dataset of [`Sample`]s.

use crate::config::TrainConfig;
use crate::data::{Dataset, Sample};
use crate::error::TrainError;
use log::{debug, info, warn};
use scalarflow_core::nn::{MSELoss, Reduction};
use scalarflow_core::optim::{clip_grad_norm, Optimizer, SgdOptimizer};
use scalarflow_core::{Mlp, Module, ScalarFlowError, Value};

/// What one epoch produced, handed to the `fit_with` callback.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    /// Loss of the forward pass that produced the gradients of this epoch.
    pub loss: f64,
    /// Model outputs for every sample, in dataset order, before the update.
    pub predictions: Vec<f64>,
}

/// Loss recorded for every epoch of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    pub losses: Vec<f64>,
}

impl TrainingHistory {
    pub fn first_loss(&self) -> Option<f64> {
        self.losses.first().copied()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }

    /// `true` when the last recorded loss is below the first one.
    pub fn is_improving(&self) -> bool {
        match (self.first_loss(), self.final_loss()) {
            (Some(first), Some(last)) => self.losses.len() > 1 && last < first,
            _ => false,
        }
    }
}

/// Runs the forward, backward and update loop described by a [`TrainConfig`].
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainConfig,
    loss_fn: MSELoss,
}

impl Trainer {
    /// # Errors
    /// `TrainError::Config` if the configuration does not validate.
    pub fn new(config: TrainConfig) -> Result<Self, TrainError> {
        config.validate()?;
        Ok(Trainer {
            config,
            loss_fn: MSELoss::new(Reduction::Sum),
        })
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn fit<D>(&mut self, model: &Mlp, dataset: &D) -> Result<TrainingHistory, TrainError>
    where
        D: Dataset<Item = Sample>,
    {
        self.fit_with(model, dataset, |_| {})
    }

    /// Trains `model` in place for `config.epochs` epochs, calling
    /// `on_epoch` after every update.
    ///
    /// # Errors
    /// `EmptyDataset` for an empty dataset, `ShapeMismatch` if a sample does
    /// not fit the model, and `Diverged` as soon as the loss is not finite.
    pub fn fit_with<D, F>(
        &mut self,
        model: &Mlp,
        dataset: &D,
        mut on_epoch: F,
    ) -> Result<TrainingHistory, TrainError>
    where
        D: Dataset<Item = Sample>,
        F: FnMut(&EpochReport),
    {
        if dataset.is_empty() {
            return Err(ScalarFlowError::EmptyDataset.into());
        }
        let samples = (0..dataset.len())
            .map(|i| dataset.get(i))
            .collect::<Result<Vec<_>, _>>()?;
        let targets: Vec<Value> = samples.iter().map(Sample::target_value).collect();

        let params = model.parameters();
        let mut optimizer =
            SgdOptimizer::new(params.clone(), self.config.learning_rate)?
                .with_momentum(self.config.momentum)?;

        info!(
            "Training {} parameters on {} samples for {} epochs (lr={})",
            params.len(),
            samples.len(),
            self.config.epochs,
            self.config.learning_rate
        );

        let mut history = TrainingHistory {
            losses: Vec::with_capacity(self.config.epochs),
        };
        for epoch in 0..self.config.epochs {
            let predictions = samples
                .iter()
                .map(|s| model.forward(&s.input_values())?.into_scalar())
                .collect::<Result<Vec<_>, _>>()?;
            let loss = self.loss_fn.calculate(&predictions, &targets)?;
            let loss_value = loss.data();
            if !loss_value.is_finite() {
                warn!("Loss became {} at epoch {}", loss_value, epoch);
                return Err(TrainError::Diverged {
                    epoch,
                    loss: loss_value,
                });
            }
            if let Some(previous) = history.final_loss() {
                if loss_value > previous {
                    warn!(
                        "Loss increased at epoch {}: {:.6} -> {:.6}",
                        epoch, previous, loss_value
                    );
                }
            }

            optimizer.zero_grad();
            loss.backward();
            if self.config.grad_clip > 0.0 {
                let norm = clip_grad_norm(&params, self.config.grad_clip)?;
                debug!("Epoch {} gradient norm {:.6}", epoch, norm);
            }
            optimizer.step()?;

            history.losses.push(loss_value);
            if self.config.log_every > 0 && epoch % self.config.log_every == 0 {
                info!("Epoch {:>5}  loss {:.6}", epoch, loss_value);
            }
            on_epoch(&EpochReport {
                epoch,
                loss: loss_value,
                predictions: predictions.iter().map(Value::data).collect(),
            });
        }

        if let Some(last) = history.final_loss() {
            info!("Finished training, final loss {:.6}", last);
        }
        Ok(history)
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;

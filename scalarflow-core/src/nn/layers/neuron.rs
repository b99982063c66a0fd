use crate::error::ScalarFlowError;
use crate::nn::init;
use crate::nn::layers::Activation;
use crate::nn::module::{Module, Output};
use crate::value::Value;
use rand::Rng;

/// A single unit computing `activation(Σ w_i · x_i + b)`.
///
/// Owns one weight per input and one bias. The parameters persist across
/// forward passes; each pass builds fresh intermediate nodes on top of them.
///
/// Cloning copies the parameter handles, not the nodes: a clone shares its
/// weights with the original, and training either one updates both.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a tanh neuron with weights drawn from `Uniform[-1, 1]` and a
    /// zero bias.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, rng: &mut R) -> Result<Self, ScalarFlowError> {
        Self::with_activation(n_inputs, Activation::Tanh, rng)
    }

    pub fn with_activation<R: Rng + ?Sized>(
        n_inputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarFlowError> {
        let weights = init::uniform(
            n_inputs,
            init::WEIGHT_INIT_LOW,
            init::WEIGHT_INIT_HIGH,
            "w",
            rng,
        )?;
        Ok(Neuron {
            weights,
            bias: init::zero("bias"),
            activation,
        })
    }

    /// Creates a tanh neuron with fixed parameters.
    pub fn from_weights(weights: &[f64], bias: f64) -> Self {
        Neuron {
            weights: weights
                .iter()
                .enumerate()
                .map(|(i, &w)| Value::with_label(w, format!("w{i}")))
                .collect(),
            bias: Value::with_label(bias, "bias"),
            activation: Activation::Tanh,
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Evaluates the neuron, returning its single output node.
    ///
    /// # Errors
    /// `ShapeMismatch` if `input.len() != self.n_inputs()`; no node is built.
    pub fn activate(&self, input: &[Value]) -> Result<Value, ScalarFlowError> {
        if input.len() != self.weights.len() {
            return Err(ScalarFlowError::shape_mismatch(
                self.weights.len(),
                input.len(),
                "Neuron::forward",
            ));
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.clone(), |acc, (w, x)| &acc + &(w * x));
        Ok(self.activation.apply(&pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Output, ScalarFlowError> {
        self.activate(input).map(Output::Scalar)
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{i}"), w.clone()))
            .collect();
        params.push(("bias".to_string(), self.bias.clone()));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;

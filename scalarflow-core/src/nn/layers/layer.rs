use crate::error::ScalarFlowError;
use crate::nn::layers::{Activation, Neuron};
use crate::nn::module::{Module, Output};
use crate::value::Value;
use rand::Rng;

/// A row of neurons all reading the same input.
///
/// Cloning copies the parameter handles, not the nodes: a clone shares its
/// weights with the original, and training either one updates both.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    /// Creates `n_outputs` tanh neurons, each reading `n_inputs` values.
    ///
    /// # Errors
    /// `ConfigurationError` if `n_outputs` is zero.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        rng: &mut R,
    ) -> Result<Self, ScalarFlowError> {
        Self::with_activation(n_inputs, n_outputs, Activation::Tanh, rng)
    }

    pub fn with_activation<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarFlowError> {
        if n_outputs == 0 {
            return Err(ScalarFlowError::ConfigurationError(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..n_outputs)
            .map(|_| Neuron::with_activation(n_inputs, activation, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, n_inputs })
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `ConfigurationError` if `neurons` is empty, `ShapeMismatch` if the
    /// neurons disagree on their input arity.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarFlowError> {
        let n_inputs = match neurons.first() {
            Some(first) => first.n_inputs(),
            None => {
                return Err(ScalarFlowError::ConfigurationError(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        if let Some(odd) = neurons.iter().find(|n| n.n_inputs() != n_inputs) {
            return Err(ScalarFlowError::shape_mismatch(
                n_inputs,
                odd.n_inputs(),
                "Layer::from_neurons",
            ));
        }
        Ok(Layer { neurons, n_inputs })
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// Applies every neuron to the same input. A width-one layer yields
    /// `Output::Scalar`.
    fn forward(&self, input: &[Value]) -> Result<Output, ScalarFlowError> {
        if input.len() != self.n_inputs {
            return Err(ScalarFlowError::shape_mismatch(
                self.n_inputs,
                input.len(),
                "Layer::forward",
            ));
        }
        let outputs = self
            .neurons
            .iter()
            .map(|neuron| neuron.activate(input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Output::from_values(outputs))
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(Module::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neurons.{i}.{name}"), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;

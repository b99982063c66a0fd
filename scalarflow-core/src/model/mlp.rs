use crate::error::ScalarFlowError;
use crate::nn::layers::Layer;
use crate::nn::module::{Module, Output};
use crate::value::{values, Value};
use log::debug;
use rand::Rng;

/// A multi-layer perceptron: layers applied in order, each consuming the
/// previous layer's output.
///
/// Cloning copies the parameter handles, not the nodes: a clone shares its
/// weights with the original, and training either one updates both.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds `layer_sizes.len()` tanh layers, the first reading `n_inputs`
    /// values.
    ///
    /// # Errors
    /// `ConfigurationError` if `layer_sizes` is empty or any width is zero.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarFlowError> {
        if layer_sizes.is_empty() {
            return Err(ScalarFlowError::ConfigurationError(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_inputs;
        for &width in layer_sizes {
            layers.push(Layer::new(fan_in, width, rng)?);
            fan_in = width;
        }
        let mlp = Mlp { layers };
        debug!(
            "Built MLP {} -> {:?} with {} parameters",
            n_inputs,
            layer_sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Chains existing layers.
    ///
    /// # Errors
    /// `ConfigurationError` if `layers` is empty, `ShapeMismatch` if a layer's
    /// input arity differs from the previous layer's width.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarFlowError> {
        if layers.is_empty() {
            return Err(ScalarFlowError::ConfigurationError(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[1].n_inputs() != pair[0].n_outputs() {
                return Err(ScalarFlowError::shape_mismatch(
                    pair[0].n_outputs(),
                    pair[1].n_inputs(),
                    "Mlp::from_layers",
                ));
            }
        }
        Ok(Mlp { layers })
    }

    pub fn n_inputs(&self) -> usize {
        self.layers.first().map_or(0, Layer::n_inputs)
    }

    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, Layer::n_outputs)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Evaluates the model on plain numbers and returns the output data.
    /// The graph built along the way is dropped before returning.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>, ScalarFlowError> {
        Ok(self.forward(&values(input))?.data())
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Output, ScalarFlowError> {
        if input.len() != self.n_inputs() {
            return Err(ScalarFlowError::shape_mismatch(
                self.n_inputs(),
                input.len(),
                "Mlp::forward",
            ));
        }
        let mut current = Output::Vector(input.to_vec());
        for layer in &self.layers {
            current = layer.forward(current.as_slice())?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(Module::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{i}.{name}"), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;

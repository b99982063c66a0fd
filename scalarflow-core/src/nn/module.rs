use crate::error::ScalarFlowError;
use crate::value::Value;
use std::fmt::Debug;

/// Result of a forward pass.
///
/// Width-one outputs are reported as `Scalar` so they chain straight into a
/// loss; wider outputs are `Vector`.
#[derive(Debug, Clone)]
pub enum Output {
    Scalar(Value),
    Vector(Vec<Value>),
}

impl Output {
    /// Wraps `values`, collapsing a single value into `Output::Scalar`.
    pub fn from_values(mut values: Vec<Value>) -> Self {
        if values.len() == 1 {
            Output::Scalar(values.remove(0))
        } else {
            Output::Vector(values)
        }
    }

    /// Views the output as a slice, whatever its variant, so it can feed the
    /// next layer.
    pub fn as_slice(&self) -> &[Value] {
        match self {
            Output::Scalar(value) => std::slice::from_ref(value),
            Output::Vector(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn into_values(self) -> Vec<Value> {
        match self {
            Output::Scalar(value) => vec![value],
            Output::Vector(values) => values,
        }
    }

    /// Returns the single value of a width-one output.
    ///
    /// # Errors
    /// `ShapeMismatch` if the output does not hold exactly one value.
    pub fn into_scalar(self) -> Result<Value, ScalarFlowError> {
        match self {
            Output::Scalar(value) => Ok(value),
            Output::Vector(values) => Err(ScalarFlowError::shape_mismatch(
                1,
                values.len(),
                "Output::into_scalar",
            )),
        }
    }

    /// Forward results as plain numbers.
    pub fn data(&self) -> Vec<f64> {
        self.as_slice().iter().map(Value::data).collect()
    }
}

/// A component that owns trainable scalar nodes and can evaluate itself.
///
/// Parameters are shared handles: the `Value`s returned by
/// [`Module::parameters`] are the very nodes the module uses, so updating
/// their data or reading their gradient acts on the model.
pub trait Module: Debug {
    /// Evaluates the module on `input`.
    ///
    /// # Errors
    /// `ShapeMismatch` if `input.len()` differs from the module's input arity.
    fn forward(&self, input: &[Value]) -> Result<Output, ScalarFlowError>;

    /// All trainable parameters, flattened in a stable order (including those
    /// of owned sub-modules).
    fn parameters(&self) -> Vec<Value>;

    /// Parameters paired with dotted hierarchical names
    /// (e.g. `layers.0.neurons.1.w0`), in the same order as `parameters()`.
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to exactly zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

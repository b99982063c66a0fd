use scalarflow_core::{values, Value};

/// One supervised example: an input vector and its scalar target.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub target: f64,
}

impl Sample {
    pub fn new(inputs: impl Into<Vec<f64>>, target: f64) -> Self {
        Sample {
            inputs: inputs.into(),
            target,
        }
    }

    /// Fresh leaf nodes for the inputs, ready for a forward pass.
    pub fn input_values(&self) -> Vec<Value> {
        values(&self.inputs)
    }

    /// The target as a constant node.
    pub fn target_value(&self) -> Value {
        Value::constant(self.target)
    }
}

use crate::value::Value;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    /// No non-linearity; the pre-activation is returned unchanged.
    Linear,
}

impl Activation {
    pub fn apply(&self, pre_activation: &Value) -> Value {
        match self {
            Activation::Tanh => pre_activation.tanh(),
            Activation::Relu => pre_activation.relu(),
            Activation::Linear => pre_activation.clone(),
        }
    }
}

use std::fmt;

/// Tag recording how a node was produced, plus any operation parameter.
///
/// Subtraction, negation and division are composed from these and never
/// appear as tags of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input, parameter or promoted literal. No dependencies.
    Leaf,
    Add,
    Mul,
    /// Power with a fixed real exponent that is not itself a node.
    Pow(f64),
    Tanh,
    Relu,
    Exp,
}

impl Op {
    /// Number of dependencies a node with this tag holds.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow(_) | Op::Tanh | Op::Relu | Op::Exp => 1,
        }
    }

    /// Computes the forward result from the dependencies' data.
    ///
    /// `inputs` must hold exactly [`Op::arity`] values.
    pub fn forward(&self, inputs: &[f64]) -> f64 {
        debug_assert_eq!(inputs.len(), self.arity(), "forward arity for {self}");
        match *self {
            Op::Leaf => 0.0,
            Op::Add => inputs[0] + inputs[1],
            Op::Mul => inputs[0] * inputs[1],
            Op::Pow(k) => inputs[0].powf(k),
            Op::Tanh => inputs[0].tanh(),
            Op::Relu => inputs[0].max(0.0),
            Op::Exp => inputs[0].exp(),
        }
    }

    /// Returns d(output)/d(input_i) for each dependency, in dependency order.
    ///
    /// The backward engine multiplies each entry by the node's upstream
    /// gradient and accumulates the product into the matching dependency.
    pub fn local_gradients(&self, inputs: &[f64], output: f64) -> Vec<f64> {
        debug_assert_eq!(inputs.len(), self.arity(), "backward arity for {self}");
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add => vec![1.0, 1.0],
            Op::Mul => vec![inputs[1], inputs[0]],
            Op::Pow(k) => vec![k * inputs[0].powf(k - 1.0)],
            Op::Tanh => vec![1.0 - output * output],
            Op::Relu => vec![if inputs[0] > 0.0 { 1.0 } else { 0.0 }],
            Op::Exp => vec![output],
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, "leaf"),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow(k) => write!(f, "**{k}"),
            Op::Tanh => write!(f, "tanh"),
            Op::Relu => write!(f, "relu"),
            Op::Exp => write!(f, "exp"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Op;
    use approx::assert_relative_eq;

    #[test]
    fn test_arity() {
        assert_eq!(Op::Leaf.arity(), 0);
        assert_eq!(Op::Add.arity(), 2);
        assert_eq!(Op::Mul.arity(), 2);
        assert_eq!(Op::Pow(3.0).arity(), 1);
        assert_eq!(Op::Tanh.arity(), 1);
    }

    #[test]
    fn test_mul_rule_swaps_operands() {
        assert_eq!(Op::Mul.local_gradients(&[2.0, 5.0], 10.0), vec![5.0, 2.0]);
    }

    #[test]
    fn test_pow_rule() {
        let grads = Op::Pow(3.0).local_gradients(&[2.0], 8.0);
        assert_relative_eq!(grads[0], 12.0);
    }

    #[test]
    fn test_tanh_rule_uses_output() {
        let out = Op::Tanh.forward(&[0.5]);
        let grads = Op::Tanh.local_gradients(&[0.5], out);
        assert_relative_eq!(grads[0], 1.0 - 0.5f64.tanh().powi(2), epsilon = 1e-12);
    }

    #[test]
    fn test_relu_rule_at_zero_is_zero() {
        assert_eq!(Op::Relu.local_gradients(&[0.0], 0.0), vec![0.0]);
        assert_eq!(Op::Relu.local_gradients(&[0.3], 0.3), vec![1.0]);
    }

    #[test]
    fn test_fractional_power_of_negative_base_is_nan() {
        assert!(Op::Pow(0.5).forward(&[-4.0]).is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(Op::Pow(2.0).to_string(), "**2");
        assert_eq!(Op::Tanh.to_string(), "tanh");
        assert_eq!(Op::Add.to_string(), "+");
    }
}

use super::Value;
use crate::autograd::Op;

impl Value {
    /// Builds a new node for `op` over `dependencies`, computing its forward
    /// result from the dependencies' current data.
    pub(crate) fn apply(op: Op, dependencies: Vec<Value>) -> Value {
        let inputs: Vec<f64> = dependencies.iter().map(Value::data).collect();
        let data = op.forward(&inputs);
        Value::from_op(data, op, dependencies)
    }

    /// `self + other`. Local gradients are 1 and 1.
    pub fn add(&self, other: &Value) -> Value {
        Value::apply(Op::Add, vec![self.clone(), other.clone()])
    }

    /// `self * other`. Local gradients are `other.data` and `self.data`.
    pub fn mul(&self, other: &Value) -> Value {
        Value::apply(Op::Mul, vec![self.clone(), other.clone()])
    }

    /// `self^exponent` for a fixed real exponent.
    ///
    /// A fractional exponent on a negative base yields NaN, which then flows
    /// through the rest of the graph unchanged.
    pub fn pow(&self, exponent: f64) -> Value {
        Value::apply(Op::Pow(exponent), vec![self.clone()])
    }

    /// Hyperbolic tangent. Local gradient is `1 - tanh(x)^2`.
    pub fn tanh(&self) -> Value {
        Value::apply(Op::Tanh, vec![self.clone()])
    }

    /// `max(0, self)`. Local gradient is 1 if `self > 0`, else 0.
    pub fn relu(&self) -> Value {
        Value::apply(Op::Relu, vec![self.clone()])
    }

    pub fn exp(&self) -> Value {
        Value::apply(Op::Exp, vec![self.clone()])
    }

    /// `-self`, built as `self * -1`.
    pub fn neg(&self) -> Value {
        self.mul(&Value::constant(-1.0))
    }

    /// `self - other`, built as `self + (-1 * other)`.
    pub fn sub(&self, other: &Value) -> Value {
        self.add(&other.neg())
    }

    /// `self / other`, built as `self * other^-1`.
    pub fn div(&self, other: &Value) -> Value {
        self.mul(&other.pow(-1.0))
    }
}

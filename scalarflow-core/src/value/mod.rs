//! The scalar node of the computation graph.
//!
//! A [`Value`] is a shared handle (`Rc<RefCell<_>>`) to a node holding its
//! forward result, its accumulated gradient and the record of how it was
//! produced. Cloning a `Value` shares the node, which is how one weight fans
//! out into many arithmetic nodes during a forward pass.

mod autograd_methods;
pub mod create;
mod debug;
mod ops;
mod traits;

pub use create::values;

use crate::autograd::Op;
use std::cell::RefCell;
use std::rc::Rc;

/// Identity of a node, used to deduplicate shared dependencies.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Internal node state.
pub(crate) struct ValueData {
    pub(crate) data: f64,
    /// d(root)/d(this node); only ever accumulated, reset, or seeded.
    pub(crate) grad: f64,
    pub(crate) op: Op,
    /// Fixed at creation. Always a fresh allocation, even when empty.
    pub(crate) dependencies: Vec<Value>,
    pub(crate) label: Option<String>,
}

/// Handle to a scalar node in the computation graph.
#[derive(Clone)]
pub struct Value {
    pub(crate) node: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates an unlabelled leaf node with a zero gradient.
    pub fn new(data: f64) -> Self {
        Self::build(data, Op::Leaf, Vec::new(), None)
    }

    /// Creates a leaf node carrying a debug label.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        Self::build(data, Op::Leaf, Vec::new(), Some(label.into()))
    }

    /// Creates the constant leaf a numeric literal is promoted to.
    ///
    /// The literal's text becomes the label, e.g. `'-1'`.
    pub fn constant(data: f64) -> Self {
        Self::build(data, Op::Leaf, Vec::new(), Some(format!("'{data}'")))
    }

    /// Creates an operation node over `dependencies`.
    pub(crate) fn from_op(data: f64, op: Op, dependencies: Vec<Value>) -> Self {
        Self::build(data, op, dependencies, None)
    }

    fn build(data: f64, op: Op, dependencies: Vec<Value>, label: Option<String>) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData {
                data,
                grad: 0.0,
                op,
                dependencies,
                label,
            })),
        }
    }

    /// Forward value.
    pub fn data(&self) -> f64 {
        self.node.borrow().data
    }

    /// Gradient of the last backward root with respect to this node.
    pub fn grad(&self) -> f64 {
        self.node.borrow().grad
    }

    pub fn op(&self) -> Op {
        self.node.borrow().op
    }

    pub fn label(&self) -> Option<String> {
        self.node.borrow().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.node.borrow_mut().label = Some(label.into());
    }

    /// Returns handles to the nodes this one was computed from, in order.
    pub fn dependencies(&self) -> Vec<Value> {
        self.node.borrow().dependencies.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.node.borrow().dependencies.is_empty()
    }

    /// Overwrites the forward value in place.
    ///
    /// Used by optimizers to update persistent parameters between training
    /// iterations; nodes already built from this one keep their old results.
    pub fn set_data(&self, data: f64) {
        self.node.borrow_mut().data = data;
    }

    /// Resets the accumulated gradient to exactly zero.
    pub fn zero_grad(&self) {
        self.node.borrow_mut().grad = 0.0;
    }

    /// Returns `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.node)
    }

    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.node.borrow_mut().grad += delta;
    }

    /// Seeds the gradient of a backward root.
    pub(crate) fn seed_grad(&self, seed: f64) {
        self.node.borrow_mut().grad = seed;
    }

    /// Rescales the gradient; reserved for gradient clipping between the
    /// backward pass and the optimizer step.
    pub(crate) fn scale_grad(&self, factor: f64) {
        self.node.borrow_mut().grad *= factor;
    }

    pub(crate) fn clamp_grad(&self, bound: f64) {
        let mut node = self.node.borrow_mut();
        node.grad = node.grad.clamp(-bound, bound);
    }
}

impl Drop for ValueData {
    // Unlinks uniquely owned dependencies with a work list so that dropping a
    // long chain does not recurse once per node.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.dependencies);
        while let Some(dep) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(dep.node) {
                let mut data = cell.into_inner();
                pending.append(&mut data.dependencies);
            }
        }
    }
}

use super::Value;
use crate::autograd::graph::topological_sort;
use log::{debug, trace};

impl Value {
    /// Computes d(self)/d(node) for every node reachable from `self`.
    ///
    /// Seeds this node's gradient with 1.0, then applies each reachable
    /// node's local rule exactly once, in reverse topological order, so a node
    /// only propagates after every consumer has accumulated into it.
    ///
    /// Gradients accumulate: leaves keep their previous totals until reset
    /// with [`Value::zero_grad`] (or a module's `zero_grad`). Intermediate
    /// nodes are reset at the start of every pass, so running `backward`
    /// twice on the same graph adds exactly one more copy of each leaf's
    /// gradient.
    pub fn backward(&self) {
        self.backward_with_grad(1.0);
    }

    /// Same as [`Value::backward`] with a caller-chosen seed gradient.
    pub fn backward_with_grad(&self, seed: f64) {
        let sorted = topological_sort(self);
        debug!("backward: {} nodes reachable from root", sorted.len());
        for node in sorted.iter().filter(|node| !node.is_leaf()) {
            node.zero_grad();
        }
        self.seed_grad(seed);
        for node in sorted.iter().rev() {
            node.propagate_to_dependencies();
        }
    }

    fn propagate_to_dependencies(&self) {
        let node = self.node.borrow();
        if node.dependencies.is_empty() {
            return;
        }
        let inputs: Vec<f64> = node.dependencies.iter().map(Value::data).collect();
        let local_grads = node.op.local_gradients(&inputs, node.data);
        trace!("propagating {} through {}", node.grad, node.op);
        for (dep, local_grad) in node.dependencies.iter().zip(local_grads) {
            dep.accumulate_grad(local_grad * node.grad);
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;

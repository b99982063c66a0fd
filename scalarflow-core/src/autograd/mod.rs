//! Reverse-mode differentiation over the scalar computation graph.
//!
//! Every non-leaf [`Value`](crate::Value) records an [`Op`] tag; the tag's
//! local derivative rule is dispatched centrally in [`Op::local_gradients`].
//! [`graph::topological_sort`] fixes the order in which those rules run so
//! that each node propagates only once its gradient is complete.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::topological_sort;

//! Optimizers for training scalar models.
//!
//! This module provides the `Optimizer` trait, plain stochastic gradient
//! descent, and helpers that clip gradients before an update.

pub mod grad_clipping;
pub mod optimizer_trait;
pub mod sgd;

pub use grad_clipping::{clip_grad_norm, clip_grad_value};
pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;

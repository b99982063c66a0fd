//! # scalarflow-core
//!
//! A reverse-mode automatic differentiation engine over individual scalar
//! values, plus the small neural-network pieces built on top of it
//! (`Neuron`, `Layer`, `Mlp`), a sum-of-squares loss and plain SGD.
//!
//! ```
//! use scalarflow_core::Value;
//!
//! let a = Value::new(3.0);
//! let b = Value::new(1.0);
//! let loss = (&a - &b).pow(2.0);
//! loss.backward();
//! assert_eq!(loss.data(), 4.0);
//! assert_eq!(a.grad(), 4.0);
//! assert_eq!(b.grad(), -4.0);
//! ```

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod optim;
pub mod value;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::ScalarFlowError;
pub use model::Mlp;
pub use nn::{Module, Output};
pub use value::{values, Value};

// Re-export traits required by public functions
pub use num_traits;

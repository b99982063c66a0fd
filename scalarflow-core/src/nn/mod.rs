//! Neural network building blocks over scalar nodes.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;

pub use layers::{Activation, Layer, Neuron};
pub use losses::{MSELoss, Reduction};
pub use module::{Module, Output};

// Layers built from scalar operations.

pub mod activation;
pub mod layer;
pub mod neuron;

// Re-export key layer structs
pub use activation::Activation;
pub use layer::Layer;
pub use neuron::Neuron;

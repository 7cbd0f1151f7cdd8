// src/nn/layers/mod.rs
// Fully-connected building blocks: a single neuron, a layer of neurons, a stack of layers.

pub mod layer;
pub mod mlp;
pub mod neuron;

// Re-export key layer structs
pub use layer::Layer;
pub use mlp::MLP;
pub use neuron::Neuron;

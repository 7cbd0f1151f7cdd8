// src/nn/mod.rs
// Neural-network building blocks on top of the scalar engine.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use layers::{Layer, Neuron, MLP};
pub use losses::{
    BCELoss, CategoricalCrossEntropyLoss, HingeLoss, HuberLoss, Loss, MAELoss, MSELoss, Reduction,
};
pub use module::Module;

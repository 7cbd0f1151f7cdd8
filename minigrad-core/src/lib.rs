//! # minigrad-core
//!
//! A scalar reverse-mode automatic differentiation engine with a small
//! neural-network toolkit on top.
//!
//! - [`value`]: the [`Value`] node type and its operator overloads.
//! - [`ops`]: differentiable primitives (arithmetic, activations, exp/ln, min/max).
//! - [`autograd`]: backward rules, topological ordering and gradient checking.
//! - [`nn`]: neurons, layers, multi-layer perceptrons and loss functions.
//! - [`optim`]: SGD, Adagrad, RMSProp and Adam.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;
pub(crate) mod value_data;

pub use error::MinigradError;
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;

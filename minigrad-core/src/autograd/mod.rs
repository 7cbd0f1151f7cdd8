//! # Reverse-mode differentiation (`autograd`)
//!
//! - [`BackwardOp`]: the closed set of local backward rules stored in each
//!   non-leaf node.
//! - [`graph`]: topological ordering and the gradient propagation loop
//!   driven by [`Value::backward`](crate::Value::backward).
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::BackwardOp;

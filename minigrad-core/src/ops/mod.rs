//! # Operation Registry (`ops`)
//!
//! Every differentiable primitive lives here, grouped by family. Each
//! operation is a pure function of node(s) to a newly allocated node:
//!
//! - **`_op` Functions:** `xxx_op` computes the forward value and installs the
//!   matching [`BackwardOp`](crate::autograd::BackwardOp) variant, with the
//!   scalars its local derivative needs captured at call time.
//! - **`Value` methods:** thin wrappers such as [`Value::tanh`](crate::Value::tanh)
//!   defined next to the `_op` they call.
//! - **Sugar:** negation, subtraction and division are compositions of
//!   multiply, add and power rather than separate rules.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, neg, sub, div.
//! - [`activation`]: tanh, sigmoid, relu, identity and the [`activation::Activation`] selector.
//! - [`math_elem`]: exp, ln.
//! - [`comparison`]: min, max and the derived abs.

pub mod activation;
pub mod arithmetic;
pub mod comparison;
pub mod math_elem;

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::ValueData;

/// Allocates the output node of an operation.
pub(crate) fn new_op_output(data: f64, grad_fn: BackwardOp) -> Value {
    Value::from_data(ValueData::from_op(data, grad_fn))
}

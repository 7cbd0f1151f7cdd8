// minigrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::ops::new_op_output;
use crate::value::Value;

/// Adds two nodes.
///
/// Backward: both operands receive the output gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    new_op_output(
        data,
        BackwardOp::Add {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;

// minigrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::ops::new_op_output;
use crate::value::Value;

/// Multiplies two nodes.
///
/// Backward: `a` receives `b.data * g`, `b` receives `a.data * g`, with both
/// data values captured now.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let lhs_data = a.data();
    let rhs_data = b.data();
    new_op_output(
        lhs_data * rhs_data,
        BackwardOp::Mul {
            lhs: a.clone(),
            rhs: b.clone(),
            lhs_data,
            rhs_data,
        },
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;

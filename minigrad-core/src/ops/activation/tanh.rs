use crate::autograd::BackwardOp;
use crate::ops::new_op_output;
use crate::value::Value;

/// Hyperbolic tangent.
///
/// Backward: `(1 - t^2) * g`, where `t` is the forward result.
pub fn tanh_op(input: &Value) -> Value {
    let output = input.data().tanh();
    new_op_output(
        output,
        BackwardOp::Tanh {
            input: input.clone(),
            output,
        },
    )
}

impl Value {
    /// Applies `tanh` to this node.
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

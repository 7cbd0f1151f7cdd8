use crate::autograd::BackwardOp;
use crate::ops::new_op_output;
use crate::value::Value;

/// Natural exponential `e^x`.
///
/// Backward: `e^x * g`, reusing the forward result.
pub fn exp_op(input: &Value) -> Value {
    let output = input.data().exp();
    new_op_output(
        output,
        BackwardOp::Exp {
            input: input.clone(),
            output,
        },
    )
}

impl Value {
    /// Applies `exp` to this node.
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

use crate::autograd::BackwardOp;
use crate::ops::new_op_output;
use crate::value::Value;

/// Logistic function `1 / (1 + e^-x)`.
///
/// Backward: `s * (1 - s) * g`, where `s` is the forward result.
pub fn sigmoid_op(input: &Value) -> Value {
    let output = 1.0 / (1.0 + (-input.data()).exp());
    new_op_output(
        output,
        BackwardOp::Sigmoid {
            input: input.clone(),
            output,
        },
    )
}

impl Value {
    /// Applies the logistic sigmoid to this node.
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}

use crate::autograd::BackwardOp;
use crate::ops::new_op_output;
use crate::value::Value;

/// Rectified Linear Unit: `ReLU(x) = max(x, 0)`.
///
/// Backward: the input receives `g` if its data was strictly positive,
/// otherwise nothing (the derivative at exactly `0` is taken as `0`).
pub fn relu_op(input: &Value) -> Value {
    let input_data = input.data();
    let data = if input_data > 0.0 { input_data } else { 0.0 };
    new_op_output(
        data,
        BackwardOp::Relu {
            input: input.clone(),
            input_data,
        },
    )
}

impl Value {
    /// Applies ReLU to this node.
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

use crate::autograd::BackwardOp;
use crate::ops::new_op_output;
use crate::value::Value;

/// Creates a new node with the same data as `input`.
///
/// Backward: passes `g` through unchanged.
pub fn identity_op(input: &Value) -> Value {
    new_op_output(
        input.data(),
        BackwardOp::Identity {
            input: input.clone(),
        },
    )
}

impl Value {
    /// Applies the identity (linear) activation, still allocating a node.
    pub fn identity(&self) -> Value {
        identity_op(self)
    }
}

use crate::autograd::BackwardOp;
use crate::ops::new_op_output;
use crate::value::Value;

/// Selects the larger of two nodes.
///
/// Backward: the strictly larger operand receives `g`; on a tie neither does.
pub fn max_op(a: &Value, b: &Value) -> Value {
    let lhs_data = a.data();
    let rhs_data = b.data();
    // NaN on the left is kept.
    let data = if rhs_data > lhs_data { rhs_data } else { lhs_data };
    new_op_output(
        data,
        BackwardOp::Max {
            lhs: a.clone(),
            rhs: b.clone(),
            lhs_data,
            rhs_data,
        },
    )
}

impl Value {
    /// Selects the larger of this node and another node or constant.
    pub fn max(&self, other: impl Into<Value>) -> Value {
        max_op(self, &other.into())
    }
}

use crate::autograd::BackwardOp;
use crate::ops::new_op_output;
use crate::value::Value;

/// Selects the smaller of two nodes.
///
/// Backward: the strictly smaller operand receives `g`; on a tie neither does.
pub fn min_op(a: &Value, b: &Value) -> Value {
    let lhs_data = a.data();
    let rhs_data = b.data();
    // NaN on the left is kept.
    let data = if rhs_data < lhs_data { rhs_data } else { lhs_data };
    new_op_output(
        data,
        BackwardOp::Min {
            lhs: a.clone(),
            rhs: b.clone(),
            lhs_data,
            rhs_data,
        },
    )
}

impl Value {
    /// Selects the smaller of this node and another node or constant.
    pub fn min(&self, other: impl Into<Value>) -> Value {
        min_op(self, &other.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::testing::{check_grad_near, check_value_near};
    use crate::value::Value;

    #[test]
    fn test_min_routes_to_smaller() {
        let a = Value::new(1.0);
        let b = Value::new(4.0);
        let m = a.min(&b);
        check_value_near(&m, 1.0, 1e-12);
        m.backward();
        check_grad_near(&a, 1.0, 1e-12);
        check_grad_near(&b, 0.0, 1e-12);
    }

    #[test]
    fn test_min_tie_routes_nothing() {
        let a = Value::new(3.0);
        let b = Value::new(3.0);
        let m = a.min(&b);
        check_value_near(&m, 3.0, 1e-12);
        m.backward();
        check_grad_near(&a, 0.0, 1e-12);
        check_grad_near(&b, 0.0, 1e-12);
    }

    #[test]
    fn test_min_keeps_nan_on_the_left() {
        let a = Value::new(f64::NAN);
        let m = a.min(0.5);
        assert!(m.data().is_nan());
        m.backward();
        check_grad_near(&a, 0.0, 1e-12);
    }

    #[test]
    fn test_min_with_constant_clamps() {
        let a = Value::new(0.9999);
        let clamped = a.min(0.5);
        check_value_near(&clamped, 0.5, 1e-12);
        clamped.backward();
        check_grad_near(&a, 0.0, 1e-12);
    }
}

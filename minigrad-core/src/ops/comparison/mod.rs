//! Piecewise selections between two nodes.
//!
//! On a tie neither operand receives gradient. `abs` is built on `max`, so
//! `abs` has zero gradient at `0`.

pub mod max;
pub mod min;

pub use max::max_op;
pub use min::min_op;

use crate::value::Value;

impl Value {
    /// Absolute value, built as `max(x, -x)`.
    pub fn abs(&self) -> Value {
        max_op(self, &-self)
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::testing::{check_grad_near, check_value_near};
    use crate::value::Value;

    #[test]
    fn test_abs_negative() {
        let x = Value::new(-3.0);
        let y = x.abs();
        check_value_near(&y, 3.0, 1e-12);
        y.backward();
        check_grad_near(&x, -1.0, 1e-12);
    }

    #[test]
    fn test_abs_positive() {
        let x = Value::new(2.0);
        let y = x.abs();
        y.backward();
        check_grad_near(&x, 1.0, 1e-12);
    }

    #[test]
    fn test_abs_at_zero_has_no_grad() {
        let x = Value::new(0.0);
        let y = x.abs();
        check_value_near(&y, 0.0, 1e-12);
        y.backward();
        check_grad_near(&x, 0.0, 1e-12);
    }
}

// minigrad-core/src/ops/arithmetic/div.rs

use super::{mul_op, pow_op};
use crate::value::Value;

/// Divides `a` by `b`, expressed as `a * b^-1`.
///
/// Division by a zero-valued node follows IEEE arithmetic: the forward value
/// becomes infinite or NaN and no error is raised.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;

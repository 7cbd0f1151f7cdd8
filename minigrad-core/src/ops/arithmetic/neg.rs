// minigrad-core/src/ops/arithmetic/neg.rs

use super::mul_op;
use crate::value::Value;

/// Negates a node, expressed as multiplication by the constant `-1`.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;

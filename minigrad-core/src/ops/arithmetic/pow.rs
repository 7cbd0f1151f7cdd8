// minigrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::MinigradError;
use crate::ops::new_op_output;
use crate::value::Value;
use num_traits::ToPrimitive;

/// Raises `base` to a constant real `exponent`.
///
/// Backward: `base` receives `exponent * base.data^(exponent - 1) * g`.
/// The exponent is a plain number, never a node, so it is never differentiated.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let base_data = base.data();
    new_op_output(
        base_data.powf(exponent),
        BackwardOp::Pow {
            base: base.clone(),
            base_data,
            exponent,
        },
    )
}

impl Value {
    /// Raises this node to a constant power.
    ///
    /// Accepts any primitive numeric exponent (`2`, `-1`, `0.5f32`, ...).
    ///
    /// # Errors
    /// [`MinigradError::InvalidExponent`] if the exponent cannot be represented
    /// as a finite `f64`.
    pub fn pow<E: ToPrimitive>(&self, exponent: E) -> Result<Value, MinigradError> {
        let exponent = exponent
            .to_f64()
            .ok_or_else(|| MinigradError::InvalidExponent {
                operation: "pow".to_string(),
                reason: "exponent is not representable as f64".to_string(),
            })?;
        if !exponent.is_finite() {
            return Err(MinigradError::InvalidExponent {
                operation: "pow".to_string(),
                reason: format!("exponent must be finite, got {}", exponent),
            });
        }
        Ok(pow_op(self, exponent))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;

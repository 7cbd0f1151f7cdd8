use crate::autograd::BackwardOp;
use crate::error::MinigradError;
use crate::ops::new_op_output;
use crate::value::Value;

/// Natural logarithm.
///
/// Backward: `g / x`.
///
/// # Errors
/// [`MinigradError::DomainError`] if `input.data <= 0`. No node is created.
pub fn ln_op(input: &Value) -> Result<Value, MinigradError> {
    let input_data = input.data();
    if !(input_data > 0.0) {
        return Err(MinigradError::DomainError {
            operation: "log".to_string(),
            value: input_data,
        });
    }
    Ok(new_op_output(
        input_data.ln(),
        BackwardOp::Ln {
            input: input.clone(),
            input_data,
        },
    ))
}

impl Value {
    /// Natural logarithm of this node. Fails for non-positive data.
    pub fn log(&self) -> Result<Value, MinigradError> {
        ln_op(self)
    }
}

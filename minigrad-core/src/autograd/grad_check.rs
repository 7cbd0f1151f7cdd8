use crate::error::MinigradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MinigradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {output_plus:?}, f(x-eps): {output_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        output_plus: f64,
        output_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Invalid gradient check configuration: {0}")]
    InvalidConfiguration(String),
}

// Map MinigradError to GradCheckError::ForwardPassError
impl From<MinigradError> for GradCheckError {
    fn from(err: MinigradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds a fresh graph from leaf nodes holding `inputs`. It is called
/// once for the analytic pass (followed by `backward()`) and twice per input
/// with that input shifted by `±epsilon`.
///
/// A gradient passes if it is within `abs_tolerance` or within
/// `rel_tolerance` relative difference of the numerical estimate.
///
/// # Returns
/// The analytic gradients, one per input, on success.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tolerance: f64,
    rel_tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MinigradError>,
{
    if !(epsilon > 0.0) {
        return Err(GradCheckError::InvalidConfiguration(format!(
            "epsilon must be positive, got {}",
            epsilon
        )));
    }

    // --- 1. Analytic pass ---
    let leaves = Value::from_slice(inputs);
    let output = func(&leaves)?;
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- 2. Numerical pass, one input at a time ---
    let evaluate = |shifted: &[f64]| -> Result<f64, GradCheckError> {
        Ok(func(&Value::from_slice(shifted))?.data())
    };

    let mut shifted = inputs.to_vec();
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        shifted[i] = inputs[i] + epsilon;
        let output_plus = evaluate(&shifted)?;
        shifted[i] = inputs[i] - epsilon;
        let output_minus = evaluate(&shifted)?;
        shifted[i] = inputs[i];

        let numerical_grad = (output_plus - output_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                output_plus,
                output_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = abs_tolerance,
            max_relative = rel_tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(analytical_grads)
}

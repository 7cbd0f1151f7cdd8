use super::{Loss, Reduction};
use crate::error::MinigradError;
use crate::value::Value;

/// Computes the Mean Squared Error (MSE) loss between targets and predictions.
///
/// Per sample: `(pred - actual)^2`. With `Reduction::Sum` this is the plain
/// sum of squared errors used by the sample training loop.
///
/// # Fields
/// * `reduction`: Specifies the type of reduction to apply to the output: `Mean` or `Sum`.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    /// Creates the loss from a reduction name (`"mean"` or `"sum"`).
    pub fn new(reduction: &str) -> Result<Self, MinigradError> {
        Ok(Self::with_reduction(reduction.parse()?))
    }

    pub fn with_reduction(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }
}

impl Loss for MSELoss {
    type Target = f64;
    type Prediction = Value;

    fn reduction(&self) -> Reduction {
        self.reduction
    }

    fn sample_losses(&self, actuals: &[f64], preds: &[Value]) -> Result<Vec<Value>, MinigradError> {
        preds
            .iter()
            .zip(actuals)
            .map(|(pred, &actual)| (pred - actual).pow(2))
            .collect()
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;

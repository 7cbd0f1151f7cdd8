use super::{Loss, Reduction};
use crate::error::MinigradError;
use crate::value::Value;

/// Mean Absolute Error: `|pred - actual|` per sample.
#[derive(Debug, Clone, Default)]
pub struct MAELoss {
    reduction: Reduction,
}

impl MAELoss {
    /// Creates the loss from a reduction name (`"mean"` or `"sum"`).
    pub fn new(reduction: &str) -> Result<Self, MinigradError> {
        Ok(Self::with_reduction(reduction.parse()?))
    }

    pub fn with_reduction(reduction: Reduction) -> Self {
        MAELoss { reduction }
    }
}

impl Loss for MAELoss {
    type Target = f64;
    type Prediction = Value;

    fn reduction(&self) -> Reduction {
        self.reduction
    }

    fn sample_losses(&self, actuals: &[f64], preds: &[Value]) -> Result<Vec<Value>, MinigradError> {
        Ok(preds
            .iter()
            .zip(actuals)
            .map(|(pred, &actual)| (pred - actual).abs())
            .collect())
    }
}

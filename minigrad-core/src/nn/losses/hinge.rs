use super::{Loss, Reduction};
use crate::error::MinigradError;
use crate::value::Value;

/// Hinge loss for `±1` targets: `max(0, 1 - actual * pred)` per sample.
#[derive(Debug, Clone, Default)]
pub struct HingeLoss {
    reduction: Reduction,
}

impl HingeLoss {
    /// Creates the loss from a reduction name (`"mean"` or `"sum"`).
    pub fn new(reduction: &str) -> Result<Self, MinigradError> {
        Ok(Self::with_reduction(reduction.parse()?))
    }

    pub fn with_reduction(reduction: Reduction) -> Self {
        HingeLoss { reduction }
    }
}

impl Loss for HingeLoss {
    type Target = f64;
    type Prediction = Value;

    fn reduction(&self) -> Reduction {
        self.reduction
    }

    fn sample_losses(&self, actuals: &[f64], preds: &[Value]) -> Result<Vec<Value>, MinigradError> {
        Ok(preds
            .iter()
            .zip(actuals)
            .map(|(pred, &actual)| (1.0 - actual * pred).relu())
            .collect())
    }
}

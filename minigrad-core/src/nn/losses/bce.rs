use super::{clamp_probability, Loss, Reduction};
use crate::error::MinigradError;
use crate::value::Value;

/// Binary cross-entropy for predictions already in `[0, 1]` (e.g. sigmoid outputs).
///
/// Per sample: `-y * ln(p) - (1 - y) * ln(1 - p)`, with both `p` and `1 - p`
/// clamped into `[eps, 1 - eps]` first so `log` never sees `0`.
#[derive(Debug, Clone, Default)]
pub struct BCELoss {
    reduction: Reduction,
}

impl BCELoss {
    pub fn new(reduction: &str) -> Result<Self, MinigradError> {
        Ok(BCELoss {
            reduction: reduction.parse()?,
        })
    }

    pub fn with_reduction(reduction: Reduction) -> Self {
        BCELoss { reduction }
    }
}

impl Loss for BCELoss {
    type Target = f64;
    type Prediction = Value;

    fn reduction(&self) -> Reduction {
        self.reduction
    }

    fn sample_losses(&self, actuals: &[f64], preds: &[Value]) -> Result<Vec<Value>, MinigradError> {
        let mut losses = Vec::with_capacity(preds.len());
        for (pred, &actual) in preds.iter().zip(actuals) {
            let positive = clamp_probability(pred).log()?;
            let negative = clamp_probability(&(1.0 - pred)).log()?;
            losses.push(-actual * positive - (1.0 - actual) * negative);
        }
        Ok(losses)
    }
}

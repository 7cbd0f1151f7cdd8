use super::{check_lengths, clamp_probability, Loss, Reduction};
use crate::error::MinigradError;
use crate::value::Value;

/// Categorical cross-entropy over raw class scores.
///
/// Each prediction is a vector of logits. It is turned into probabilities
/// with a softmax built from `exp` and division nodes, then scored against a
/// target distribution (usually one-hot) as `sum_k(-y_k * ln(p_k))`, with each
/// `p_k` clamped into `[eps, 1 - eps]`.
#[derive(Debug, Clone, Default)]
pub struct CategoricalCrossEntropyLoss {
    reduction: Reduction,
}

impl CategoricalCrossEntropyLoss {
    pub fn new(reduction: &str) -> Result<Self, MinigradError> {
        Ok(CategoricalCrossEntropyLoss {
            reduction: reduction.parse()?,
        })
    }

    pub fn with_reduction(reduction: Reduction) -> Self {
        CategoricalCrossEntropyLoss { reduction }
    }
}

/// Softmax of one sample's scores.
pub fn softmax(logits: &[Value]) -> Vec<Value> {
    let exps: Vec<Value> = logits.iter().map(Value::exp).collect();
    let normalizer: Value = exps.iter().sum();
    exps.iter().map(|e| e / &normalizer).collect()
}

impl Loss for CategoricalCrossEntropyLoss {
    type Target = Vec<f64>;
    type Prediction = Vec<Value>;

    fn reduction(&self) -> Reduction {
        self.reduction
    }

    fn sample_losses(
        &self,
        actuals: &[Vec<f64>],
        preds: &[Vec<Value>],
    ) -> Result<Vec<Value>, MinigradError> {
        let mut losses = Vec::with_capacity(preds.len());
        for (logits, targets) in preds.iter().zip(actuals) {
            check_lengths(targets.len(), logits.len(), "CategoricalCrossEntropyLoss")?;
            let mut terms = Vec::with_capacity(logits.len());
            for (p, &y) in softmax(logits).iter().zip(targets) {
                terms.push(-y * clamp_probability(p).log()?);
            }
            losses.push(terms.into_iter().sum());
        }
        Ok(losses)
    }
}

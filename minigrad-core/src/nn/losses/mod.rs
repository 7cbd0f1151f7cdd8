//! # Loss Functions
//!
//! Every loss turns paired targets and predictions into one scalar node:
//! [`Loss::sample_losses`] builds one node per sample, then the configured
//! [`Reduction`] folds them.

pub mod bce;
pub mod cross_entropy;
pub mod hinge;
pub mod huber;
pub mod mae;
pub mod mse;
pub mod reduction;

pub use bce::BCELoss;
pub use cross_entropy::CategoricalCrossEntropyLoss;
pub use hinge::HingeLoss;
pub use huber::HuberLoss;
pub use mae::MAELoss;
pub use mse::MSELoss;
pub use reduction::Reduction;

use crate::error::MinigradError;
use crate::value::Value;

/// Lower/upper margin used to keep probabilities inside `(0, 1)` before `log`.
pub const PROBABILITY_EPSILON: f64 = 1e-11;

/// A loss over paired targets and predictions.
pub trait Loss: std::fmt::Debug {
    /// Ground-truth type of a single sample (`f64`, or `Vec<f64>` for class vectors).
    type Target;
    /// Prediction type of a single sample (`Value`, or `Vec<Value>`).
    type Prediction;

    fn reduction(&self) -> Reduction;

    /// One loss node per sample, in input order.
    ///
    /// Callers go through [`Loss::calculate`], which has already checked that
    /// both slices have the same length.
    fn sample_losses(
        &self,
        actuals: &[Self::Target],
        preds: &[Self::Prediction],
    ) -> Result<Vec<Value>, MinigradError>;

    /// Computes the reduced loss.
    ///
    /// # Errors
    /// `LengthMismatch` if `actuals` and `preds` differ in length, plus any
    /// error from the per-sample computation or the reduction.
    fn calculate(
        &self,
        actuals: &[Self::Target],
        preds: &[Self::Prediction],
    ) -> Result<Value, MinigradError> {
        check_lengths(actuals.len(), preds.len(), "Loss::calculate")?;
        let losses = self.sample_losses(actuals, preds)?;
        self.reduction().apply(&losses)
    }
}

pub(crate) fn check_lengths(
    expected: usize,
    actual: usize,
    operation: &str,
) -> Result<(), MinigradError> {
    if expected != actual {
        return Err(MinigradError::LengthMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Clamps a probability node into `[eps, 1 - eps]` with `min`/`max`, so
/// gradient flows only while the probability is strictly inside the range.
pub(crate) fn clamp_probability(p: &Value) -> Value {
    p.min(1.0 - PROBABILITY_EPSILON).max(PROBABILITY_EPSILON)
}

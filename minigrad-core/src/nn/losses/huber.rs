use super::{Loss, Reduction};
use crate::error::MinigradError;
use crate::value::Value;

/// Huber loss: quadratic for small errors, linear beyond `delta`.
///
/// With `e = |pred - actual|`, each sample contributes `0.5 * e^2` when
/// `e <= delta` and `delta * (e - 0.5 * delta)` otherwise. The branch is
/// chosen on the forward value; it does not itself carry gradient.
#[derive(Debug, Clone)]
pub struct HuberLoss {
    reduction: Reduction,
    delta: f64,
}

impl HuberLoss {
    pub const DEFAULT_DELTA: f64 = 1.0;

    /// Creates the loss from a reduction name and a threshold.
    ///
    /// # Errors
    /// `InvalidReduction` for an unknown name, `ConfigurationError` if `delta`
    /// is not a positive finite number.
    pub fn new(reduction: &str, delta: f64) -> Result<Self, MinigradError> {
        Self::with_reduction(reduction.parse()?, delta)
    }

    pub fn with_reduction(reduction: Reduction, delta: f64) -> Result<Self, MinigradError> {
        if !(delta > 0.0 && delta.is_finite()) {
            return Err(MinigradError::ConfigurationError(format!(
                "Huber delta must be positive and finite, got {}",
                delta
            )));
        }
        Ok(HuberLoss { reduction, delta })
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }
}

impl Default for HuberLoss {
    fn default() -> Self {
        HuberLoss {
            reduction: Reduction::Mean,
            delta: Self::DEFAULT_DELTA,
        }
    }
}

impl Loss for HuberLoss {
    type Target = f64;
    type Prediction = Value;

    fn reduction(&self) -> Reduction {
        self.reduction
    }

    fn sample_losses(&self, actuals: &[f64], preds: &[Value]) -> Result<Vec<Value>, MinigradError> {
        let delta = self.delta;
        preds
            .iter()
            .zip(actuals)
            .map(|(pred, &actual)| -> Result<Value, MinigradError> {
                let error = (pred - actual).abs();
                if error <= delta {
                    Ok(0.5 * error.pow(2)?)
                } else {
                    Ok(delta * (error - 0.5 * delta))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_huber_quadratic_region() -> Result<(), MinigradError> {
        let preds = Value::from_slice(&[1.5]);
        let loss = HuberLoss::default().calculate(&[1.0], &preds)?;
        assert_relative_eq!(loss.data(), 0.125);
        loss.backward();
        assert_relative_eq!(preds[0].grad(), 0.5);
        Ok(())
    }

    #[test]
    fn test_huber_linear_region() -> Result<(), MinigradError> {
        let preds = Value::from_slice(&[-3.0]);
        let loss = HuberLoss::new("sum", 2.0)?.calculate(&[1.0], &preds)?;
        // e = 4: 2 * (4 - 1)
        assert_relative_eq!(loss.data(), 6.0);
        loss.backward();
        assert_relative_eq!(preds[0].grad(), -2.0);
        Ok(())
    }

    #[test]
    fn test_huber_boundary_is_quadratic() -> Result<(), MinigradError> {
        let preds = Value::from_slice(&[2.0]);
        let loss = HuberLoss::default().calculate(&[1.0], &preds)?;
        assert_relative_eq!(loss.data(), 0.5);
        Ok(())
    }

    #[test]
    fn test_huber_rejects_bad_delta() {
        assert!(matches!(
            HuberLoss::new("mean", 0.0),
            Err(MinigradError::ConfigurationError(_))
        ));
        assert!(matches!(
            HuberLoss::new("max", 1.0),
            Err(MinigradError::InvalidReduction { .. })
        ));
    }
}

use crate::error::MinigradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::{validate_decay, validate_lr, DEFAULT_LR, DENOMINATOR_EPSILON};
use crate::value::Value;
use log::debug;

/// RMSProp: Adagrad with an exponential moving average instead of a sum.
///
/// ```text
/// s = gamma * s + (1 - gamma) * g^2
/// p -= lr * g / sqrt(s + 1e-6)
/// ```
#[derive(Debug)]
pub struct RmsPropOptimizer {
    params: Vec<Value>,
    lr: f64,
    gamma: f64,
    square_avg: Vec<f64>,
}

impl RmsPropOptimizer {
    pub const DEFAULT_GAMMA: f64 = 0.9;

    /// # Errors
    /// `ConfigurationError` for a non-positive `lr` or `gamma` outside `[0, 1)`.
    pub fn new(params: Vec<Value>, lr: f64, gamma: f64) -> Result<Self, MinigradError> {
        validate_lr(lr)?;
        validate_decay("Gamma", gamma)?;
        let square_avg = vec![0.0; params.len()];
        Ok(RmsPropOptimizer {
            params,
            lr,
            gamma,
            square_avg,
        })
    }

    pub fn with_defaults(params: Vec<Value>) -> Result<Self, MinigradError> {
        Self::new(params, DEFAULT_LR, Self::DEFAULT_GAMMA)
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Optimizer for RmsPropOptimizer {
    fn step(&mut self) -> Result<(), MinigradError> {
        debug!(
            "RmsPropOptimizer: step() on {} params, gamma = {}",
            self.params.len(),
            self.gamma
        );
        for (param, avg) in self.params.iter().zip(self.square_avg.iter_mut()) {
            let grad = param.grad();
            *avg = self.gamma * *avg + (1.0 - self.gamma) * grad * grad;
            param.set_data(param.data() - self.lr * grad / (*avg + DENOMINATOR_EPSILON).sqrt());
        }
        Ok(())
    }

    fn params(&self) -> &[Value] {
        &self.params
    }

    fn lr(&self) -> f64 {
        self.lr
    }

    fn set_lr(&mut self, lr: f64) -> Result<(), MinigradError> {
        validate_lr(lr)?;
        self.lr = lr;
        Ok(())
    }
}

#[cfg(test)]
#[path = "rmsprop_test.rs"]
mod tests;

use crate::error::MinigradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::{validate_lr, DEFAULT_LR, DENOMINATOR_EPSILON};
use crate::value::Value;
use log::debug;

/// Adagrad: per-parameter learning rates shrinking with the history of
/// squared gradients.
///
/// ```text
/// s += g^2
/// p -= lr * g / sqrt(s + 1e-6)
/// ```
#[derive(Debug)]
pub struct AdagradOptimizer {
    params: Vec<Value>,
    lr: f64,
    /// Running sum of squared gradients, one per parameter.
    sum_squares: Vec<f64>,
}

impl AdagradOptimizer {
    pub fn new(params: Vec<Value>, lr: f64) -> Result<Self, MinigradError> {
        validate_lr(lr)?;
        let sum_squares = vec![0.0; params.len()];
        Ok(AdagradOptimizer {
            params,
            lr,
            sum_squares,
        })
    }

    pub fn with_defaults(params: Vec<Value>) -> Result<Self, MinigradError> {
        Self::new(params, DEFAULT_LR)
    }

    pub fn sum_squares(&self) -> &[f64] {
        &self.sum_squares
    }
}

impl Optimizer for AdagradOptimizer {
    fn step(&mut self) -> Result<(), MinigradError> {
        debug!("AdagradOptimizer: step() called");
        for (param, state) in self.params.iter().zip(self.sum_squares.iter_mut()) {
            let grad = param.grad();
            *state += grad * grad;
            param.set_data(param.data() - self.lr * grad / (*state + DENOMINATOR_EPSILON).sqrt());
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
#[path = "adagrad_test.rs"]
mod tests;

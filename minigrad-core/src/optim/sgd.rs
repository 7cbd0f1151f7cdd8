use crate::error::MinigradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::{validate_lr, DEFAULT_LR};
use crate::value::Value;
use log::{debug, warn};

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports classical and Nesterov momentum. For each parameter:
///
/// ```text
/// v = momentum * v + lr * g
/// p -= momentum * v + lr * g   (nesterov)
/// p -= v                       (otherwise)
/// ```
///
/// With `momentum = 0` this is plain gradient descent.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    nesterov: bool,
    velocities: Vec<f64>,
}

impl SgdOptimizer {
    pub const DEFAULT_MOMENTUM: f64 = 0.9;

    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameters to optimize.
    /// * `lr`: The learning rate.
    /// * `momentum`: Momentum factor, must be non-negative.
    /// * `nesterov`: Enables Nesterov momentum.
    pub fn new(
        params: Vec<Value>,
        lr: f64,
        momentum: f64,
        nesterov: bool,
    ) -> Result<Self, MinigradError> {
        validate_lr(lr)?;
        if !(momentum >= 0.0 && momentum.is_finite()) {
            return Err(MinigradError::ConfigurationError(format!(
                "Momentum must be non-negative and finite, got {}",
                momentum
            )));
        }
        if nesterov && momentum == 0.0 {
            warn!("SgdOptimizer: nesterov enabled with zero momentum, it has no effect");
        }
        let velocities = vec![0.0; params.len()];
        Ok(SgdOptimizer {
            params,
            lr,
            momentum,
            nesterov,
            velocities,
        })
    }

    /// `lr = 0.1`, `momentum = 0.9`, no Nesterov.
    pub fn with_defaults(params: Vec<Value>) -> Result<Self, MinigradError> {
        Self::new(params, DEFAULT_LR, Self::DEFAULT_MOMENTUM, false)
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn nesterov(&self) -> bool {
        self.nesterov
    }

    /// Current velocity of every parameter.
    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), MinigradError> {
        debug!(
            "SgdOptimizer: step() on {} params, lr = {}",
            self.params.len(),
            self.lr
        );
        for (param, velocity) in self.params.iter().zip(self.velocities.iter_mut()) {
            let grad = param.grad();
            *velocity = self.momentum * *velocity + self.lr * grad;
            let update = if self.nesterov {
                self.momentum * *velocity + self.lr * grad
            } else {
                *velocity
            };
            param.set_data(param.data() - update);
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
#[path = "sgd_test.rs"]
mod tests;

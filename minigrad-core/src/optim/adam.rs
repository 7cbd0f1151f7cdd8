use crate::error::MinigradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::{validate_decay, validate_lr, DEFAULT_LR, DENOMINATOR_EPSILON};
use crate::value::Value;
use log::debug;

/// Represents the state for a single parameter in the Adam optimizer.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct AdamParamState {
    /// First moment (exponential moving average of gradients).
    pub m: f64,
    /// Second moment (exponential moving average of squared gradients).
    pub v: f64,
}

/// Adam Optimizer.
///
/// ```text
/// t += 1
/// m = beta1 * m + (1 - beta1) * g
/// v = beta2 * v + (1 - beta2) * g^2
/// p -= lr * (m / (1 - beta1^t)) / (sqrt(v / (1 - beta2^t)) + 1e-6)
/// ```
#[derive(Debug)]
pub struct AdamOptimizer {
    params: Vec<Value>,
    lr: f64,
    beta1: f64,
    beta2: f64,
    iterations: u64,
    state: Vec<AdamParamState>,
}

impl AdamOptimizer {
    pub const DEFAULT_BETA1: f64 = 0.9;
    pub const DEFAULT_BETA2: f64 = 0.999;

    pub fn new(params: Vec<Value>, lr: f64, beta1: f64, beta2: f64) -> Result<Self, MinigradError> {
        validate_lr(lr)?;
        validate_decay("Beta1", beta1)?;
        validate_decay("Beta2", beta2)?;
        let state = vec![AdamParamState::default(); params.len()];
        Ok(AdamOptimizer {
            params,
            lr,
            beta1,
            beta2,
            iterations: 0,
            state,
        })
    }

    pub fn with_defaults(params: Vec<Value>) -> Result<Self, MinigradError> {
        Self::new(params, DEFAULT_LR, Self::DEFAULT_BETA1, Self::DEFAULT_BETA2)
    }

    /// Number of steps taken so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn state(&self) -> &[AdamParamState] {
        &self.state
    }
}

impl Optimizer for AdamOptimizer {
    fn step(&mut self) -> Result<(), MinigradError> {
        self.iterations += 1;
        let t = self.iterations as f64;
        let bias_correction1 = 1.0 - self.beta1.powf(t);
        let bias_correction2 = 1.0 - self.beta2.powf(t);
        debug!("AdamOptimizer: step {} on {} params", self.iterations, self.params.len());

        for (param, state) in self.params.iter().zip(self.state.iter_mut()) {
            let grad = param.grad();
            state.m = self.beta1 * state.m + (1.0 - self.beta1) * grad;
            state.v = self.beta2 * state.v + (1.0 - self.beta2) * grad * grad;

            let m_hat = state.m / bias_correction1;
            let v_hat = state.v / bias_correction2;
            param.set_data(param.data() - self.lr * m_hat / (v_hat.sqrt() + DENOMINATOR_EPSILON));
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
#[path = "adam_test.rs"]
mod tests;

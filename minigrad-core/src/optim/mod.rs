// minigrad-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! Every optimizer owns handles to the parameter leaves it updates (usually
//! `module.parameters()`), reads their accumulated `grad` and writes their
//! `data` in place. Per-parameter state is indexed by the parameter's position
//! in that list, so the list must not be reordered between steps.
//!
//! Defaults shared by all optimizers live here; each constructor validates
//! its hyperparameters and returns `ConfigurationError` on bad input.

pub mod adagrad;
pub mod adam;
pub mod optimizer_trait;
pub mod rmsprop;
pub mod sgd;

// Re-export key items for easier access
pub use adagrad::AdagradOptimizer;
pub use adam::AdamOptimizer;
pub use optimizer_trait::Optimizer;
pub use rmsprop::RmsPropOptimizer;
pub use sgd::SgdOptimizer;

use crate::error::MinigradError;

/// Default learning rate for every optimizer.
pub const DEFAULT_LR: f64 = 0.1;
/// Added inside the square root of adaptive denominators (Adagrad, RMSProp)
/// and to Adam's denominator.
pub const DENOMINATOR_EPSILON: f64 = 1e-6;

pub(crate) fn validate_lr(lr: f64) -> Result<(), MinigradError> {
    if !(lr > 0.0 && lr.is_finite()) {
        return Err(MinigradError::ConfigurationError(format!(
            "Learning rate must be positive and finite, got {}",
            lr
        )));
    }
    Ok(())
}

/// Checks that a decay rate lies in `[0, 1)`.
pub(crate) fn validate_decay(name: &str, value: f64) -> Result<(), MinigradError> {
    if !(0.0..1.0).contains(&value) {
        return Err(MinigradError::ConfigurationError(format!(
            "{} must be in [0, 1), got {}",
            name, value
        )));
    }
    Ok(())
}

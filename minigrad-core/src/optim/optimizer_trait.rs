use crate::error::MinigradError;
use crate::value::Value;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Reads each parameter's accumulated `grad` and overwrites its `data`.
    /// Gradients are left untouched; call [`Optimizer::zero_grad`] (or the
    /// module's) before the next backward pass.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `MinigradError` otherwise.
    fn step(&mut self) -> Result<(), MinigradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    fn zero_grad(&mut self) {
        for param in self.params() {
            param.zero_grad();
        }
    }

    /// The parameters updated by this optimizer, in state order.
    fn params(&self) -> &[Value];

    fn lr(&self) -> f64;

    /// Changes the learning rate used by subsequent steps.
    ///
    /// # Errors
    /// `ConfigurationError` if `lr` is not positive and finite.
    fn set_lr(&mut self, lr: f64) -> Result<(), MinigradError>;
}

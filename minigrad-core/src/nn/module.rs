use crate::error::MinigradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module maps a slice of input nodes to output nodes and exposes the leaf
/// nodes it owns as its trainable parameters. Optimizers only ever see the
/// flattened, ordered list returned by [`Module::parameters`].
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: One node per input feature.
    ///
    /// # Returns
    /// The output nodes, or a `MinigradError` if the inputs do not fit the module.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MinigradError>;

    /// Returns every trainable leaf node, including those of sub-modules.
    ///
    /// The order is stable across calls; optimizers index their per-parameter
    /// state by position in this list.
    fn parameters(&self) -> Vec<Value>;

    /// Returns the parameters along with hierarchical names
    /// (e.g. `"layers.0.neurons.1.w2"`).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to `0`.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Total number of trainable scalars.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

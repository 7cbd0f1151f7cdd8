use crate::error::MinigradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::ops::activation::Activation;
use crate::value::Value;
use rand::Rng;

/// A single unit computing `activation(sum_i(w_i * x_i) + b)`.
///
/// # Fields
/// * `weights`: One leaf per input, labelled `w0`, `w1`, ...
/// * `bias`: Leaf labelled `bias`.
/// * `activation`: Non-linearity applied to the affine sum.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` inputs, initialized from the thread RNG.
    pub fn new(nin: usize, activation: Activation) -> Self {
        Self::with_rng(nin, activation, &mut rand::thread_rng())
    }

    /// Creates a neuron with `nin` inputs, drawing weights from `rng`.
    ///
    /// Weights are uniform in `[-bound, bound]`, see [`init::weight_bound`].
    pub fn with_rng<R: Rng + ?Sized>(nin: usize, activation: Activation, rng: &mut R) -> Self {
        let bound = init::weight_bound(nin, activation);
        let weights = init::uniform(rng, nin, bound)
            .into_iter()
            .enumerate()
            .map(|(i, w)| Value::with_label(w, format!("w{}", i)))
            .collect();
        let bias = Value::with_label(init::initial_bias(activation), "bias");
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Builds a neuron from explicit weights and bias (labels are assigned).
    pub fn from_weights(weights: &[f64], bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights
                .iter()
                .enumerate()
                .map(|(i, &w)| Value::with_label(w, format!("w{}", i)))
                .collect(),
            bias: Value::with_label(bias, "bias"),
            activation,
        }
    }

    /// Computes the neuron output for one sample.
    ///
    /// The sum starts from the bias and adds the weighted inputs in order.
    ///
    /// # Errors
    /// `LengthMismatch` if `inputs.len()` differs from the number of weights.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, MinigradError> {
        if inputs.len() != self.weights.len() {
            return Err(MinigradError::LengthMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::activate".to_string(),
            });
        }
        let affine = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| acc + w * x);
        Ok(self.activation.apply(&affine))
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MinigradError> {
        Ok(vec![self.activate(inputs)?])
    }

    /// Weights in order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w.clone()))
            .collect();
        named.push(("bias".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;

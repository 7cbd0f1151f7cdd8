use super::neuron::Neuron;
use crate::error::MinigradError;
use crate::nn::module::Module;
use crate::ops::activation::Activation;
use crate::value::Value;
use rand::Rng;

/// `nout` independent neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new(nin: usize, nout: usize, activation: Activation) -> Self {
        Self::with_rng(nin, nout, activation, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self {
        Layer {
            neurons: (0..nout)
                .map(|_| Neuron::with_rng(nin, activation, &mut *rng))
                .collect(),
        }
    }

    /// Wraps already-built neurons.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Self {
        Layer { neurons }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    /// One output per neuron, even when the layer has a single neuron.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MinigradError> {
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_layer_forward_shape() -> Result<(), MinigradError> {
        let mut rng = StdRng::seed_from_u64(11);
        let layer = Layer::with_rng(3, 4, Activation::Tanh, &mut rng);
        let out = layer.forward(&Value::from_slice(&[1.0, -1.0, 0.5]))?;
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|o| o.data().abs() < 1.0));
        Ok(())
    }

    #[test]
    fn test_single_neuron_layer_returns_vec() -> Result<(), MinigradError> {
        let layer = Layer::from_neurons(vec![Neuron::from_weights(&[2.0], 1.0, Activation::Identity)]);
        let out = layer.forward(&[Value::new(3.0)])?;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].data(), 7.0);
        Ok(())
    }

    #[test]
    fn test_layer_parameters() {
        let mut rng = StdRng::seed_from_u64(11);
        let layer = Layer::with_rng(3, 2, Activation::ReLU, &mut rng);
        assert_eq!(layer.num_parameters(), 2 * (3 + 1));
        let named = layer.named_parameters();
        assert_eq!(named[0].0, "neurons.0.w0");
        assert_eq!(named[7].0, "neurons.1.bias");
    }

    #[test]
    fn test_layer_propagates_length_mismatch() {
        let layer = Layer::new(2, 2, Activation::Sigmoid);
        let result = layer.forward(&Value::from_slice(&[1.0]));
        assert!(matches!(result, Err(MinigradError::LengthMismatch { .. })));
    }
}

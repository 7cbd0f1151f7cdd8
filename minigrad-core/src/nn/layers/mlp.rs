use super::layer::Layer;
use crate::error::MinigradError;
use crate::nn::module::Module;
use crate::ops::activation::Activation;
use crate::value::Value;
use rand::Rng;

/// A multi-layer perceptron: fully-connected layers applied in sequence.
///
/// Hidden layers share one activation; the last layer has its own
/// (`Identity` in the usual regression setup).
#[derive(Debug, Clone)]
pub struct MLP {
    layers: Vec<Layer>,
}

impl MLP {
    /// Builds `nin -> nouts[0] -> ... -> nouts[last]`.
    ///
    /// # Errors
    /// `EmptyInput` if `nouts` is empty.
    pub fn new(
        nin: usize,
        nouts: &[usize],
        activation: Activation,
        final_activation: Activation,
    ) -> Result<Self, MinigradError> {
        Self::with_rng(nin, nouts, activation, final_activation, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        activation: Activation,
        final_activation: Activation,
        rng: &mut R,
    ) -> Result<Self, MinigradError> {
        if nouts.is_empty() {
            return Err(MinigradError::EmptyInput {
                operation: "MLP::new".to_string(),
            });
        }
        let sizes: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        let last = nouts.len() - 1;
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let act = if i == last { final_activation } else { activation };
                Layer::with_rng(pair[0], pair[1], act, &mut *rng)
            })
            .collect();
        log::debug!("MLP::new: sizes {:?}, {} -> {}", sizes, activation, final_activation);
        Ok(MLP { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for MLP {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MinigradError> {
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;

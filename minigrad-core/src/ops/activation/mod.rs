// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Scalar non-linearities used by neurons, plus [`Activation`], the selector
//! that a [`Neuron`](crate::nn::layers::Neuron) stores to decide which one to
//! apply.
//!
//! ## Currently Implemented:
//! - [`tanh_op`]: hyperbolic tangent.
//! - [`sigmoid_op`]: logistic function.
//! - [`relu_op`]: Rectified Linear Unit.
//! - [`identity_op`]: pass-through node (linear activation).

pub mod identity;
pub mod relu;
pub mod sigmoid;
pub mod tanh;

pub use identity::identity_op;
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;

use crate::error::MinigradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// The activation applied after a neuron's affine sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    Tanh,
    Sigmoid,
    ReLU,
    Identity,
}

impl Activation {
    /// Every supported activation, in the order used in error messages.
    pub const ALL: [Activation; 4] = [
        Activation::Tanh,
        Activation::Sigmoid,
        Activation::ReLU,
        Activation::Identity,
    ];

    /// Lowercase names accepted by [`Activation::from_str`].
    pub fn supported_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.name()).collect()
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Tanh => "tanh",
            Activation::Sigmoid => "sigmoid",
            Activation::ReLU => "relu",
            Activation::Identity => "identity",
        }
    }

    /// Applies the activation to `input`, creating one new node.
    pub fn apply(&self, input: &Value) -> Value {
        match self {
            Activation::Tanh => tanh_op(input),
            Activation::Sigmoid => sigmoid_op(input),
            Activation::ReLU => relu_op(input),
            Activation::Identity => identity_op(input),
        }
    }
}

impl Default for Activation {
    fn default() -> Self {
        Activation::Identity
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activation {
    type Err = MinigradError;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name() == lowered)
            .ok_or_else(|| MinigradError::InvalidActivation {
                name: s.to_string(),
                accepted: Self::supported_names().join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Activation;
    use crate::error::MinigradError;
    use crate::value::Value;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("TANH".parse::<Activation>().unwrap(), Activation::Tanh);
        assert_eq!("Sigmoid".parse::<Activation>().unwrap(), Activation::Sigmoid);
        assert_eq!("relu".parse::<Activation>().unwrap(), Activation::ReLU);
        assert_eq!("identity".parse::<Activation>().unwrap(), Activation::Identity);
    }

    #[test]
    fn test_from_str_lists_accepted_names() {
        let err = "softplus".parse::<Activation>().unwrap_err();
        match err {
            MinigradError::InvalidActivation { name, accepted } => {
                assert_eq!(name, "softplus");
                assert_eq!(accepted, "tanh, sigmoid, relu, identity");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for act in Activation::ALL {
            assert_eq!(act.to_string().parse::<Activation>().unwrap(), act);
        }
    }

    #[test]
    fn test_apply_dispatches() {
        let x = Value::new(-1.0);
        assert_eq!(Activation::ReLU.apply(&x).data(), 0.0);
        assert_eq!(Activation::Identity.apply(&x).data(), -1.0);
        assert_eq!(Activation::Tanh.apply(&x).op_tag(), "tanh");
        assert_eq!(Activation::Sigmoid.apply(&x).op_tag(), "sigmoid");
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Activation::default(), Activation::Identity);
    }
}

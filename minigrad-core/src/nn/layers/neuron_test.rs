use super::Neuron;
use crate::error::MinigradError;
use crate::nn::module::Module;
use crate::ops::activation::Activation;
use crate::value::Value;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_neuron_init_bounds_and_labels() {
    let mut rng = StdRng::seed_from_u64(3);
    let n = Neuron::with_rng(8, Activation::ReLU, &mut rng);
    assert_eq!(n.nin(), 8);
    assert_eq!(n.bias().data(), 0.1);
    assert_eq!(n.bias().label().as_deref(), Some("bias"));
    for (i, w) in n.weights().iter().enumerate() {
        assert!(w.data().abs() <= 0.5);
        assert_eq!(w.label(), Some(format!("w{}", i)));
    }

    let t = Neuron::with_rng(4, Activation::Tanh, &mut rng);
    assert_eq!(t.bias().data(), 0.0);
    assert!(t.weights().iter().all(|w| w.data().abs() <= 0.5));
}

#[test]
fn test_neuron_activate_identity() -> Result<(), MinigradError> {
    let n = Neuron::from_weights(&[2.0, -1.0], 0.5, Activation::Identity);
    let out = n.activate(&Value::from_slice(&[3.0, 4.0]))?;
    assert_relative_eq!(out.data(), 2.5);

    out.backward();
    assert_relative_eq!(n.weights()[0].grad(), 3.0);
    assert_relative_eq!(n.weights()[1].grad(), 4.0);
    assert_relative_eq!(n.bias().grad(), 1.0);
    Ok(())
}

#[test]
fn test_neuron_activate_tanh() -> Result<(), MinigradError> {
    let n = Neuron::from_weights(&[1.0], 0.0, Activation::Tanh);
    let out = n.activate(&[Value::new(0.5)])?;
    assert_relative_eq!(out.data(), 0.5f64.tanh());
    assert_eq!(out.op_tag(), "tanh");
    Ok(())
}

#[test]
fn test_neuron_length_mismatch() {
    let n = Neuron::from_weights(&[1.0, 2.0, 3.0], 0.0, Activation::Identity);
    let err = n.activate(&Value::from_slice(&[1.0])).unwrap_err();
    assert_eq!(
        err,
        MinigradError::LengthMismatch {
            expected: 3,
            actual: 1,
            operation: "Neuron::activate".to_string()
        }
    );
}

#[test]
fn test_neuron_parameters_order() {
    let n = Neuron::from_weights(&[1.0, 2.0], 3.0, Activation::Sigmoid);
    let params = n.parameters();
    assert_eq!(params.len(), 3);
    assert!(params[0].ptr_eq(&n.weights()[0]));
    assert!(params[2].ptr_eq(n.bias()));
    let names: Vec<String> = n.named_parameters().into_iter().map(|(s, _)| s).collect();
    assert_eq!(names, vec!["w0", "w1", "bias"]);
}

#[test]
fn test_neuron_zero_grad() -> Result<(), MinigradError> {
    let n = Neuron::from_weights(&[1.0], 1.0, Activation::Identity);
    n.activate(&[Value::new(2.0)])?.backward();
    assert_eq!(n.weights()[0].grad(), 2.0);
    n.zero_grad();
    assert!(n.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

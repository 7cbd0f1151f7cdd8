use super::{AdamOptimizer, AdamParamState};
use crate::error::MinigradError;
use crate::optim::Optimizer;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_adam_optimizer_new() {
    let optimizer = AdamOptimizer::with_defaults(vec![Value::new(1.0), Value::new(2.0)]);
    assert!(optimizer.is_ok());
}

#[test]
fn test_adam_invalid_hyperparameters() {
    assert!(matches!(
        AdamOptimizer::new(vec![], -0.001, 0.9, 0.999),
        Err(MinigradError::ConfigurationError(_))
    ));
    assert!(matches!(
        AdamOptimizer::new(vec![], 0.001, 1.0, 0.999),
        Err(MinigradError::ConfigurationError(_))
    ));
    assert!(matches!(
        AdamOptimizer::new(vec![], 0.001, 0.9, -0.5),
        Err(MinigradError::ConfigurationError(_))
    ));
}

#[test]
fn test_adam_first_step_moves_by_lr() -> Result<(), MinigradError> {
    let p = Value::new(10.0);
    p.accumulate_grad(1.0);
    let mut optimizer = AdamOptimizer::with_defaults(vec![p.clone()])?;
    optimizer.step()?;

    // After bias correction m_hat = g and v_hat = g^2, so the step is lr * g / (|g| + eps).
    assert_relative_eq!(p.data(), 10.0 - 0.1 / (1.0 + 1e-6), epsilon = 1e-12);
    assert_eq!(optimizer.iterations(), 1);
    assert_relative_eq!(optimizer.state()[0].m, 0.1, epsilon = 1e-12);
    assert_relative_eq!(optimizer.state()[0].v, 0.001, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_adam_second_step() -> Result<(), MinigradError> {
    let p = Value::new(0.0);
    p.accumulate_grad(0.5);
    let mut optimizer = AdamOptimizer::new(vec![p.clone()], 0.01, 0.9, 0.999)?;
    optimizer.step()?;
    let after_first = p.data();
    optimizer.step()?;

    let m: f64 = 0.9 * 0.05 + 0.1 * 0.5;
    let v: f64 = 0.999 * 0.00025 + 0.001 * 0.25;
    let m_hat = m / (1.0 - 0.9f64.powi(2));
    let v_hat = v / (1.0 - 0.999f64.powi(2));
    assert_relative_eq!(
        p.data(),
        after_first - 0.01 * m_hat / (v_hat.sqrt() + 1e-6),
        epsilon = 1e-12
    );
    Ok(())
}

#[test]
fn test_adam_state_starts_empty() -> Result<(), MinigradError> {
    let optimizer = AdamOptimizer::with_defaults(vec![Value::new(1.0)])?;
    assert_eq!(optimizer.state(), &[AdamParamState::default()]);
    assert_eq!(optimizer.iterations(), 0);
    Ok(())
}

#[test]
fn test_adam_bias_correction_past_i32_range() -> Result<(), MinigradError> {
    let p = Value::new(1.0);
    p.accumulate_grad(1.0);
    let mut optimizer = AdamOptimizer::with_defaults(vec![p.clone()])?;
    optimizer.iterations = u64::from(u32::MAX);
    optimizer.step()?;

    // Both corrections are 1 this late, so m_hat = 0.1 and v_hat = 0.001.
    let expected = 1.0 - 0.1 * 0.1 / (0.001f64.sqrt() + 1e-6);
    assert!(p.data().is_finite());
    assert_relative_eq!(p.data(), expected, epsilon = 1e-9);
    Ok(())
}

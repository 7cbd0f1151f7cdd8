use super::RmsPropOptimizer;
use crate::error::MinigradError;
use crate::optim::Optimizer;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_rmsprop_two_steps() -> Result<(), MinigradError> {
    let p = Value::new(1.0);
    p.accumulate_grad(2.0);
    let mut optimizer = RmsPropOptimizer::with_defaults(vec![p.clone()])?;

    optimizer.step()?;
    let s1 = 0.1 * 4.0;
    let expected1 = 1.0 - 0.1 * 2.0 / (s1 + 1e-6f64).sqrt();
    assert_relative_eq!(p.data(), expected1, epsilon = 1e-12);

    optimizer.step()?;
    let s2 = 0.9 * s1 + 0.1 * 4.0;
    let expected2 = expected1 - 0.1 * 2.0 / (s2 + 1e-6f64).sqrt();
    assert_relative_eq!(p.data(), expected2, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_rmsprop_invalid_gamma() {
    for gamma in [1.0, -0.1, 1.5] {
        assert!(matches!(
            RmsPropOptimizer::new(vec![], 0.1, gamma),
            Err(MinigradError::ConfigurationError(_))
        ));
    }
}

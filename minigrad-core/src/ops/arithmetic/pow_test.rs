use super::pow_op;
use crate::autograd::grad_check::check_grad;
use crate::error::MinigradError;
use crate::utils::testing::{check_grad_near, check_value_near};
use crate::value::Value;

#[test]
fn test_pow_forward_and_backward() {
    let x = Value::new(3.0);
    let y = x.pow(3).unwrap();
    check_value_near(&y, 27.0, 1e-12);
    assert_eq!(y.op_tag(), "**3");
    y.backward();
    check_grad_near(&x, 27.0, 1e-12);
}

#[test]
fn test_pow_fractional_exponent() {
    let x = Value::new(4.0);
    let y = x.pow(0.5).unwrap();
    check_value_near(&y, 2.0, 1e-12);
    y.backward();
    check_grad_near(&x, 0.25, 1e-12);
}

#[test]
fn test_pow_negative_exponent_grad_check() {
    let func = |v: &[Value]| v[0].pow(-2);
    let result = check_grad(func, &[1.7], 1e-6, 1e-7, 1e-5);
    assert!(result.is_ok(), "Pow grad check failed: {:?}", result.err());
}

#[test]
fn test_pow_rejects_non_finite_exponent() {
    let x = Value::new(2.0);
    let result = x.pow(f64::NAN);
    assert!(matches!(result, Err(MinigradError::InvalidExponent { .. })));
    let result = x.pow(f64::INFINITY);
    assert!(matches!(result, Err(MinigradError::InvalidExponent { .. })));
}

#[test]
fn test_pow_zero_exponent_has_zero_grad() {
    let x = Value::new(5.0);
    let y = pow_op(&x, 0.0);
    check_value_near(&y, 1.0, 1e-12);
    y.backward();
    check_grad_near(&x, 0.0, 1e-12);

    let zero = Value::new(0.0);
    let y = pow_op(&zero, 0.0);
    check_value_near(&y, 1.0, 1e-12);
    y.backward();
    check_grad_near(&zero, 0.0, 1e-12);
}

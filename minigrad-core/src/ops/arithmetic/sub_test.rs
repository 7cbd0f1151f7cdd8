use super::sub_op;
use crate::utils::testing::{check_grad_near, check_value_near};
use crate::value::Value;

#[test]
fn test_sub_forward_backward() {
    let a = Value::new(5.0);
    let b = Value::new(3.0);
    let c = sub_op(&a, &b);
    check_value_near(&c, 2.0, 1e-12);
    c.backward();
    check_grad_near(&a, 1.0, 1e-12);
    check_grad_near(&b, -1.0, 1e-12);
}

#[test]
fn test_sub_self_is_zero_with_cancelling_grads() {
    let a = Value::new(1.25);
    let c = &a - &a;
    check_value_near(&c, 0.0, 1e-12);
    c.backward();
    check_grad_near(&a, 0.0, 1e-12);
}

#[test]
fn test_rsub_with_scalar() {
    let a = Value::new(0.75);
    let c = 1.0 - &a;
    check_value_near(&c, 0.25, 1e-12);
    c.backward();
    check_grad_near(&a, -1.0, 1e-12);
}

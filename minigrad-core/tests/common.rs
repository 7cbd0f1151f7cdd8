use minigrad_core::Value;

// Shared helpers for the integration tests. Not every test file uses all of them.

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Central finite-difference derivative of `f` with respect to input `index`.
#[allow(dead_code)]
pub fn numerical_grad<F>(f: F, inputs: &[f64], index: usize, eps: f64) -> f64
where
    F: Fn(&[Value]) -> Value,
{
    let mut plus = inputs.to_vec();
    plus[index] += eps;
    let mut minus = inputs.to_vec();
    minus[index] -= eps;
    let f_plus = f(&Value::from_slice(&plus)).data();
    let f_minus = f(&Value::from_slice(&minus)).data();
    (f_plus - f_minus) / (2.0 * eps)
}

/// Position of `node` (by identity) in `order`.
#[allow(dead_code)]
pub fn position(order: &[Value], node: &Value) -> Option<usize> {
    order.iter().position(|n| n.ptr_eq(node))
}

use crate::value::Value;

/// Checks that a node's forward value is within `tolerance` of `expected`.
/// Panics with both values otherwise.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let diff = (actual.data() - expected).abs();
    if diff > tolerance {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.data(),
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks that a node's accumulated gradient is within `tolerance` of `expected`.
pub fn check_grad_near(actual: &Value, expected: f64, tolerance: f64) {
    let diff = (actual.grad() - expected).abs();
    if diff > tolerance {
        panic!(
            "Gradient mismatch for {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual,
            actual.grad(),
            expected,
            diff,
            tolerance
        );
    }
}

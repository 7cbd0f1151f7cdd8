// src/value/traits.rs

use crate::ops::arithmetic::add_op;
use crate::value::Value;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::iter::Sum;
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Value {
    /// Shallow clone: the new handle points to the same node, so gradient
    /// accumulation and `set_data` are visible through every clone.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl Debug for Value {
    /// Does not recurse into operands; large graphs stay printable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("label", &guard.label)
            .field("op", &guard.grad_fn.as_ref().map(|op| op.tag()))
            .finish()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "Value(data={}, grad={}, label={})",
            guard.data,
            guard.grad,
            guard.label.as_deref().unwrap_or("")
        )
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

// Comparisons look at `data` only. They are value-level predicates for
// control flow (e.g. clamping) and never create graph edges.

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.data().partial_cmp(&other.data())
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.data() == *other
    }
}

impl PartialOrd<f64> for Value {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.data().partial_cmp(other)
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        *self == other.data()
    }
}

impl PartialOrd<Value> for f64 {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        self.partial_cmp(&other.data())
    }
}

impl Sum for Value {
    /// Starts from a constant `0` leaf, so an empty sum is a valid node.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Self {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, &v))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::new(0.0), |acc, v| add_op(&acc, v))
    }
}

impl Zero for Value {
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.data() == 0.0
    }
}

impl One for Value {
    fn one() -> Self {
        Value::new(1.0)
    }
}


// src/value/operators.rs
//
// Infix operators for every combination of `Value`, `&Value` and a scalar
// constant (`f64` or `i32`).
// Bare scalars are lifted into fresh leaf nodes before the operation runs.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    (@scalar $trait:ident, $method:ident, $op_fn:ident, $scalar:ty) => {
        impl $trait<$scalar> for Value {
            type Output = Value;
            fn $method(self, rhs: $scalar) -> Value {
                $op_fn(&self, &Value::new(f64::from(rhs)))
            }
        }

        impl<'a> $trait<$scalar> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: $scalar) -> Value {
                $op_fn(self, &Value::new(f64::from(rhs)))
            }
        }

        impl $trait<Value> for $scalar {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(f64::from(self)), &rhs)
            }
        }

        impl<'b> $trait<&'b Value> for $scalar {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(&Value::new(f64::from(self)), rhs)
            }
        }
    };
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl<'b> $trait<&'b Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl<'a> $trait<Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl_binary_op!(@scalar $trait, $method, $op_fn, f64);
        impl_binary_op!(@scalar $trait, $method, $op_fn, i32);
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

impl<'a> Neg for &'a Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

// src/value_data.rs
use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

/// Internal storage for a `Value` node.
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by the `Value` struct so that
/// many downstream nodes can share one upstream node while the backward pass
/// and the optimizers still mutate `grad` and `data` in place.
#[derive(Debug)]
pub struct ValueData {
    /// The forward (primal) value.
    pub(crate) data: f64,
    /// Accumulated partial derivative of the last backward root w.r.t. this node.
    pub(crate) grad: f64,
    /// The backward rule of the operation that produced this node.
    /// Leaf nodes (created directly by the user) have `grad_fn = None`.
    pub(crate) grad_fn: Option<BackwardOp>,
    /// Optional diagnostic name.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates the storage for a leaf node.
    pub(crate) fn leaf(data: f64, label: Option<String>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: None,
            label,
        }
    }

    /// Creates the storage for the output of an operation.
    pub(crate) fn from_op(data: f64, grad_fn: BackwardOp) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: Some(grad_fn),
            label: None,
        }
    }
}

impl Drop for ValueData {
    /// Unlinks the graph iteratively.
    ///
    /// The default drop would recurse once per upstream node and overflow the
    /// stack on long chains. Operands that are only kept alive by this node
    /// have their own `grad_fn` detached here and are released in a loop.
    fn drop(&mut self) {
        let mut pending: Vec<Value> = match self.grad_fn.take() {
            Some(op) => op.into_inputs(),
            None => return,
        };
        while let Some(node) = pending.pop() {
            if Rc::strong_count(&node.data) == 1 {
                if let Some(op) = node.write_data().grad_fn.take() {
                    pending.extend(op.into_inputs());
                }
            }
        }
    }
}

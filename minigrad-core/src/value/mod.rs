// src/value/mod.rs

use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
mod operators;
mod traits;

/// A scalar node in the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node may be an operand of many downstream
///     nodes (diamond dependencies), and cloning a `Value` only bumps a
///     reference count.
/// 2.  **Interior Mutability:** `grad` is accumulated by the backward pass and
///     `data` is overwritten by optimizers, both through shared handles.
///
/// Operands always exist before the node that consumes them, so the `Rc`
/// links can never form a cycle.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

/// Identity of a node, used as the key of the visited set during traversal.
pub(crate) type NodeId = *const RefCell<ValueData>;

impl Value {
    /// Creates a new leaf node holding `data`.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data, None))),
        }
    }

    /// Creates a new leaf node with a human-readable label.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data, Some(label.into())))),
        }
    }

    /// Wraps already-built node storage (used by the operation registry).
    pub(crate) fn from_data(value_data: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(value_data)),
        }
    }

    /// Lifts a slice of scalars into fresh leaf nodes.
    pub fn from_slice(values: &[f64]) -> Vec<Value> {
        values.iter().map(|&v| Value::new(v)).collect()
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the forward value. Used by optimizers between iterations.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns the label, if any.
    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    /// Sets or replaces the label.
    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Diagnostic tag of the operation that produced this node (`""` for leaves).
    pub fn op_tag(&self) -> String {
        self.read_data()
            .grad_fn
            .as_ref()
            .map(|op| op.tag())
            .unwrap_or_default()
    }

    /// Returns `true` if this node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Returns handles to the operands of this node, in operation order.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data()
            .grad_fn
            .as_ref()
            .map(|op| op.inputs().into_iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Borrows the node storage immutably.
    ///
    /// Panics if the node is currently borrowed mutably, which the engine
    /// never does across calls.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Borrows the node storage mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;

use crate::autograd::graph;
use crate::value::Value;

impl Value {
    /// Performs the backward pass starting from this node.
    ///
    /// Computes the gradient of this node with respect to every node it
    /// (transitively) depends on, accumulating into each node's `grad`.
    /// This node's own gradient is overwritten with `1.0` first.
    ///
    /// Gradients of the other nodes are *accumulated*: calling `backward`
    /// twice on the same graph without [`Value::zero_grad`] in between
    /// double-counts them.
    pub fn backward(&self) {
        graph::backward(self);
    }

    /// Returns every node reachable from this one in topological order:
    /// each node appears exactly once, after all of its operands.
    pub fn topological_order(&self) -> Vec<Value> {
        graph::topological_sort(self)
    }

    /// Adds `grad_to_add` into this node's gradient.
    pub fn accumulate_grad(&self, grad_to_add: f64) {
        self.write_data().grad += grad_to_add;
    }

    /// Resets the gradient of this node to `0.0`.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }
}

use crate::value::{NodeId, Value};
use std::collections::HashSet;

/// Builds a topological ordering of every node reachable from `root`.
///
/// Depth-first, operands before the node itself, so each node appears
/// exactly once and strictly after all of its operands. The visited set is
/// keyed by node identity (`Rc` pointer), never by value, so nodes reached
/// through several paths are only appended once.
///
/// The traversal uses an explicit stack instead of recursion: long chains
/// (e.g. a sum over thousands of terms) would otherwise overflow the call stack.
/// It performs no gradient math and allocates no nodes.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, operands_already_pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reverse so operands are visited in forward order.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    log::trace!("topological_sort: {} nodes reachable", sorted_list.len());
    sorted_list
}

/// Runs reverse-mode differentiation from `root`.
///
/// 1. Order every reachable node (see [`topological_sort`]).
/// 2. Seed `root.grad = 1`; the only place a gradient is overwritten.
/// 3. Walk the order in reverse, replaying each node's backward rule once.
///    All consumers of a node are processed before the node itself, so its
///    gradient is complete by the time it is pushed further upstream.
pub(crate) fn backward(root: &Value) {
    let sorted_nodes = topological_sort(root);
    log::debug!("backward: {} nodes in topological order", sorted_nodes.len());

    root.write_data().grad = 1.0;

    for node in sorted_nodes.iter().rev() {
        // Collect contributions first; the borrow of `node` ends before any
        // operand (possibly the same node twice, as in `a + a`) is mutated.
        let contributions: Vec<(Value, f64)> = {
            let guard = node.read_data();
            match guard.grad_fn.as_ref() {
                Some(op) => op
                    .inputs()
                    .into_iter()
                    .cloned()
                    .zip(op.backward(guard.grad))
                    .collect(),
                None => {
                    log::trace!("backward: leaf {:?} grad={}", guard.label, guard.grad);
                    continue;
                }
            }
        };
        for (input, grad_to_add) in contributions {
            input.accumulate_grad(grad_to_add);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::topological_sort;
    use crate::value::Value;

    fn position(order: &[Value], node: &Value) -> usize {
        order
            .iter()
            .position(|n| n.ptr_eq(node))
            .expect("node missing from order")
    }

    #[test]
    fn test_order_places_operands_first() {
        let a = Value::with_label(2.0, "a");
        let b = Value::with_label(3.0, "b");
        let c = &a * &b;
        let d = &a + &b;
        let e = &c * &d;

        let order = topological_sort(&e);
        assert_eq!(order.len(), 5, "each node appears exactly once");
        for node in &order {
            let idx = position(&order, node);
            for operand in node.operands() {
                assert!(position(&order, &operand) < idx);
            }
        }
        assert!(order.last().map_or(false, |n| n.ptr_eq(&e)));
    }

    #[test]
    fn test_order_deduplicates_shared_operand() {
        let a = Value::new(1.5);
        let s = &a + &a;
        let order = topological_sort(&s);
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_order_handles_long_chain() {
        let x = Value::new(1.0);
        let mut acc = x.clone();
        for _ in 0..100_000 {
            acc = &acc + 1.0;
        }
        let order = topological_sort(&acc);
        // x, the running sums and one lifted constant per addition
        assert_eq!(order.len(), 1 + 2 * 100_000);
    }
}

use crate::value::{NodeId, Value};
use std::collections::HashSet;

/// Orders every node reachable from `root` so that each node comes after all
/// of its dependencies (post-order). `root` is always last.
///
/// Each reachable node appears exactly once, however many paths lead to it.
/// The walk uses an explicit stack, so deep graphs do not grow the call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut sorted = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    // (node, dependencies already pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let dependencies = node.dependencies();
        stack.push((node, true));
        // Reversed so the first dependency is explored first.
        for dep in dependencies.into_iter().rev() {
            if !visited.contains(&dep.node_id()) {
                stack.push((dep, false));
            }
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::topological_sort;
    use crate::Value;

    fn position(order: &[Value], node: &Value) -> usize {
        order
            .iter()
            .position(|v| v.ptr_eq(node))
            .expect("node missing from topological order")
    }

    #[test]
    fn test_leaf_root_is_alone() {
        let a = Value::new(1.0);
        let order = topological_sort(&a);
        assert_eq!(order.len(), 1);
        assert!(order[0].ptr_eq(&a));
    }

    #[test]
    fn test_dependencies_precede_consumers() {
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        let c = &a * &b;
        let d = &c + &a;
        let order = topological_sort(&d);
        assert_eq!(order.len(), 4);
        assert!(position(&order, &a) < position(&order, &c));
        assert!(position(&order, &b) < position(&order, &c));
        assert!(position(&order, &c) < position(&order, &d));
        assert!(order.last().unwrap().ptr_eq(&d));
    }

    #[test]
    fn test_shared_node_visited_once() {
        let x = Value::new(1.5);
        let y = &x * &x;
        let z = &y + &x;
        let root = &z * &y;
        let order = topological_sort(&root);
        let count = order.iter().filter(|v| v.ptr_eq(&x)).count();
        assert_eq!(count, 1);
        let count_y = order.iter().filter(|v| v.ptr_eq(&y)).count();
        assert_eq!(count_y, 1);
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let x = Value::new(0.1);
        let mut acc = x.clone();
        for _ in 0..50_000 {
            acc = &acc + 0.0;
        }
        let order = topological_sort(&acc);
        // chain nodes + one promoted constant per step + x
        assert_eq!(order.len(), 100_001);
        assert!(order[0].ptr_eq(&x));
    }
}

use super::Value;
use std::fmt;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node.borrow();
        write!(
            f,
            "Value(data={:.4}, grad={:.4}, op={}",
            node.data, node.grad, node.op
        )?;
        if let Some(label) = &node.label {
            write!(f, ", label={label}")?;
        }
        write!(f, ")")
    }
}

/// Prints the expression tree rooted at this node, one node per line,
/// dependencies indented under their consumer. Shared nodes are printed once
/// per path.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self.clone(), 0usize)];
        while let Some((value, depth)) = stack.pop() {
            writeln!(f, "{:indent$}{:?}", "", value, indent = depth * 4)?;
            for dep in value.dependencies().into_iter().rev() {
                stack.push((dep, depth + 1));
            }
        }
        Ok(())
    }
}

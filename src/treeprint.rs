use crate::tree::{ExprTree, Node};
use std::fmt;

// Traversals run on an explicit stack so a degenerate tree as deep as the
// input is long can't exhaust the call stack.
enum Step<'a> {
    Visit(&'a Node, usize),
    Emit(char, usize),
}

impl fmt::Display for ExprTree {
    /// Fully parenthesized infix rendering; an empty tree prints nothing.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut pending = Vec::new();
        if let Some(root) = self.root() {
            pending.push(Step::Visit(root, 0));
        }
        while let Some(step) = pending.pop() {
            match step {
                Step::Emit(ch, _) => write!(f, "{}", ch)?,
                Step::Visit(node, _) => match (node.left.as_deref(), node.right.as_deref()) {
                    (Some(left), Some(right)) => {
                        // "(" left op right ")" pushed in reverse
                        pending.push(Step::Emit(')', 0));
                        pending.push(Step::Visit(right, 0));
                        pending.push(Step::Emit(node.data, 0));
                        pending.push(Step::Visit(left, 0));
                        pending.push(Step::Emit('(', 0));
                    }
                    _ => write!(f, "{}", node.data)?,
                },
            }
        }
        Ok(())
    }
}

impl ExprTree {
    /// Indented diagram, one node per line, right subtree above its parent
    /// so the page reads as the tree rotated a quarter turn left. Indent is
    /// one tab per depth level, root flush left.
    pub fn diagram(&self) -> String {
        let mut out = String::new();
        let mut pending = Vec::new();
        if let Some(root) = self.root() {
            pending.push(Step::Visit(root, 0));
        }
        while let Some(step) = pending.pop() {
            match step {
                Step::Emit(ch, depth) => {
                    for _ in 0..depth {
                        out.push('\t');
                    }
                    out.push(ch);
                    out.push('\n');
                }
                Step::Visit(node, depth) => {
                    // right child pops first
                    if let Some(left) = node.left.as_deref() {
                        pending.push(Step::Visit(left, depth + 1));
                    }
                    pending.push(Step::Emit(node.data, depth));
                    if let Some(right) = node.right.as_deref() {
                        pending.push(Step::Visit(right, depth + 1));
                    }
                }
            }
        }
        out
    }
}

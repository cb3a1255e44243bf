/// The four binary operators recognized by the builder and evaluator.
pub fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/')
}

// Operator/operand status is implied by `data`: anything that isn't one of
// `+ - * /` counts as an operand. A valid operator node always carries both
// children; a valid operand node carries none.
#[derive(Debug, PartialEq)]
pub struct Node {
    pub data: char,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn operand(ch: char) -> Node {
        Node { data: ch, left: None, right: None }
    }

    pub fn operator(op: char, left: Box<Node>, right: Box<Node>) -> Node {
        Node { data: op, left: Some(left), right: Some(right) }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl Drop for Node {
    // Dismantle iteratively so dropping a degenerate (list-shaped) tree
    // can't overflow the call stack. Children are detached before each
    // node is released, so the nested drops all see leaves.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Some(left) = self.left.take() {
            pending.push(left);
        }
        if let Some(right) = self.right.take() {
            pending.push(right);
        }
        while let Some(mut node) = pending.pop() {
            if let Some(left) = node.left.take() {
                pending.push(left);
            }
            if let Some(right) = node.right.take() {
                pending.push(right);
            }
        }
    }
}

/// A parsed postfix expression. Owns its whole node graph; an empty tree
/// has no root.
#[derive(Debug, PartialEq)]
pub struct ExprTree {
    root: Option<Box<Node>>,
}

impl ExprTree {
    pub fn new() -> ExprTree {
        ExprTree { root: None }
    }

    pub(crate) fn with_root(root: Box<Node>) -> ExprTree {
        ExprTree { root: Some(root) }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Operator-nesting depth: 0 for an empty tree, 1 for a lone operand.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut pending = Vec::new();
        if let Some(root) = self.root() {
            pending.push((root, 1));
        }
        while let Some((node, depth)) = pending.pop() {
            if depth > max {
                max = depth;
            }
            if let Some(left) = node.left.as_deref() {
                pending.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                pending.push((right, depth + 1));
            }
        }
        max
    }
}

impl Default for ExprTree {
    fn default() -> ExprTree {
        ExprTree::new()
    }
}

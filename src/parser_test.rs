use crate::parser::{ParseError, PostfixParser, MAX_STACK};
use crate::tree::ExprTree;

#[test]
fn build_simple_sum() {
    let tree = PostfixParser::parse_str("23+").unwrap();
    let root = tree.root().unwrap();
    assert_eq!(root.data, '+');
    let left = root.left.as_deref().unwrap();
    let right = root.right.as_deref().unwrap();
    assert_eq!(left.data, '2');
    assert_eq!(right.data, '3');
    assert!(left.is_leaf());
    assert!(right.is_leaf());
}

#[test]
fn first_pop_becomes_right_child() {
    // 52- means 5-2, so the 2 must land on the right
    let tree = PostfixParser::parse_str("52-").unwrap();
    let root = tree.root().unwrap();
    assert_eq!(root.left.as_deref().unwrap().data, '5');
    assert_eq!(root.right.as_deref().unwrap().data, '2');
}

#[test]
fn symbolic_operands_accepted() {
    // any non-operator character is an operand at the tree level
    let tree = PostfixParser::parse_str("ab+").unwrap();
    let root = tree.root().unwrap();
    assert_eq!(root.left.as_deref().unwrap().data, 'a');
    assert_eq!(root.right.as_deref().unwrap().data, 'b');
}

#[test]
fn single_operand_is_a_tree() {
    let tree = PostfixParser::parse_str("7").unwrap();
    assert!(tree.root().unwrap().is_leaf());
}

#[test]
fn bad_expressions() {
    assert_eq!(
        PostfixParser::parse_str(""),
        Err(ParseError::MalformedExpression)
    );
    assert_eq!(
        PostfixParser::parse_str("+"),
        Err(ParseError::MalformedExpression)
    );
    // "*" finds only the (1+2) subtree, second pop underflows
    assert_eq!(
        PostfixParser::parse_str("12+*"),
        Err(ParseError::MalformedExpression)
    );
    assert_eq!(
        PostfixParser::parse_str("ab+c*+"),
        Err(ParseError::MalformedExpression)
    );
    // two subtrees left over
    assert_eq!(
        PostfixParser::parse_str("23"),
        Err(ParseError::MalformedExpression)
    );
}

#[test]
fn depth_matches_operator_nesting() {
    assert_eq!(ExprTree::new().depth(), 0);
    assert_eq!(PostfixParser::parse_str("2").unwrap().depth(), 1);
    assert_eq!(PostfixParser::parse_str("23+").unwrap().depth(), 2);
    assert_eq!(PostfixParser::parse_str("52-3*").unwrap().depth(), 3);
}

#[test]
fn stack_capacity_boundary() {
    // exactly MAX_STACK operands still reduce to a single tree
    let mut expr = "1".repeat(MAX_STACK);
    expr.push_str(&"+".repeat(MAX_STACK - 1));
    assert!(PostfixParser::parse_str(&expr).is_ok());

    let over = "1".repeat(MAX_STACK + 1);
    assert_eq!(
        PostfixParser::parse_str(&over),
        Err(ParseError::StackOverflow)
    );
}

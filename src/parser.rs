use crate::tree::{is_operator, ExprTree, Node};
use log::debug;
use thiserror::Error;

/// Capacity of the builder's operand stack. Pushing an operand past this
/// bound fails with `ParseError::StackOverflow` instead of growing.
pub const MAX_STACK: usize = 64;

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("invalid expression")]
    MalformedExpression,
    #[error("expression exceeds operand stack capacity")]
    StackOverflow,
}

pub struct PostfixParser;

impl PostfixParser {
    pub fn parse_str(expr: &str) -> Result<ExprTree, ParseError> {
        Self::parse(expr.chars())
    }

    // Classic postfix reduction over a stack of owned subtrees. Everything
    // on the stack is a Box, so bailing out with `?` releases every
    // partially built subtree without any unwind bookkeeping.
    pub fn parse(tokens: impl Iterator<Item = char>) -> Result<ExprTree, ParseError> {
        let mut stack: Vec<Box<Node>> = Vec::new();
        for token in tokens {
            if is_operator(token) {
                // first pop is the right operand, matching postfix order
                let right = stack.pop().ok_or_else(|| {
                    debug!("operator '{}' with no right operand", token);
                    ParseError::MalformedExpression
                })?;
                let left = stack.pop().ok_or_else(|| {
                    debug!("operator '{}' with no left operand", token);
                    ParseError::MalformedExpression
                })?;
                stack.push(Box::new(Node::operator(token, left, right)));
            } else {
                // anything that isn't an operator is an operand
                if stack.len() == MAX_STACK {
                    debug!("operand stack full at '{}'", token);
                    return Err(ParseError::StackOverflow);
                }
                stack.push(Box::new(Node::operand(token)));
            }
        }
        let root = stack.pop().ok_or(ParseError::MalformedExpression)?;
        if !stack.is_empty() {
            debug!("{} unconsumed subtrees after reduction", stack.len() + 1);
            return Err(ParseError::MalformedExpression);
        }
        Ok(ExprTree::with_root(root))
    }
}

pub use crate::parser::{ParseError, PostfixParser, MAX_STACK};
pub mod parser;
#[cfg(test)]
mod parser_test;

pub use crate::tree::{is_operator, ExprTree, Node};
pub mod tree;

mod treeprint;

pub use crate::rpneval::{eval_postfix, EvalErr};
mod rpneval;

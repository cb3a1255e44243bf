use crate::tree::is_operator;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EvalErr {
    #[error("bad token '{0}'")]
    BadToken(char),
    #[error("division by zero")]
    DivisionByZero,
    #[error("stack underflow")]
    StackUnderflow,
    #[error("unbalanced expression")]
    UnbalancedExpr,
}

/// Evaluate a postfix expression of single-digit operands directly, without
/// building a tree. Unlike the tree builder, operands here must be decimal
/// digits; anything else fails with `BadToken`.
pub fn eval_postfix(expr: &str) -> Result<f64, EvalErr> {
    let mut operands: Vec<f64> = Vec::new();
    for token in expr.chars() {
        if let Some(digit) = token.to_digit(10) {
            operands.push(f64::from(digit));
        } else if is_operator(token) {
            // first pop is the right operand, same order as the builder
            let r = operands.pop().ok_or(EvalErr::StackUnderflow)?;
            let l = operands.pop().ok_or(EvalErr::StackUnderflow)?;
            match token {
                '+' => operands.push(l + r),
                '-' => operands.push(l - r),
                '*' => operands.push(l * r),
                '/' => {
                    if r == 0.0 {
                        debug!("division by zero: {} / {}", l, r);
                        return Err(EvalErr::DivisionByZero);
                    }
                    operands.push(l / r);
                }
                _ => unreachable!(),
            }
        } else {
            debug!("non-numeric operand '{}' reached the evaluator", token);
            return Err(EvalErr::BadToken(token));
        }
    }
    let result = operands.pop().ok_or(EvalErr::UnbalancedExpr)?;
    if !operands.is_empty() {
        debug!("{} operands left after evaluation", operands.len());
        return Err(EvalErr::UnbalancedExpr);
    }
    Ok(result)
}

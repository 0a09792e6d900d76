//! Single-pass evaluation of whitespace-separated postfix
//! expressions.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use tracing::{event, Level};

use base::prelude::*;

use super::error::{EvalError, Malformed};
use super::stack::OperandStack;


/// The binary operators the evaluator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    fn apply(&self, a: &Word, b: &Word) -> Result<Word, WordError> {
        match self {
            Operator::Add => a.checked_add(b),
            Operator::Subtract => a.checked_sub(b),
            Operator::Multiply => a.checked_mul(b),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
        })
    }
}

/// A classified token.  Tokens are classified one at a time during
/// the evaluation pass; nothing is retained between expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Operator(Operator),
    Literal(i64),
}

fn classify(text: &str) -> Result<Token, Malformed> {
    match text {
        "+" => Ok(Token::Operator(Operator::Add)),
        "-" => Ok(Token::Operator(Operator::Subtract)),
        "*" => Ok(Token::Operator(Operator::Multiply)),
        _ => text
            .parse::<i64>()
            .map(Token::Literal)
            .map_err(|_| Malformed::InvalidToken(text.to_string())),
    }
}

/// Evaluates a postfix expression over words of the given width.
///
/// Tokens are separated by ASCII whitespace and read strictly left to
/// right in a single pass.  Literals are encoded at `width` and
/// pushed; an operator pops the right operand first, then the left,
/// and pushes `left op right`.  The expression must leave exactly one
/// value on the stack, which becomes the result.
pub fn evaluate(expression: &str, width: Width) -> Result<Word, EvalError> {
    let mut stack = OperandStack::new();
    for text in expression.split_whitespace() {
        match classify(text)? {
            Token::Operator(op) => {
                let b = stack
                    .pop()
                    .map_err(|_| Malformed::InsufficientOperands(op))?;
                let a = stack
                    .pop()
                    .map_err(|_| Malformed::InsufficientOperands(op))?;
                let result = op.apply(&a, &b)?;
                event!(Level::DEBUG, "{} {} {} = {}", a, op, b, result);
                stack.push(result);
            }
            Token::Literal(value) => {
                let word = Word::new(value, width);
                event!(Level::DEBUG, "push {} as {}", value, word);
                stack.push(word);
            }
        }
    }
    let result = stack.pop().map_err(|_| Malformed::NoResult)?;
    if !stack.is_empty() {
        return Err(Malformed::ExtraOperands.into());
    }
    Ok(result)
}

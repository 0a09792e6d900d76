//! Evaluation errors.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use base::prelude::*;

use super::postfix::Operator;

/// Structural problems with a postfix expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Malformed {
    /// An operator was reached with fewer than two operands on the
    /// stack.
    InsufficientOperands(Operator),
    /// A token is neither an operator nor a signed decimal literal.
    InvalidToken(String),
    /// The expression left no value on the stack.
    NoResult,
    /// More than one value remained after the last token.
    ExtraOperands,
}

impl Display for Malformed {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Malformed::InsufficientOperands(op) => write!(
                f,
                "invalid postfix expression: insufficient operands for operator {op}"
            ),
            Malformed::InvalidToken(token) => {
                write!(f, "invalid token in expression: {token}")
            }
            Malformed::NoResult => {
                f.write_str("invalid postfix expression: no result on the stack")
            }
            Malformed::ExtraOperands => f.write_str(
                "invalid postfix expression: more than one value remains on the stack",
            ),
        }
    }
}

impl Error for Malformed {}

/// Any failure the evaluator can report.  Arithmetic and width
/// failures from the word layer propagate unchanged; expression
/// structure failures are raised here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EvalError {
    Word(WordError),
    Malformed(Malformed),
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            EvalError::Word(e) => write!(f, "{e}"),
            EvalError::Malformed(e) => write!(f, "{e}"),
        }
    }
}

impl Error for EvalError {}

impl From<WordError> for EvalError {
    fn from(e: WordError) -> EvalError {
        EvalError::Word(e)
    }
}

impl From<Malformed> for EvalError {
    fn from(e: Malformed) -> EvalError {
        EvalError::Malformed(e)
    }
}

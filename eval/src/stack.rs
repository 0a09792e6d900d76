//! The LIFO operand stack used as evaluator scratch space.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use base::prelude::*;


/// The stack operation which found the stack empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StackOp {
    Pop,
    Peek,
}

impl Display for StackOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            StackOp::Pop => "pop",
            StackOp::Peek => "peek",
        })
    }
}

/// Raised by [`OperandStack::pop`] and [`OperandStack::peek`] when
/// the stack is empty; an empty stack is always an error, never a
/// silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackUnderflow {
    pub op: StackOp,
}

impl Display for StackUnderflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "stack underflow: no elements to {}", self.op)
    }
}

impl Error for StackUnderflow {}

/// A LIFO container of words.  The stack owns its contents, so
/// dropping it releases every retained word, whichever error path
/// abandoned the evaluation.
#[derive(Debug, Default, Clone)]
pub struct OperandStack {
    words: Vec<Word>,
}

impl OperandStack {
    pub fn new() -> OperandStack {
        OperandStack { words: Vec::new() }
    }

    /// Places `word` on top of the stack.
    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Removes and returns the top word.
    pub fn pop(&mut self) -> Result<Word, StackUnderflow> {
        self.words.pop().ok_or(StackUnderflow { op: StackOp::Pop })
    }

    /// Returns the top word without removing it.
    pub fn peek(&self) -> Result<&Word, StackUnderflow> {
        self.words.last().ok_or(StackUnderflow { op: StackOp::Peek })
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

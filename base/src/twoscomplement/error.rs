//! Basic error reporting.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use super::Width;

/// The operation which was being attempted when a failure was
/// detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Compare,
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Op::Add => "addition",
            Op::Subtract => "subtraction",
            Op::Multiply => "multiplication",
            Op::Compare => "comparison",
        })
    }
}

/// Represents a failure to construct a word or to combine two words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WordError {
    /// The requested width is not one of the supported widths.
    InvalidWidth(u32),
    /// A binary operation was attempted on words of different widths.
    WidthMismatch { op: Op, left: Width, right: Width },
    /// The result of an operation does not fit in the word's width.
    Overflow(Op),
}

impl Error for WordError {}

impl Display for WordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            WordError::InvalidWidth(bits) => {
                write!(f, "invalid word width {bits}: allowed widths are 8, 16 and 32")
            }
            WordError::WidthMismatch { op, left, right } => {
                write!(
                    f,
                    "words must be of the same width for {op}: got widths {left} and {right}"
                )
            }
            WordError::Overflow(op) => write!(f, "overflow occurred during {op}"),
        }
    }
}

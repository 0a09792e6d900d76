//! The `base` crate defines the two's-complement fixed-width words
//! and their bit-level arithmetic.  The idea is that if you want to
//! write another tool working with these words, it would depend on
//! the base crate but would not need to depend on the evaluation
//! engine itself.

mod twoscomplement;

pub mod prelude;

pub use crate::twoscomplement::arith;
pub use crate::twoscomplement::codec;
pub use crate::twoscomplement::error::{Op, WordError};
pub use crate::twoscomplement::word::Word;
pub use crate::twoscomplement::Width;

//! The prelude exports the types which are useful in representing
//! and combining fixed-width two's-complement words.  Providing this
//! prelude is the main purpose of the base crate.
pub use super::twoscomplement::arith::{add, shift_left, subtract};
pub use super::twoscomplement::codec::{decode, encode};
pub use super::twoscomplement::error::{Op, WordError};
pub use super::twoscomplement::word::Word;
pub use super::twoscomplement::Width;

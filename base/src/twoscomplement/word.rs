//! The fixed-width word and its checked operations.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use serde::Serialize;

use super::arith;
use super::codec;
use super::error::{Op, WordError};
use super::Width;

#[cfg(test)]
mod tests16;
#[cfg(test)]
mod tests32;

/// A signed number held as a two's-complement bit sequence of fixed
/// width.
///
/// The bit sequence is stored most-significant bit first.  The width
/// is recorded alongside the bits even though it duplicates the
/// sequence length; binary operations validate it before touching the
/// bits.  A word never changes after construction: arithmetic always
/// produces a new instance.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Word {
    bits: Vec<bool>,
    width: Width,
}

impl Word {
    /// Builds the word encoding `value` at the given width.  Values
    /// whose magnitude does not fit wrap as described in
    /// [`codec::encode`].
    pub fn new(value: i64, width: Width) -> Word {
        Word {
            bits: codec::encode(value, width),
            width,
        }
    }

    fn from_bits(bits: Vec<bool>, width: Width) -> Word {
        debug_assert_eq!(bits.len(), width.bits());
        Word { bits, width }
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// True when the sign bit is set.
    pub fn is_negative(&self) -> bool {
        self.bits[0]
    }

    /// The word's numeric value.
    pub fn to_i64(&self) -> i64 {
        codec::decode(&self.bits)
    }

    fn check_width(&self, rhs: &Word, op: Op) -> Result<(), WordError> {
        if self.width == rhs.width {
            Ok(())
        } else {
            Err(WordError::WidthMismatch {
                op,
                left: self.width,
                right: rhs.width,
            })
        }
    }

    /// Adds two words of equal width.  A carry out of the
    /// most-significant position means the result did not fit, and
    /// the addition fails with an overflow error.
    pub fn checked_add(&self, rhs: &Word) -> Result<Word, WordError> {
        self.check_width(rhs, Op::Add)?;
        let (bits, carry) = arith::add(&self.bits, &rhs.bits);
        if carry {
            return Err(WordError::Overflow(Op::Add));
        }
        Ok(Word::from_bits(bits, self.width))
    }

    /// Subtracts `rhs` from `self`.  The final borrow is discarded:
    /// unlike addition and multiplication, subtraction never reports
    /// overflow and the result wraps instead.
    pub fn checked_sub(&self, rhs: &Word) -> Result<Word, WordError> {
        self.check_width(rhs, Op::Subtract)?;
        let (bits, _borrow) = arith::subtract(&self.bits, &rhs.bits);
        Ok(Word::from_bits(bits, self.width))
    }

    /// Multiplies two words of equal width by shift-and-add: for each
    /// set bit of the multiplier, from least-significant position
    /// upwards, the working copy of `self` is accumulated; the
    /// working copy is doubled once per position either way.  An
    /// overflowing accumulation step fails like the addition it is.
    ///
    /// Afterwards the sign-consistency check rejects a product whose
    /// sign bit agrees with neither operand.  This does not catch
    /// every out-of-range product.
    pub fn checked_mul(&self, rhs: &Word) -> Result<Word, WordError> {
        self.check_width(rhs, Op::Multiply)?;
        let mut product = Word::new(0, self.width);
        let mut shifted = self.clone();
        for i in (0..self.width.bits()).rev() {
            if rhs.bits[i] {
                product = product.checked_add(&shifted)?;
            }
            shifted = Word::from_bits(arith::shift_left(&shifted.bits), self.width);
        }
        if product.bits[0] != self.bits[0] && product.bits[0] != rhs.bits[0] {
            return Err(WordError::Overflow(Op::Multiply));
        }
        Ok(product)
    }

    /// Compares two words of equal width by decoded numeric value,
    /// not by raw bit pattern.
    pub fn signed_cmp(&self, rhs: &Word) -> Result<Ordering, WordError> {
        self.check_width(rhs, Op::Compare)?;
        Ok(self.to_i64().cmp(&rhs.to_i64()))
    }

    pub fn less_than(&self, rhs: &Word) -> Result<bool, WordError> {
        Ok(self.signed_cmp(rhs)? == Ordering::Less)
    }

    pub fn greater_than(&self, rhs: &Word) -> Result<bool, WordError> {
        Ok(self.signed_cmp(rhs)? == Ordering::Greater)
    }

    pub fn less_or_equal(&self, rhs: &Word) -> Result<bool, WordError> {
        Ok(self.signed_cmp(rhs)? != Ordering::Greater)
    }

    pub fn greater_or_equal(&self, rhs: &Word) -> Result<bool, WordError> {
        Ok(self.signed_cmp(rhs)? != Ordering::Less)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Debug for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Word{{width: {}, bits: {}}}", self.width, self)
    }
}

impl From<&Word> for i64 {
    fn from(word: &Word) -> i64 {
        word.to_i64()
    }
}

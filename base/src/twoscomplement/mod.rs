//! This module implements two's-complement fixed-width signed words,
//! the codec between those words and native integers, and the
//! bit-serial arithmetic which combines them.

pub mod arith;
pub mod codec;
pub mod error;
pub mod word;

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use self::error::WordError;

/// The bit widths a word is allowed to have.  Once a `Width` value
/// exists it is valid by construction; the restriction to 8, 16 and
/// 32 bits is enforced in the [`TryFrom`] conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Width {
    W8,
    W16,
    W32,
}

impl Width {
    /// The number of bits in a word of this width.
    pub const fn bits(self) -> usize {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
        }
    }
}

impl TryFrom<u32> for Width {
    type Error = WordError;
    fn try_from(bits: u32) -> Result<Width, WordError> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            other => Err(WordError::InvalidWidth(other)),
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.bits())
    }
}

#[test]
fn test_width_try_from_supported() {
    assert_eq!(Width::try_from(8_u32), Ok(Width::W8));
    assert_eq!(Width::try_from(16_u32), Ok(Width::W16));
    assert_eq!(Width::try_from(32_u32), Ok(Width::W32));
}

#[test]
fn test_width_try_from_unsupported() {
    for bits in [0_u32, 1, 7, 9, 24, 31, 33, 64] {
        assert_eq!(Width::try_from(bits), Err(WordError::InvalidWidth(bits)));
    }
}

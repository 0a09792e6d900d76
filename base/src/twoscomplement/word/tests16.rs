use super::super::error::{Op, WordError};
use super::super::Width;
use super::Word;

fn w16(value: i64) -> Word {
    Word::new(value, Width::W16)
}

#[test]
fn test_construction_and_display() {
    assert_eq!(w16(7).to_string(), "0000000000000111");
    assert_eq!(w16(-1).to_string(), "1111111111111111");
    assert_eq!(w16(-32768).to_string(), "1000000000000000");
    assert_eq!(w16(32767).to_string(), "0111111111111111");
}

#[test]
fn test_roundtrip_boundaries() {
    for value in [-32768, -1000, -1, 0, 1, 1000, 32767] {
        assert_eq!(w16(value).to_i64(), value);
    }
}

#[test]
fn test_arithmetic() {
    assert_eq!(w16(1000).checked_add(&w16(2000)), Ok(w16(3000)));
    assert_eq!(w16(1000).checked_sub(&w16(3000)), Ok(w16(-2000)));
    assert_eq!(w16(200).checked_mul(&w16(100)), Ok(w16(20000)));
}

#[test]
fn test_add_signed_wrap_is_not_detected() {
    // Same carry-out rule as at width 8: the positive wrap produces
    // no carry and goes unreported.
    assert_eq!(w16(32767).checked_add(&w16(1)), Ok(w16(-32768)));
    assert_eq!(
        w16(-1).checked_add(&w16(1)),
        Err(WordError::Overflow(Op::Add))
    );
}

#[test]
fn test_multiply_sign_check_fails() {
    // 256 * 128 = 32768, which reads back as the sign bit alone.
    assert_eq!(
        w16(256).checked_mul(&w16(128)),
        Err(WordError::Overflow(Op::Multiply))
    );
}

#[test]
fn test_comparisons() {
    assert_eq!(w16(-20000).less_than(&w16(20000)), Ok(true));
    assert_eq!(w16(20000).greater_than(&w16(-20000)), Ok(true));
}

#[test]
fn test_width_mismatch_with_narrower_word() {
    assert_eq!(
        w16(1).checked_add(&Word::new(1, Width::W8)),
        Err(WordError::WidthMismatch {
            op: Op::Add,
            left: Width::W16,
            right: Width::W8,
        })
    );
}

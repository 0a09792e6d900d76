use super::super::error::{Op, WordError};
use super::super::Width;
use super::Word;

fn w32(value: i64) -> Word {
    Word::new(value, Width::W32)
}

#[test]
fn test_construction_and_display() {
    assert_eq!(
        w32(7).to_string(),
        "00000000000000000000000000000111"
    );
    assert_eq!(w32(-1).to_string(), "1".repeat(32));
}

#[test]
fn test_roundtrip_boundaries() {
    for value in [
        i64::from(i32::MIN),
        -1_000_000,
        -1,
        0,
        1,
        1_000_000,
        i64::from(i32::MAX),
    ] {
        assert_eq!(w32(value).to_i64(), value);
    }
}

#[test]
fn test_arithmetic() {
    assert_eq!(
        w32(1_000_000).checked_add(&w32(2_000_000)),
        Ok(w32(3_000_000))
    );
    assert_eq!(w32(0).checked_sub(&w32(1)), Ok(w32(-1)));
    assert_eq!(
        w32(100_000).checked_mul(&w32(20_000)),
        Ok(w32(2_000_000_000))
    );
}

#[test]
fn test_add_signed_wrap_is_not_detected() {
    assert_eq!(
        w32(i64::from(i32::MAX)).checked_add(&w32(1)),
        Ok(w32(i64::from(i32::MIN)))
    );
    assert_eq!(
        w32(-1).checked_add(&w32(1)),
        Err(WordError::Overflow(Op::Add))
    );
}

#[test]
fn test_multiply_sign_check_fails() {
    // 2^30 * 2 = 2^31: sign bit set, both operands positive.
    assert_eq!(
        w32(1 << 30).checked_mul(&w32(2)),
        Err(WordError::Overflow(Op::Multiply))
    );
}

#[test]
fn test_width_mismatch_with_narrower_word() {
    assert_eq!(
        w32(1).signed_cmp(&Word::new(1, Width::W16)),
        Err(WordError::WidthMismatch {
            op: Op::Compare,
            left: Width::W32,
            right: Width::W16,
        })
    );
}

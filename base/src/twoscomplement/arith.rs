//! Stateless ripple-carry arithmetic over bit sequences.
//!
//! These functions require operands of equal, non-zero length.  The
//! width check for mismatched operands lives on the word operations
//! in [`super::word`], which are the only callers combining
//! independently-constructed sequences.


/// Ripple-carry addition, processing positions from least-significant
/// (the last index) to most-significant.  The returned flag is the
/// carry out of the most-significant position; it signals that the
/// unsigned sum did not fit in the sequence.
pub fn add(a: &[bool], b: &[bool]) -> (Vec<bool>, bool) {
    debug_assert_eq!(a.len(), b.len());
    let mut result = vec![false; a.len()];
    let mut carry = 0_u8;
    for i in (0..a.len()).rev() {
        let sum = u8::from(a[i]) + u8::from(b[i]) + carry;
        result[i] = sum & 1 == 1;
        carry = sum >> 1;
    }
    (result, carry != 0)
}

/// Ripple-borrow subtraction, processing positions from
/// least-significant to most-significant.  The final borrow is
/// returned but no caller consumes it; subtraction does not signal
/// overflow and the result wraps instead.
pub fn subtract(a: &[bool], b: &[bool]) -> (Vec<bool>, bool) {
    debug_assert_eq!(a.len(), b.len());
    let mut result = vec![false; a.len()];
    let mut borrow = false;
    for i in (0..a.len()).rev() {
        result[i] = a[i] ^ b[i] ^ borrow;
        borrow = (!a[i] && borrow) || (!a[i] && b[i]) || (b[i] && borrow);
    }
    (result, borrow)
}

/// Logical left shift by one position: the most-significant bit is
/// dropped and a 0 enters at the least-significant end.  This is the
/// doubling step of shift-and-add multiplication.
pub fn shift_left(bits: &[bool]) -> Vec<bool> {
    let size = bits.len();
    let mut result = vec![false; size];
    result[..size - 1].copy_from_slice(&bits[1..]);
    result
}

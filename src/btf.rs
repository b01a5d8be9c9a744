//! The half-butterfly primitive underlying every rotation stage.

/// Rounds `value` to `value / 2^bit`, round-half-up on ties.
///
/// The sum is formed in i64 because a weighted pair of 32-bit lanes can
/// exceed 32 bits before the shift; the result is guaranteed by the caller's
/// stage ranges to fit back into i32.
#[inline]
pub fn round_shift(value: i64, bit: i8) -> i32 {
    ((value + (1i64 << (bit - 1))) >> bit) as i32
}

/// One half of a butterfly: `round_shift(w0 * in0 + w1 * in1, bit)`.
///
/// `w0` and `w1` are coefficient-table entries (possibly negated) scaled by
/// `2^bit`, so the result is the fixed-point rotation of the input pair.
/// The exact integer semantics here are load-bearing: truncating instead of
/// rounding, or accumulating in 32 bits, desynchronizes the decoder from any
/// conforming encoder.
#[inline]
pub fn half_btf(w0: i32, in0: i32, w1: i32, in1: i32, bit: i8) -> i32 {
    round_shift(w0 as i64 * in0 as i64 + w1 as i64 * in1 as i64, bit)
}

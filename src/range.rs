//! Per-stage overflow verification.
//!
//! Compiled only into test builds and builds with the `range-check` feature.
//! Release builds get an empty inline stub, so the shipped numeric path is
//! identical with and without verification.

/// Checks that every element of `buf` fits the declared stage bound.
///
/// An element passes when the bit length of its absolute value does not
/// exceed `bit`. A violation means either a broken stage program or a
/// caller feeding out-of-contract coefficients, both defects rather than
/// runtime conditions, so the failure is an unrecoverable panic carrying
/// the stage, the offending lane, the bound, and the original input.
#[cfg(any(test, feature = "range-check"))]
pub(crate) fn range_check(stage: usize, input: &[i32], buf: &[i32], bit: i8) {
    for (i, &v) in buf.iter().enumerate() {
        let buf_bit = 32 - v.unsigned_abs().leading_zeros();
        if buf_bit > bit as u32 {
            panic!(
                "inverse transform overflow: stage {} lane {}: value {} \
                 needs {} bits, stage_range allows {} (input: {:?})",
                stage, i, v, buf_bit, bit, input
            );
        }
    }
}

#[cfg(not(any(test, feature = "range-check")))]
#[inline(always)]
pub(crate) fn range_check(_stage: usize, _input: &[i32], _buf: &[i32], _bit: i8) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_at_the_bound_pass() {
        // 8191 is 13 bits; -8191 likewise
        range_check(3, &[0; 4], &[8191, -8191, 0, 1], 13);
    }

    #[test]
    #[should_panic(expected = "stage 5 lane 2")]
    fn value_over_the_bound_panics_with_diagnostics() {
        range_check(5, &[1, 2, 3, 4], &[0, 12, 8192, 0], 13);
    }

    #[test]
    fn zero_has_zero_bits() {
        range_check(0, &[], &[0, 0], 0);
    }
}

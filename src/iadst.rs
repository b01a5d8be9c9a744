//! Inverse sine-basis transforms (sizes 4, 8, 16).
//!
//! Same butterfly discipline as the cosine kernels, with a different
//! shape: a signed input permutation up front, alternating rotation and
//! add/sub stages, and a final output permutation that interleaves the
//! two halves. Every rotation here is a full two-weight rotation, so the
//! sine kernels run one arithmetic stage deeper than the cosine kernel
//! of the same size.

use crate::btf::half_btf;
use crate::cospi::cospi_arr;
use crate::range::range_check;

/// 4-point inverse ADST.
pub fn inv_adst4(input: &[i32; 4], output: &mut [i32; 4], cos_bit: &[i8; 6], stage_range: &[i8; 6]) {
    let mut step = [0i32; 4];

    range_check(0, input, input, stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = -input[3];
    output[2] = -input[1];
    output[3] = input[2];
    range_check(1, input, output, stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = half_btf(cospi[32], output[2], cospi[32], output[3], cos_bit[2]);
    step[3] = half_btf(cospi[32], output[2], -cospi[32], output[3], cos_bit[2]);
    range_check(2, input, &step, stage_range[2]);

    // stage 3
    output[0] = step[0] + step[2];
    output[1] = step[1] + step[3];
    output[2] = step[0] - step[2];
    output[3] = step[1] - step[3];
    range_check(3, input, output, stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[0] = half_btf(cospi[8], output[0], cospi[56], output[1], cos_bit[4]);
    step[1] = half_btf(cospi[56], output[0], -cospi[8], output[1], cos_bit[4]);
    step[2] = half_btf(cospi[40], output[2], cospi[24], output[3], cos_bit[4]);
    step[3] = half_btf(cospi[24], output[2], -cospi[40], output[3], cos_bit[4]);
    range_check(4, input, &step, stage_range[4]);

    // stage 5
    output[0] = step[1];
    output[1] = step[2];
    output[2] = step[3];
    output[3] = step[0];
    range_check(5, input, output, stage_range[5]);
}

/// 8-point inverse ADST.
pub fn inv_adst8(input: &[i32; 8], output: &mut [i32; 8], cos_bit: &[i8; 8], stage_range: &[i8; 8]) {
    let mut step = [0i32; 8];

    range_check(0, input, input, stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = -input[7];
    output[2] = -input[3];
    output[3] = input[4];
    output[4] = -input[1];
    output[5] = input[6];
    output[6] = input[2];
    output[7] = -input[5];
    range_check(1, input, output, stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = half_btf(cospi[32], output[2], cospi[32], output[3], cos_bit[2]);
    step[3] = half_btf(cospi[32], output[2], -cospi[32], output[3], cos_bit[2]);
    step[4] = output[4];
    step[5] = output[5];
    step[6] = half_btf(cospi[32], output[6], cospi[32], output[7], cos_bit[2]);
    step[7] = half_btf(cospi[32], output[6], -cospi[32], output[7], cos_bit[2]);
    range_check(2, input, &step, stage_range[2]);

    // stage 3
    output[0] = step[0] + step[2];
    output[1] = step[1] + step[3];
    output[2] = step[0] - step[2];
    output[3] = step[1] - step[3];
    output[4] = step[4] + step[6];
    output[5] = step[5] + step[7];
    output[6] = step[4] - step[6];
    output[7] = step[5] - step[7];
    range_check(3, input, output, stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = output[2];
    step[3] = output[3];
    step[4] = half_btf(cospi[16], output[4], cospi[48], output[5], cos_bit[4]);
    step[5] = half_btf(cospi[48], output[4], -cospi[16], output[5], cos_bit[4]);
    step[6] = half_btf(-cospi[48], output[6], cospi[16], output[7], cos_bit[4]);
    step[7] = half_btf(cospi[16], output[6], cospi[48], output[7], cos_bit[4]);
    range_check(4, input, &step, stage_range[4]);

    // stage 5
    output[0] = step[0] + step[4];
    output[1] = step[1] + step[5];
    output[2] = step[2] + step[6];
    output[3] = step[3] + step[7];
    output[4] = step[0] - step[4];
    output[5] = step[1] - step[5];
    output[6] = step[2] - step[6];
    output[7] = step[3] - step[7];
    range_check(5, input, output, stage_range[5]);

    // stage 6
    let cospi = cospi_arr(cos_bit[6]);
    step[0] = half_btf(cospi[4], output[0], cospi[60], output[1], cos_bit[6]);
    step[1] = half_btf(cospi[60], output[0], -cospi[4], output[1], cos_bit[6]);
    step[2] = half_btf(cospi[20], output[2], cospi[44], output[3], cos_bit[6]);
    step[3] = half_btf(cospi[44], output[2], -cospi[20], output[3], cos_bit[6]);
    step[4] = half_btf(cospi[36], output[4], cospi[28], output[5], cos_bit[6]);
    step[5] = half_btf(cospi[28], output[4], -cospi[36], output[5], cos_bit[6]);
    step[6] = half_btf(cospi[52], output[6], cospi[12], output[7], cos_bit[6]);
    step[7] = half_btf(cospi[12], output[6], -cospi[52], output[7], cos_bit[6]);
    range_check(6, input, &step, stage_range[6]);

    // stage 7
    output[0] = step[1];
    output[1] = step[6];
    output[2] = step[3];
    output[3] = step[4];
    output[4] = step[5];
    output[5] = step[2];
    output[6] = step[7];
    output[7] = step[0];
    range_check(7, input, output, stage_range[7]);
}

/// 16-point inverse ADST.
pub fn inv_adst16(
    input: &[i32; 16],
    output: &mut [i32; 16],
    cos_bit: &[i8; 10],
    stage_range: &[i8; 10],
) {
    let mut step = [0i32; 16];

    range_check(0, input, input, stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = -input[15];
    output[2] = -input[7];
    output[3] = input[8];
    output[4] = -input[3];
    output[5] = input[12];
    output[6] = input[4];
    output[7] = -input[11];
    output[8] = -input[1];
    output[9] = input[14];
    output[10] = input[6];
    output[11] = -input[9];
    output[12] = input[2];
    output[13] = -input[13];
    output[14] = -input[5];
    output[15] = input[10];
    range_check(1, input, output, stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = half_btf(cospi[32], output[2], cospi[32], output[3], cos_bit[2]);
    step[3] = half_btf(cospi[32], output[2], -cospi[32], output[3], cos_bit[2]);
    step[4] = output[4];
    step[5] = output[5];
    step[6] = half_btf(cospi[32], output[6], cospi[32], output[7], cos_bit[2]);
    step[7] = half_btf(cospi[32], output[6], -cospi[32], output[7], cos_bit[2]);
    step[8] = output[8];
    step[9] = output[9];
    step[10] = half_btf(cospi[32], output[10], cospi[32], output[11], cos_bit[2]);
    step[11] = half_btf(cospi[32], output[10], -cospi[32], output[11], cos_bit[2]);
    step[12] = output[12];
    step[13] = output[13];
    step[14] = half_btf(cospi[32], output[14], cospi[32], output[15], cos_bit[2]);
    step[15] = half_btf(cospi[32], output[14], -cospi[32], output[15], cos_bit[2]);
    range_check(2, input, &step, stage_range[2]);

    // stage 3
    output[0] = step[0] + step[2];
    output[1] = step[1] + step[3];
    output[2] = step[0] - step[2];
    output[3] = step[1] - step[3];
    output[4] = step[4] + step[6];
    output[5] = step[5] + step[7];
    output[6] = step[4] - step[6];
    output[7] = step[5] - step[7];
    output[8] = step[8] + step[10];
    output[9] = step[9] + step[11];
    output[10] = step[8] - step[10];
    output[11] = step[9] - step[11];
    output[12] = step[12] + step[14];
    output[13] = step[13] + step[15];
    output[14] = step[12] - step[14];
    output[15] = step[13] - step[15];
    range_check(3, input, output, stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[..4].copy_from_slice(&output[..4]);
    step[4] = half_btf(cospi[16], output[4], cospi[48], output[5], cos_bit[4]);
    step[5] = half_btf(cospi[48], output[4], -cospi[16], output[5], cos_bit[4]);
    step[6] = half_btf(-cospi[48], output[6], cospi[16], output[7], cos_bit[4]);
    step[7] = half_btf(cospi[16], output[6], cospi[48], output[7], cos_bit[4]);
    step[8] = output[8];
    step[9] = output[9];
    step[10] = output[10];
    step[11] = output[11];
    step[12] = half_btf(cospi[16], output[12], cospi[48], output[13], cos_bit[4]);
    step[13] = half_btf(cospi[48], output[12], -cospi[16], output[13], cos_bit[4]);
    step[14] = half_btf(-cospi[48], output[14], cospi[16], output[15], cos_bit[4]);
    step[15] = half_btf(cospi[16], output[14], cospi[48], output[15], cos_bit[4]);
    range_check(4, input, &step, stage_range[4]);

    // stage 5
    output[0] = step[0] + step[4];
    output[1] = step[1] + step[5];
    output[2] = step[2] + step[6];
    output[3] = step[3] + step[7];
    output[4] = step[0] - step[4];
    output[5] = step[1] - step[5];
    output[6] = step[2] - step[6];
    output[7] = step[3] - step[7];
    output[8] = step[8] + step[12];
    output[9] = step[9] + step[13];
    output[10] = step[10] + step[14];
    output[11] = step[11] + step[15];
    output[12] = step[8] - step[12];
    output[13] = step[9] - step[13];
    output[14] = step[10] - step[14];
    output[15] = step[11] - step[15];
    range_check(5, input, output, stage_range[5]);

    // stage 6
    let cospi = cospi_arr(cos_bit[6]);
    step[..8].copy_from_slice(&output[..8]);
    step[8] = half_btf(cospi[8], output[8], cospi[56], output[9], cos_bit[6]);
    step[9] = half_btf(cospi[56], output[8], -cospi[8], output[9], cos_bit[6]);
    step[10] = half_btf(cospi[40], output[10], cospi[24], output[11], cos_bit[6]);
    step[11] = half_btf(cospi[24], output[10], -cospi[40], output[11], cos_bit[6]);
    step[12] = half_btf(-cospi[56], output[12], cospi[8], output[13], cos_bit[6]);
    step[13] = half_btf(cospi[8], output[12], cospi[56], output[13], cos_bit[6]);
    step[14] = half_btf(-cospi[24], output[14], cospi[40], output[15], cos_bit[6]);
    step[15] = half_btf(cospi[40], output[14], cospi[24], output[15], cos_bit[6]);
    range_check(6, input, &step, stage_range[6]);

    // stage 7
    for i in 0..8 {
        output[i] = step[i] + step[i + 8];
        output[i + 8] = step[i] - step[i + 8];
    }
    range_check(7, input, output, stage_range[7]);

    // stage 8
    let cospi = cospi_arr(cos_bit[8]);
    step[0] = half_btf(cospi[2], output[0], cospi[62], output[1], cos_bit[8]);
    step[1] = half_btf(cospi[62], output[0], -cospi[2], output[1], cos_bit[8]);
    step[2] = half_btf(cospi[10], output[2], cospi[54], output[3], cos_bit[8]);
    step[3] = half_btf(cospi[54], output[2], -cospi[10], output[3], cos_bit[8]);
    step[4] = half_btf(cospi[18], output[4], cospi[46], output[5], cos_bit[8]);
    step[5] = half_btf(cospi[46], output[4], -cospi[18], output[5], cos_bit[8]);
    step[6] = half_btf(cospi[26], output[6], cospi[38], output[7], cos_bit[8]);
    step[7] = half_btf(cospi[38], output[6], -cospi[26], output[7], cos_bit[8]);
    step[8] = half_btf(cospi[34], output[8], cospi[30], output[9], cos_bit[8]);
    step[9] = half_btf(cospi[30], output[8], -cospi[34], output[9], cos_bit[8]);
    step[10] = half_btf(cospi[42], output[10], cospi[22], output[11], cos_bit[8]);
    step[11] = half_btf(cospi[22], output[10], -cospi[42], output[11], cos_bit[8]);
    step[12] = half_btf(cospi[50], output[12], cospi[14], output[13], cos_bit[8]);
    step[13] = half_btf(cospi[14], output[12], -cospi[50], output[13], cos_bit[8]);
    step[14] = half_btf(cospi[58], output[14], cospi[6], output[15], cos_bit[8]);
    step[15] = half_btf(cospi[6], output[14], -cospi[58], output[15], cos_bit[8]);
    range_check(8, input, &step, stage_range[8]);

    // stage 9
    output[0] = step[1];
    output[1] = step[14];
    output[2] = step[3];
    output[3] = step[12];
    output[4] = step[5];
    output[5] = step[10];
    output[6] = step[7];
    output[7] = step[8];
    output[8] = step[9];
    output[9] = step[6];
    output[10] = step[11];
    output[11] = step[4];
    output[12] = step[13];
    output[13] = step[2];
    output[14] = step[15];
    output[15] = step[0];
    range_check(9, input, output, stage_range[9]);
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE6: [i8; 6] = [31; 6];
    const WIDE8: [i8; 8] = [31; 8];
    const WIDE10: [i8; 10] = [31; 10];

    #[test]
    fn adst4_dc_impulse_ramps_up() {
        let mut out = [0i32; 4];
        inv_adst4(&[1024, 0, 0, 0], &mut out, &[13; 6], &WIDE6);
        // lowest sine basis function: monotone quarter wave
        assert_eq!(out, [200, 569, 851, 1004]);
    }

    #[test]
    fn adst4_mid_impulse() {
        let mut out = [0i32; 4];
        let mut input = [0i32; 4];
        input[2] = 1024;
        inv_adst4(&input, &mut out, &[13; 6], &WIDE6);
        assert_eq!(out, [851, 200, -1004, 569]);
    }

    #[test]
    fn adst4_golden_vectors() {
        let mut out = [0i32; 4];
        inv_adst4(&[1541, -1392, 1538, 1401], &mut out, &[13; 6], &WIDE6);
        assert_eq!(out, [2180, -1374, 280, 3250]);
        inv_adst4(&[50, -1478, 352, 578], &mut out, &[13; 6], &WIDE6);
        assert_eq!(out, [48, -1833, -271, 1361]);
    }

    #[test]
    fn adst8_dc_impulse_ramps_up() {
        let mut out = [0i32; 8];
        let mut input = [0i32; 8];
        input[0] = 1024;
        inv_adst8(&input, &mut out, &[13; 8], &WIDE8);
        assert_eq!(out, [100, 297, 483, 650, 792, 903, 980, 1019]);
    }

    #[test]
    fn adst8_mid_impulse() {
        let mut out = [0i32; 8];
        let mut input = [0i32; 8];
        input[4] = 1024;
        inv_adst8(&input, &mut out, &[13; 8], &WIDE8);
        assert_eq!(out, [792, 483, -980, -100, 1019, -297, -903, 650]);
    }

    #[test]
    fn adst8_golden_vectors() {
        let mut out = [0i32; 8];
        inv_adst8(
            &[1860, -1006, 55, 1482, 334, 1305, -743, 264],
            &mut out,
            &[13; 8],
            &WIDE8,
        );
        assert_eq!(out, [1818, 1372, -1688, -536, 1541, 1326, 4777, 1072]);
        inv_adst8(
            &[1056, 1556, -455, 1063, 711, -429, 781, -2013],
            &mut out,
            &[13; 8],
            &WIDE8,
        );
        assert_eq!(out, [-70, 3802, -598, 2560, 747, 3939, -1762, -583]);
    }

    #[test]
    fn adst16_dc_impulse_ramps_up() {
        let mut out = [0i32; 16];
        let mut input = [0i32; 16];
        input[0] = 1024;
        inv_adst16(&input, &mut out, &[13; 10], &WIDE10);
        assert_eq!(
            out,
            [
                50, 150, 249, 345, 438, 527, 610, 688, 759, 823, 878, 926, 964, 993, 1013, 1023,
            ]
        );
    }

    #[test]
    fn adst16_mid_impulse() {
        let mut out = [0i32; 16];
        let mut input = [0i32; 16];
        input[8] = 1024;
        inv_adst16(&input, &mut out, &[13; 10], &WIDE10);
        assert_eq!(
            out,
            [
                759, 610, -878, -438, 964, 249, -1013, -50, 1023, -150, -993, 345, 926, -526,
                -822, 688,
            ]
        );
    }

    #[test]
    fn adst16_golden_vectors() {
        let mut out = [0i32; 16];
        inv_adst16(
            &[
                862, 371, -465, -642, 89, 1365, -154, 1296, 782, 1227, -2019, -1128, -390, -2038,
                495, -677,
            ],
            &mut out,
            &[13; 10],
            &WIDE10,
        );
        assert_eq!(
            out,
            [
                -2430, 4754, -937, -5102, 2785, 1399, -293, 2743, 4060, -475, -1853, 3155, -3443,
                4488, 1519, -1819,
            ]
        );
        inv_adst16(
            &[
                1590, -367, 113, 1366, 1786, 307, -408, -1880, -1187, 471, -1429, -1787, -1571,
                1366, 407, 976,
            ],
            &mut out,
            &[13; 10],
            &WIDE10,
        );
        assert_eq!(
            out,
            [
                -2191, -252, 8992, -1153, 445, -4157, -3488, 5541, 265, 252, 4053, 1733, 1964,
                -1284, 4078, 1293,
            ]
        );
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn adst4_reports_stage_overflow_under_tight_range() {
        let mut out = [0i32; 4];
        inv_adst4(&[8191, -8191, 8191, -8191], &mut out, &[13; 6], &[13; 6]);
    }

    proptest::proptest! {
        #[test]
        fn adst4_range_growth_is_bounded(input in proptest::array::uniform4(-8191i32..=8191)) {
            let mut out = [0i32; 4];
            inv_adst4(&input, &mut out, &[13; 6], &[13, 14, 15, 16, 17, 18]);
        }

        #[test]
        fn adst8_range_growth_is_bounded(input in proptest::array::uniform8(-8191i32..=8191)) {
            let mut out = [0i32; 8];
            inv_adst8(
                &input,
                &mut out,
                &[13; 8],
                &[13, 14, 15, 16, 17, 18, 19, 20],
            );
        }

        #[test]
        fn adst16_range_growth_is_bounded(input in proptest::array::uniform16(-8191i32..=8191)) {
            let mut out = [0i32; 16];
            inv_adst16(
                &input,
                &mut out,
                &[13; 10],
                &[13, 14, 15, 16, 17, 18, 19, 20, 21, 22],
            );
        }

        #[test]
        fn adst16_repeated_runs_are_bit_identical(input in proptest::array::uniform16(-4096i32..=4095)) {
            let mut a = [0i32; 16];
            let mut b = [0i32; 16];
            inv_adst16(&input, &mut a, &[13; 10], &[31; 10]);
            inv_adst16(&input, &mut b, &[13; 10], &[31; 10]);
            proptest::prop_assert_eq!(a, b);
        }
    }
}

//! Inverse cosine-basis transforms (sizes 4, 8, 16, 32).
//!
//! Each kernel is the fully unrolled butterfly factorization for its size:
//! an input permutation that splits the problem into even/odd halves,
//! rotation stages drawing weights from the cosine table, and add/sub
//! stages that merge the half-transforms back together. The index wiring,
//! table slots, and signs are normative and must not be reordered.
//!
//! `cos_bit` selects the multiply precision per stage (`cos_bit[0]` and the
//! entries for pure add/sub or permutation stages are unused but keep the
//! per-stage indexing uniform). `stage_range` is consumed only by the
//! verification builds; see the crate docs.

use crate::btf::half_btf;
use crate::cospi::cospi_arr;
use crate::range::range_check;

/// 4-point inverse DCT.
pub fn inv_dct4(input: &[i32; 4], output: &mut [i32; 4], cos_bit: &[i8; 4], stage_range: &[i8; 4]) {
    let mut step = [0i32; 4];

    range_check(0, input, input, stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = input[2];
    output[2] = input[1];
    output[3] = input[3];
    range_check(1, input, output, stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = half_btf(cospi[32], output[0], cospi[32], output[1], cos_bit[2]);
    step[1] = half_btf(cospi[32], output[0], -cospi[32], output[1], cos_bit[2]);
    step[2] = half_btf(cospi[48], output[2], -cospi[16], output[3], cos_bit[2]);
    step[3] = half_btf(cospi[16], output[2], cospi[48], output[3], cos_bit[2]);
    range_check(2, input, &step, stage_range[2]);

    // stage 3
    output[0] = step[0] + step[3];
    output[1] = step[1] + step[2];
    output[2] = step[1] - step[2];
    output[3] = step[0] - step[3];
    range_check(3, input, output, stage_range[3]);
}

/// 8-point inverse DCT.
pub fn inv_dct8(input: &[i32; 8], output: &mut [i32; 8], cos_bit: &[i8; 6], stage_range: &[i8; 6]) {
    let mut step = [0i32; 8];

    range_check(0, input, input, stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = input[4];
    output[2] = input[2];
    output[3] = input[6];
    output[4] = input[1];
    output[5] = input[5];
    output[6] = input[3];
    output[7] = input[7];
    range_check(1, input, output, stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = output[2];
    step[3] = output[3];
    step[4] = half_btf(cospi[56], output[4], -cospi[8], output[7], cos_bit[2]);
    step[5] = half_btf(cospi[24], output[5], -cospi[40], output[6], cos_bit[2]);
    step[6] = half_btf(cospi[40], output[5], cospi[24], output[6], cos_bit[2]);
    step[7] = half_btf(cospi[8], output[4], cospi[56], output[7], cos_bit[2]);
    range_check(2, input, &step, stage_range[2]);

    // stage 3
    let cospi = cospi_arr(cos_bit[3]);
    output[0] = half_btf(cospi[32], step[0], cospi[32], step[1], cos_bit[3]);
    output[1] = half_btf(cospi[32], step[0], -cospi[32], step[1], cos_bit[3]);
    output[2] = half_btf(cospi[48], step[2], -cospi[16], step[3], cos_bit[3]);
    output[3] = half_btf(cospi[16], step[2], cospi[48], step[3], cos_bit[3]);
    output[4] = step[4] + step[5];
    output[5] = step[4] - step[5];
    output[6] = -step[6] + step[7];
    output[7] = step[6] + step[7];
    range_check(3, input, output, stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[0] = output[0] + output[3];
    step[1] = output[1] + output[2];
    step[2] = output[1] - output[2];
    step[3] = output[0] - output[3];
    step[4] = output[4];
    step[5] = half_btf(-cospi[32], output[5], cospi[32], output[6], cos_bit[4]);
    step[6] = half_btf(cospi[32], output[5], cospi[32], output[6], cos_bit[4]);
    step[7] = output[7];
    range_check(4, input, &step, stage_range[4]);

    // stage 5
    output[0] = step[0] + step[7];
    output[1] = step[1] + step[6];
    output[2] = step[2] + step[5];
    output[3] = step[3] + step[4];
    output[4] = step[3] - step[4];
    output[5] = step[2] - step[5];
    output[6] = step[1] - step[6];
    output[7] = step[0] - step[7];
    range_check(5, input, output, stage_range[5]);
}

/// 16-point inverse DCT.
pub fn inv_dct16(
    input: &[i32; 16],
    output: &mut [i32; 16],
    cos_bit: &[i8; 8],
    stage_range: &[i8; 8],
) {
    let mut step = [0i32; 16];

    range_check(0, input, input, stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = input[8];
    output[2] = input[4];
    output[3] = input[12];
    output[4] = input[2];
    output[5] = input[10];
    output[6] = input[6];
    output[7] = input[14];
    output[8] = input[1];
    output[9] = input[9];
    output[10] = input[5];
    output[11] = input[13];
    output[12] = input[3];
    output[13] = input[11];
    output[14] = input[7];
    output[15] = input[15];
    range_check(1, input, output, stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[..8].copy_from_slice(&output[..8]);
    step[8] = half_btf(cospi[60], output[8], -cospi[4], output[15], cos_bit[2]);
    step[9] = half_btf(cospi[28], output[9], -cospi[36], output[14], cos_bit[2]);
    step[10] = half_btf(cospi[44], output[10], -cospi[20], output[13], cos_bit[2]);
    step[11] = half_btf(cospi[12], output[11], -cospi[52], output[12], cos_bit[2]);
    step[12] = half_btf(cospi[52], output[11], cospi[12], output[12], cos_bit[2]);
    step[13] = half_btf(cospi[20], output[10], cospi[44], output[13], cos_bit[2]);
    step[14] = half_btf(cospi[36], output[9], cospi[28], output[14], cos_bit[2]);
    step[15] = half_btf(cospi[4], output[8], cospi[60], output[15], cos_bit[2]);
    range_check(2, input, &step, stage_range[2]);

    // stage 3
    let cospi = cospi_arr(cos_bit[3]);
    output[..4].copy_from_slice(&step[..4]);
    output[4] = half_btf(cospi[56], step[4], -cospi[8], step[7], cos_bit[3]);
    output[5] = half_btf(cospi[24], step[5], -cospi[40], step[6], cos_bit[3]);
    output[6] = half_btf(cospi[40], step[5], cospi[24], step[6], cos_bit[3]);
    output[7] = half_btf(cospi[8], step[4], cospi[56], step[7], cos_bit[3]);
    output[8] = step[8] + step[9];
    output[9] = step[8] - step[9];
    output[10] = -step[10] + step[11];
    output[11] = step[10] + step[11];
    output[12] = step[12] + step[13];
    output[13] = step[12] - step[13];
    output[14] = -step[14] + step[15];
    output[15] = step[14] + step[15];
    range_check(3, input, output, stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[0] = half_btf(cospi[32], output[0], cospi[32], output[1], cos_bit[4]);
    step[1] = half_btf(cospi[32], output[0], -cospi[32], output[1], cos_bit[4]);
    step[2] = half_btf(cospi[48], output[2], -cospi[16], output[3], cos_bit[4]);
    step[3] = half_btf(cospi[16], output[2], cospi[48], output[3], cos_bit[4]);
    step[4] = output[4] + output[5];
    step[5] = output[4] - output[5];
    step[6] = -output[6] + output[7];
    step[7] = output[6] + output[7];
    step[8] = output[8];
    step[9] = half_btf(-cospi[16], output[9], cospi[48], output[14], cos_bit[4]);
    step[10] = half_btf(-cospi[48], output[10], -cospi[16], output[13], cos_bit[4]);
    step[11] = output[11];
    step[12] = output[12];
    step[13] = half_btf(-cospi[16], output[10], cospi[48], output[13], cos_bit[4]);
    step[14] = half_btf(cospi[48], output[9], cospi[16], output[14], cos_bit[4]);
    step[15] = output[15];
    range_check(4, input, &step, stage_range[4]);

    // stage 5
    let cospi = cospi_arr(cos_bit[5]);
    output[0] = step[0] + step[3];
    output[1] = step[1] + step[2];
    output[2] = step[1] - step[2];
    output[3] = step[0] - step[3];
    output[4] = step[4];
    output[5] = half_btf(-cospi[32], step[5], cospi[32], step[6], cos_bit[5]);
    output[6] = half_btf(cospi[32], step[5], cospi[32], step[6], cos_bit[5]);
    output[7] = step[7];
    output[8] = step[8] + step[11];
    output[9] = step[9] + step[10];
    output[10] = step[9] - step[10];
    output[11] = step[8] - step[11];
    output[12] = -step[12] + step[15];
    output[13] = -step[13] + step[14];
    output[14] = step[13] + step[14];
    output[15] = step[12] + step[15];
    range_check(5, input, output, stage_range[5]);

    // stage 6
    let cospi = cospi_arr(cos_bit[6]);
    step[0] = output[0] + output[7];
    step[1] = output[1] + output[6];
    step[2] = output[2] + output[5];
    step[3] = output[3] + output[4];
    step[4] = output[3] - output[4];
    step[5] = output[2] - output[5];
    step[6] = output[1] - output[6];
    step[7] = output[0] - output[7];
    step[8] = output[8];
    step[9] = output[9];
    step[10] = half_btf(-cospi[32], output[10], cospi[32], output[13], cos_bit[6]);
    step[11] = half_btf(-cospi[32], output[11], cospi[32], output[12], cos_bit[6]);
    step[12] = half_btf(cospi[32], output[11], cospi[32], output[12], cos_bit[6]);
    step[13] = half_btf(cospi[32], output[10], cospi[32], output[13], cos_bit[6]);
    step[14] = output[14];
    step[15] = output[15];
    range_check(6, input, &step, stage_range[6]);

    // stage 7
    for i in 0..8 {
        output[i] = step[i] + step[15 - i];
        output[15 - i] = step[i] - step[15 - i];
    }
    range_check(7, input, output, stage_range[7]);
}

/// 32-point inverse DCT.
pub fn inv_dct32(
    input: &[i32; 32],
    output: &mut [i32; 32],
    cos_bit: &[i8; 10],
    stage_range: &[i8; 10],
) {
    let mut step = [0i32; 32];

    range_check(0, input, input, stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = input[16];
    output[2] = input[8];
    output[3] = input[24];
    output[4] = input[4];
    output[5] = input[20];
    output[6] = input[12];
    output[7] = input[28];
    output[8] = input[2];
    output[9] = input[18];
    output[10] = input[10];
    output[11] = input[26];
    output[12] = input[6];
    output[13] = input[22];
    output[14] = input[14];
    output[15] = input[30];
    output[16] = input[1];
    output[17] = input[17];
    output[18] = input[9];
    output[19] = input[25];
    output[20] = input[5];
    output[21] = input[21];
    output[22] = input[13];
    output[23] = input[29];
    output[24] = input[3];
    output[25] = input[19];
    output[26] = input[11];
    output[27] = input[27];
    output[28] = input[7];
    output[29] = input[23];
    output[30] = input[15];
    output[31] = input[31];
    range_check(1, input, output, stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[..16].copy_from_slice(&output[..16]);
    step[16] = half_btf(cospi[62], output[16], -cospi[2], output[31], cos_bit[2]);
    step[17] = half_btf(cospi[30], output[17], -cospi[34], output[30], cos_bit[2]);
    step[18] = half_btf(cospi[46], output[18], -cospi[18], output[29], cos_bit[2]);
    step[19] = half_btf(cospi[14], output[19], -cospi[50], output[28], cos_bit[2]);
    step[20] = half_btf(cospi[54], output[20], -cospi[10], output[27], cos_bit[2]);
    step[21] = half_btf(cospi[22], output[21], -cospi[42], output[26], cos_bit[2]);
    step[22] = half_btf(cospi[38], output[22], -cospi[26], output[25], cos_bit[2]);
    step[23] = half_btf(cospi[6], output[23], -cospi[58], output[24], cos_bit[2]);
    step[24] = half_btf(cospi[58], output[23], cospi[6], output[24], cos_bit[2]);
    step[25] = half_btf(cospi[26], output[22], cospi[38], output[25], cos_bit[2]);
    step[26] = half_btf(cospi[42], output[21], cospi[22], output[26], cos_bit[2]);
    step[27] = half_btf(cospi[10], output[20], cospi[54], output[27], cos_bit[2]);
    step[28] = half_btf(cospi[50], output[19], cospi[14], output[28], cos_bit[2]);
    step[29] = half_btf(cospi[18], output[18], cospi[46], output[29], cos_bit[2]);
    step[30] = half_btf(cospi[34], output[17], cospi[30], output[30], cos_bit[2]);
    step[31] = half_btf(cospi[2], output[16], cospi[62], output[31], cos_bit[2]);
    range_check(2, input, &step, stage_range[2]);

    // stage 3
    let cospi = cospi_arr(cos_bit[3]);
    output[..8].copy_from_slice(&step[..8]);
    output[8] = half_btf(cospi[60], step[8], -cospi[4], step[15], cos_bit[3]);
    output[9] = half_btf(cospi[28], step[9], -cospi[36], step[14], cos_bit[3]);
    output[10] = half_btf(cospi[44], step[10], -cospi[20], step[13], cos_bit[3]);
    output[11] = half_btf(cospi[12], step[11], -cospi[52], step[12], cos_bit[3]);
    output[12] = half_btf(cospi[52], step[11], cospi[12], step[12], cos_bit[3]);
    output[13] = half_btf(cospi[20], step[10], cospi[44], step[13], cos_bit[3]);
    output[14] = half_btf(cospi[36], step[9], cospi[28], step[14], cos_bit[3]);
    output[15] = half_btf(cospi[4], step[8], cospi[60], step[15], cos_bit[3]);
    output[16] = step[16] + step[17];
    output[17] = step[16] - step[17];
    output[18] = -step[18] + step[19];
    output[19] = step[18] + step[19];
    output[20] = step[20] + step[21];
    output[21] = step[20] - step[21];
    output[22] = -step[22] + step[23];
    output[23] = step[22] + step[23];
    output[24] = step[24] + step[25];
    output[25] = step[24] - step[25];
    output[26] = -step[26] + step[27];
    output[27] = step[26] + step[27];
    output[28] = step[28] + step[29];
    output[29] = step[28] - step[29];
    output[30] = -step[30] + step[31];
    output[31] = step[30] + step[31];
    range_check(3, input, output, stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[..4].copy_from_slice(&output[..4]);
    step[4] = half_btf(cospi[56], output[4], -cospi[8], output[7], cos_bit[4]);
    step[5] = half_btf(cospi[24], output[5], -cospi[40], output[6], cos_bit[4]);
    step[6] = half_btf(cospi[40], output[5], cospi[24], output[6], cos_bit[4]);
    step[7] = half_btf(cospi[8], output[4], cospi[56], output[7], cos_bit[4]);
    step[8] = output[8] + output[9];
    step[9] = output[8] - output[9];
    step[10] = -output[10] + output[11];
    step[11] = output[10] + output[11];
    step[12] = output[12] + output[13];
    step[13] = output[12] - output[13];
    step[14] = -output[14] + output[15];
    step[15] = output[14] + output[15];
    step[16] = output[16];
    step[17] = half_btf(-cospi[8], output[17], cospi[56], output[30], cos_bit[4]);
    step[18] = half_btf(-cospi[56], output[18], -cospi[8], output[29], cos_bit[4]);
    step[19] = output[19];
    step[20] = output[20];
    step[21] = half_btf(-cospi[40], output[21], cospi[24], output[26], cos_bit[4]);
    step[22] = half_btf(-cospi[24], output[22], -cospi[40], output[25], cos_bit[4]);
    step[23] = output[23];
    step[24] = output[24];
    step[25] = half_btf(-cospi[40], output[22], cospi[24], output[25], cos_bit[4]);
    step[26] = half_btf(cospi[24], output[21], cospi[40], output[26], cos_bit[4]);
    step[27] = output[27];
    step[28] = output[28];
    step[29] = half_btf(-cospi[8], output[18], cospi[56], output[29], cos_bit[4]);
    step[30] = half_btf(cospi[56], output[17], cospi[8], output[30], cos_bit[4]);
    step[31] = output[31];
    range_check(4, input, &step, stage_range[4]);

    // stage 5
    let cospi = cospi_arr(cos_bit[5]);
    output[0] = half_btf(cospi[32], step[0], cospi[32], step[1], cos_bit[5]);
    output[1] = half_btf(cospi[32], step[0], -cospi[32], step[1], cos_bit[5]);
    output[2] = half_btf(cospi[48], step[2], -cospi[16], step[3], cos_bit[5]);
    output[3] = half_btf(cospi[16], step[2], cospi[48], step[3], cos_bit[5]);
    output[4] = step[4] + step[5];
    output[5] = step[4] - step[5];
    output[6] = -step[6] + step[7];
    output[7] = step[6] + step[7];
    output[8] = step[8];
    output[9] = half_btf(-cospi[16], step[9], cospi[48], step[14], cos_bit[5]);
    output[10] = half_btf(-cospi[48], step[10], -cospi[16], step[13], cos_bit[5]);
    output[11] = step[11];
    output[12] = step[12];
    output[13] = half_btf(-cospi[16], step[10], cospi[48], step[13], cos_bit[5]);
    output[14] = half_btf(cospi[48], step[9], cospi[16], step[14], cos_bit[5]);
    output[15] = step[15];
    output[16] = step[16] + step[19];
    output[17] = step[17] + step[18];
    output[18] = step[17] - step[18];
    output[19] = step[16] - step[19];
    output[20] = -step[20] + step[23];
    output[21] = -step[21] + step[22];
    output[22] = step[21] + step[22];
    output[23] = step[20] + step[23];
    output[24] = step[24] + step[27];
    output[25] = step[25] + step[26];
    output[26] = step[25] - step[26];
    output[27] = step[24] - step[27];
    output[28] = -step[28] + step[31];
    output[29] = -step[29] + step[30];
    output[30] = step[29] + step[30];
    output[31] = step[28] + step[31];
    range_check(5, input, output, stage_range[5]);

    // stage 6
    let cospi = cospi_arr(cos_bit[6]);
    step[0] = output[0] + output[3];
    step[1] = output[1] + output[2];
    step[2] = output[1] - output[2];
    step[3] = output[0] - output[3];
    step[4] = output[4];
    step[5] = half_btf(-cospi[32], output[5], cospi[32], output[6], cos_bit[6]);
    step[6] = half_btf(cospi[32], output[5], cospi[32], output[6], cos_bit[6]);
    step[7] = output[7];
    step[8] = output[8] + output[11];
    step[9] = output[9] + output[10];
    step[10] = output[9] - output[10];
    step[11] = output[8] - output[11];
    step[12] = -output[12] + output[15];
    step[13] = -output[13] + output[14];
    step[14] = output[13] + output[14];
    step[15] = output[12] + output[15];
    step[16] = output[16];
    step[17] = output[17];
    step[18] = half_btf(-cospi[16], output[18], cospi[48], output[29], cos_bit[6]);
    step[19] = half_btf(-cospi[16], output[19], cospi[48], output[28], cos_bit[6]);
    step[20] = half_btf(-cospi[48], output[20], -cospi[16], output[27], cos_bit[6]);
    step[21] = half_btf(-cospi[48], output[21], -cospi[16], output[26], cos_bit[6]);
    step[22] = output[22];
    step[23] = output[23];
    step[24] = output[24];
    step[25] = output[25];
    step[26] = half_btf(-cospi[16], output[21], cospi[48], output[26], cos_bit[6]);
    step[27] = half_btf(-cospi[16], output[20], cospi[48], output[27], cos_bit[6]);
    step[28] = half_btf(cospi[48], output[19], cospi[16], output[28], cos_bit[6]);
    step[29] = half_btf(cospi[48], output[18], cospi[16], output[29], cos_bit[6]);
    step[30] = output[30];
    step[31] = output[31];
    range_check(6, input, &step, stage_range[6]);

    // stage 7
    let cospi = cospi_arr(cos_bit[7]);
    output[0] = step[0] + step[7];
    output[1] = step[1] + step[6];
    output[2] = step[2] + step[5];
    output[3] = step[3] + step[4];
    output[4] = step[3] - step[4];
    output[5] = step[2] - step[5];
    output[6] = step[1] - step[6];
    output[7] = step[0] - step[7];
    output[8] = step[8];
    output[9] = step[9];
    output[10] = half_btf(-cospi[32], step[10], cospi[32], step[13], cos_bit[7]);
    output[11] = half_btf(-cospi[32], step[11], cospi[32], step[12], cos_bit[7]);
    output[12] = half_btf(cospi[32], step[11], cospi[32], step[12], cos_bit[7]);
    output[13] = half_btf(cospi[32], step[10], cospi[32], step[13], cos_bit[7]);
    output[14] = step[14];
    output[15] = step[15];
    output[16] = step[16] + step[23];
    output[17] = step[17] + step[22];
    output[18] = step[18] + step[21];
    output[19] = step[19] + step[20];
    output[20] = step[19] - step[20];
    output[21] = step[18] - step[21];
    output[22] = step[17] - step[22];
    output[23] = step[16] - step[23];
    output[24] = -step[24] + step[31];
    output[25] = -step[25] + step[30];
    output[26] = -step[26] + step[29];
    output[27] = -step[27] + step[28];
    output[28] = step[27] + step[28];
    output[29] = step[26] + step[29];
    output[30] = step[25] + step[30];
    output[31] = step[24] + step[31];
    range_check(7, input, output, stage_range[7]);

    // stage 8
    let cospi = cospi_arr(cos_bit[8]);
    for i in 0..8 {
        step[i] = output[i] + output[15 - i];
        step[15 - i] = output[i] - output[15 - i];
    }
    step[16] = output[16];
    step[17] = output[17];
    step[18] = output[18];
    step[19] = output[19];
    step[20] = half_btf(-cospi[32], output[20], cospi[32], output[27], cos_bit[8]);
    step[21] = half_btf(-cospi[32], output[21], cospi[32], output[26], cos_bit[8]);
    step[22] = half_btf(-cospi[32], output[22], cospi[32], output[25], cos_bit[8]);
    step[23] = half_btf(-cospi[32], output[23], cospi[32], output[24], cos_bit[8]);
    step[24] = half_btf(cospi[32], output[23], cospi[32], output[24], cos_bit[8]);
    step[25] = half_btf(cospi[32], output[22], cospi[32], output[25], cos_bit[8]);
    step[26] = half_btf(cospi[32], output[21], cospi[32], output[26], cos_bit[8]);
    step[27] = half_btf(cospi[32], output[20], cospi[32], output[27], cos_bit[8]);
    step[28] = output[28];
    step[29] = output[29];
    step[30] = output[30];
    step[31] = output[31];
    range_check(8, input, &step, stage_range[8]);

    // stage 9
    for i in 0..16 {
        output[i] = step[i] + step[31 - i];
        output[31 - i] = step[i] - step[31 - i];
    }
    range_check(9, input, output, stage_range[9]);
}

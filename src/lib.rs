//! Fixed-point inverse 1-D frequency transforms for AV1-family codecs.
//!
//! This crate implements the reference inverse cosine-basis transforms
//! (sizes 4, 8, 16, 32) and inverse sine-basis transforms (sizes 4, 8, 16)
//! used to turn dequantized frequency-domain coefficients back into spatial
//! residuals. Each transform is a fast butterfly factorization: a fixed,
//! straight-line sequence of permutation, rotation, and add/sub stages,
//! with every multiply going through the [`half_btf`] primitive.
//!
//! The wiring, coefficient selection, and rounding of every stage are
//! normative: a conforming decoder must reproduce them bit-exactly, so
//! none of it is tunable. The caller supplies one fixed-point precision
//! (`cos_bit`) and one verification bound (`stage_range`) per stage; the
//! stage counts are fixed per kernel and encoded in the array lengths.
//!
//! The kernels are pure functions over stack-local buffers: no allocation,
//! no shared state, safe to call concurrently from any number of threads.
//!
//! ```
//! let input = [1024, 0, 0, 0];
//! let mut output = [0i32; 4];
//! witx1d::inv_dct4(&input, &mut output, &[13; 4], &[16; 4]);
//! assert_eq!(output, [724; 4]); // 1024 * cos(pi/4), rounded
//! ```
//!
//! Out-of-contract intermediate values are diagnosed only in verification
//! builds (test builds and the `range-check` feature); release builds run
//! the bare numeric path.

#![forbid(unsafe_code)]

pub mod btf;
pub mod cospi;
pub mod iadst;
pub mod idct;
mod range;

pub use btf::{half_btf, round_shift};
pub use cospi::{COS_BIT_MAX, COS_BIT_MIN};
pub use iadst::{inv_adst4, inv_adst8, inv_adst16};
pub use idct::{inv_dct4, inv_dct8, inv_dct16, inv_dct32};

/// Stage count of [`inv_dct4`], including stage 0 (the raw input).
pub const INV_DCT4_STAGES: usize = 4;
/// Stage count of [`inv_dct8`].
pub const INV_DCT8_STAGES: usize = 6;
/// Stage count of [`inv_dct16`].
pub const INV_DCT16_STAGES: usize = 8;
/// Stage count of [`inv_dct32`].
pub const INV_DCT32_STAGES: usize = 10;
/// Stage count of [`inv_adst4`].
pub const INV_ADST4_STAGES: usize = 6;
/// Stage count of [`inv_adst8`].
pub const INV_ADST8_STAGES: usize = 8;
/// Stage count of [`inv_adst16`].
pub const INV_ADST16_STAGES: usize = 10;

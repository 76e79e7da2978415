//! binary16 bit layout and named constants.
//!
//! A half value is a plain `u16`, partitioned as `seeeeemmmmmmmmmm`:
//! 1 sign bit, 5 exponent bits (bias 15), 10 mantissa bits.

pub(crate) const SIGN_SHIFT: u32 = 15;
pub(crate) const EXPONENT_SHIFT: u32 = 10;
pub(crate) const SIGN_MASK: u16 = 0x8000;
pub(crate) const SHIFTED_EXPONENT_MASK: u16 = 0x1f;
pub(crate) const EXPONENT_MASK: u16 = 0x7c00;
pub(crate) const SIGNIFICAND_MASK: u16 = 0x03ff;
pub(crate) const EXPONENT_SIGNIFICAND_MASK: u16 = 0x7fff;
pub(crate) const EXPONENT_BIAS: i32 = 15;

// The binary32 counterpart layout. Only the codec looks at these.
pub(crate) const FP32_SIGN_SHIFT: u32 = 31;
pub(crate) const FP32_EXPONENT_SHIFT: u32 = 23;
pub(crate) const FP32_SHIFTED_EXPONENT_MASK: u32 = 0xff;
pub(crate) const FP32_SIGNIFICAND_MASK: u32 = 0x7f_ffff;
pub(crate) const FP32_EXPONENT_BIAS: i32 = 127;
pub(crate) const FP32_QNAN_MASK: u32 = 0x40_0000;

/// Positive zero, `+0.0`.
pub const POSITIVE_ZERO: u16 = 0x0000;
/// Negative zero, `-0.0`. A distinct bit pattern from [`POSITIVE_ZERO`] but
/// numerically equal to it.
pub const NEGATIVE_ZERO: u16 = 0x8000;
/// The canonical quiet NaN. Any pattern with exponent 31 and a non-zero
/// mantissa is a NaN; this is the one the crate produces.
pub const NAN: u16 = 0x7e00;
/// Positive infinity.
pub const POSITIVE_INFINITY: u16 = 0x7c00;
/// Negative infinity.
pub const NEGATIVE_INFINITY: u16 = 0xfc00;
/// Largest finite value, 65504.0.
pub const MAX_VALUE: u16 = 0x7bff;
/// Smallest positive value, the subnormal 2^-24.
pub const MIN_VALUE: u16 = 0x0001;
/// Smallest positive normalized value, 2^-14.
pub const MIN_NORMAL: u16 = 0x0400;
/// Most negative finite value, -65504.0.
pub const LOWEST_VALUE: u16 = 0xfbff;
/// Difference between 1.0 and the next representable value, 2^-10.
pub const EPSILON: u16 = 0x1400;
/// Largest unbiased exponent of a finite value.
pub const MAX_EXPONENT: i32 = 15;
/// Smallest unbiased exponent of a normalized value.
pub const MIN_EXPONENT: i32 = -14;
/// Width of the format in bits.
pub const SIZE: u32 = 16;

/// Sign bit, 0 or 1.
pub(crate) const fn sign(h: u16) -> u16 {
    h >> SIGN_SHIFT
}

/// Biased exponent field, 0..=31.
pub(crate) const fn exponent(h: u16) -> u16 {
    (h >> EXPONENT_SHIFT) & SHIFTED_EXPONENT_MASK
}

/// Raw 10-bit mantissa field.
pub(crate) const fn significand(h: u16) -> u16 {
    h & SIGNIFICAND_MASK
}

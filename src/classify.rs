//! Classification predicates over half bit patterns.

use crate::bits::{EXPONENT_MASK, SHIFTED_EXPONENT_MASK, exponent, significand};

/// Returns true if `h` is a NaN: exponent field all ones, non-zero mantissa.
/// The sign bit and the mantissa payload do not matter.
pub const fn is_nan(h: u16) -> bool {
    exponent(h) == SHIFTED_EXPONENT_MASK && significand(h) != 0
}

/// Returns true if `h` is positive or negative infinity.
pub const fn is_infinite(h: u16) -> bool {
    exponent(h) == SHIFTED_EXPONENT_MASK && significand(h) == 0
}

/// Returns true if `h` is a normalized value: finite, non-zero and not
/// subnormal. Zeroes, subnormals, infinities and NaNs are all not normalized.
pub const fn is_normalized(h: u16) -> bool {
    let e = h & EXPONENT_MASK;
    e != 0 && e != EXPONENT_MASK
}

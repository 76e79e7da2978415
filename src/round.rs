//! Integral rounding operators.
//!
//! All four work directly on the bit pattern. NaN, infinities and values that
//! are already integral (every half with magnitude >= 1024 is) pass through
//! unchanged. Results keep the operand's sign, so rounding a small negative
//! fraction toward zero or up yields -0, not +0.

use crate::bits::{EXPONENT_SIGNIFICAND_MASK, SIGN_MASK};

// 1.0 and 1024.0 as bit patterns. Below ONE the integral part is zero; at
// INTEGRAL_LIMIT and above the spacing between consecutive values is at
// least 1, so everything there (infinities and NaNs included) is left alone.
const ONE: u16 = 0x3c00;
const INTEGRAL_LIMIT: u16 = 0x6400;

/// Number of mantissa bits of `abs` that sit below the binary point.
/// Only meaningful for ONE <= abs < INTEGRAL_LIMIT, where it is 1..=10.
const fn fraction_bits(abs: u16) -> u32 {
    (25 - (abs >> 10)) as u32
}

/// Smallest integral value greater than or equal to `h`.
///
/// Values in (-1, 0) round to -0.
pub const fn ceil(h: u16) -> u16 {
    let abs = h & EXPONENT_SIGNIFICAND_MASK;
    if abs < ONE {
        if h & SIGN_MASK == 0 && abs != 0 {
            ONE
        } else {
            h & SIGN_MASK
        }
    } else if abs < INTEGRAL_LIMIT {
        let mask = (1u16 << fraction_bits(abs)) - 1;
        if h & SIGN_MASK != 0 {
            h & !mask
        } else {
            (h + mask) & !mask
        }
    } else {
        h
    }
}

/// Largest integral value less than or equal to `h`.
///
/// Values in (0, 1) round to +0.
pub const fn floor(h: u16) -> u16 {
    let abs = h & EXPONENT_SIGNIFICAND_MASK;
    if abs < ONE {
        if h & SIGN_MASK != 0 && abs != 0 {
            SIGN_MASK | ONE
        } else {
            h & SIGN_MASK
        }
    } else if abs < INTEGRAL_LIMIT {
        let mask = (1u16 << fraction_bits(abs)) - 1;
        if h & SIGN_MASK != 0 {
            (h + mask) & !mask
        } else {
            h & !mask
        }
    } else {
        h
    }
}

/// Nearest integral value, ties to even.
pub const fn rint(h: u16) -> u16 {
    let abs = h & EXPONENT_SIGNIFICAND_MASK;
    if abs < ONE {
        // 0x3800 is 0.5; the tie rounds to zero, the even neighbor.
        if abs > 0x3800 {
            (h & SIGN_MASK) | ONE
        } else {
            h & SIGN_MASK
        }
    } else if abs < INTEGRAL_LIMIT {
        let bits = fraction_bits(abs);
        let mask = (1u16 << bits) - 1;
        let half = 1u16 << (bits - 1);
        // Adding half-1 rounds ties down, half rounds them up; picking by
        // the parity of the lowest integral bit makes ties go to even. The
        // carry propagates into the exponent when the mantissa overflows.
        let lsb = (h >> bits) & 1;
        (h + half - 1 + lsb) & !mask
    } else {
        h
    }
}

/// Integral part of `h`, rounding toward zero.
pub const fn trunc(h: u16) -> u16 {
    let abs = h & EXPONENT_SIGNIFICAND_MASK;
    if abs < ONE {
        h & SIGN_MASK
    } else if abs < INTEGRAL_LIMIT {
        h & !((1u16 << fraction_bits(abs)) - 1)
    } else {
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{
        LOWEST_VALUE, MAX_VALUE, MIN_NORMAL, MIN_VALUE, NAN, NEGATIVE_INFINITY, NEGATIVE_ZERO,
        POSITIVE_INFINITY, POSITIVE_ZERO,
    };
    use crate::convert::{to_float, to_half};

    #[test]
    fn ceil_special_values() {
        assert_eq!(ceil(POSITIVE_INFINITY), POSITIVE_INFINITY);
        assert_eq!(ceil(NEGATIVE_INFINITY), NEGATIVE_INFINITY);
        assert_eq!(ceil(POSITIVE_ZERO), POSITIVE_ZERO);
        assert_eq!(ceil(NEGATIVE_ZERO), NEGATIVE_ZERO);
        assert_eq!(ceil(NAN), NAN);
        assert_eq!(ceil(LOWEST_VALUE), LOWEST_VALUE);
    }

    #[test]
    fn ceil_fractions() {
        assert_eq!(to_float(ceil(MIN_NORMAL)), 1.0);
        assert_eq!(to_float(ceil(0x3ff)), 1.0);
        assert_eq!(to_float(ceil(to_half(0.2))), 1.0);
        assert_eq!(ceil(to_half(-0.2)), NEGATIVE_ZERO);
        assert_eq!(to_float(ceil(to_half(0.7))), 1.0);
        assert_eq!(ceil(to_half(-0.7)), NEGATIVE_ZERO);
        assert_eq!(to_float(ceil(to_half(124.7))), 125.0);
        assert_eq!(to_float(ceil(to_half(-124.7))), -124.0);
        assert_eq!(to_float(ceil(to_half(124.2))), 125.0);
        assert_eq!(to_float(ceil(to_half(-124.2))), -124.0);
    }

    #[test]
    fn floor_special_values() {
        assert_eq!(floor(POSITIVE_INFINITY), POSITIVE_INFINITY);
        assert_eq!(floor(NEGATIVE_INFINITY), NEGATIVE_INFINITY);
        assert_eq!(floor(POSITIVE_ZERO), POSITIVE_ZERO);
        assert_eq!(floor(NEGATIVE_ZERO), NEGATIVE_ZERO);
        assert_eq!(floor(NAN), NAN);
        assert_eq!(floor(LOWEST_VALUE), LOWEST_VALUE);
    }

    #[test]
    fn floor_fractions() {
        assert_eq!(floor(MIN_NORMAL), POSITIVE_ZERO);
        assert_eq!(floor(0x3ff), POSITIVE_ZERO);
        assert_eq!(floor(to_half(0.2)), POSITIVE_ZERO);
        assert_eq!(to_float(floor(to_half(-0.2))), -1.0);
        assert_eq!(to_float(floor(to_half(-0.7))), -1.0);
        assert_eq!(floor(to_half(0.7)), POSITIVE_ZERO);
        assert_eq!(to_float(floor(to_half(124.7))), 124.0);
        assert_eq!(to_float(floor(to_half(-124.7))), -125.0);
        assert_eq!(to_float(floor(to_half(124.2))), 124.0);
        assert_eq!(to_float(floor(to_half(-124.2))), -125.0);
    }

    #[test]
    fn rint_special_values() {
        assert_eq!(rint(POSITIVE_INFINITY), POSITIVE_INFINITY);
        assert_eq!(rint(NEGATIVE_INFINITY), NEGATIVE_INFINITY);
        assert_eq!(rint(POSITIVE_ZERO), POSITIVE_ZERO);
        assert_eq!(rint(NEGATIVE_ZERO), NEGATIVE_ZERO);
        assert_eq!(rint(NAN), NAN);
        assert_eq!(rint(LOWEST_VALUE), LOWEST_VALUE);
    }

    #[test]
    fn rint_nearest() {
        assert_eq!(rint(MIN_VALUE), POSITIVE_ZERO);
        assert_eq!(rint(0x200), POSITIVE_ZERO);
        assert_eq!(rint(0x3ff), POSITIVE_ZERO);
        assert_eq!(rint(to_half(0.2)), POSITIVE_ZERO);
        assert_eq!(rint(to_half(-0.2)), NEGATIVE_ZERO);
        assert_eq!(to_float(rint(to_half(0.7))), 1.0);
        assert_eq!(to_float(rint(to_half(-0.7))), -1.0);
        assert_eq!(to_float(rint(to_half(124.7))), 125.0);
        assert_eq!(to_float(rint(to_half(-124.7))), -125.0);
        assert_eq!(to_float(rint(to_half(124.2))), 124.0);
        assert_eq!(to_float(rint(to_half(-124.2))), -124.0);
    }

    #[test]
    fn rint_ties_to_even() {
        assert_eq!(rint(to_half(0.5)), POSITIVE_ZERO);
        assert_eq!(rint(to_half(-0.5)), NEGATIVE_ZERO);
        assert_eq!(to_float(rint(to_half(1.5))), 2.0);
        assert_eq!(to_float(rint(to_half(-1.5))), -2.0);
        assert_eq!(to_float(rint(to_half(2.5))), 2.0);
        assert_eq!(to_float(rint(to_half(-2.5))), -2.0);
        assert_eq!(to_float(rint(to_half(3.5))), 4.0);
        assert_eq!(to_float(rint(to_half(4.5))), 4.0);
        assert_eq!(to_float(rint(to_half(1023.5))), 1024.0);
        // Just above and below a tie still round to nearest.
        assert_eq!(to_float(rint(to_half(2.50195))), 3.0);
        assert_eq!(to_float(rint(to_half(2.49805))), 2.0);
    }

    #[test]
    fn trunc_toward_zero() {
        assert_eq!(trunc(POSITIVE_INFINITY), POSITIVE_INFINITY);
        assert_eq!(trunc(NEGATIVE_INFINITY), NEGATIVE_INFINITY);
        assert_eq!(trunc(POSITIVE_ZERO), POSITIVE_ZERO);
        assert_eq!(trunc(NEGATIVE_ZERO), NEGATIVE_ZERO);
        assert_eq!(trunc(NAN), NAN);
        assert_eq!(trunc(LOWEST_VALUE), LOWEST_VALUE);
        assert_eq!(trunc(to_half(0.2)), POSITIVE_ZERO);
        assert_eq!(trunc(to_half(-0.2)), NEGATIVE_ZERO);
        assert_eq!(trunc(to_half(0.7)), POSITIVE_ZERO);
        assert_eq!(trunc(to_half(-0.7)), NEGATIVE_ZERO);
        assert_eq!(to_float(trunc(to_half(124.7))), 124.0);
        assert_eq!(to_float(trunc(to_half(-124.7))), -124.0);
        assert_eq!(to_float(trunc(to_half(124.2))), 124.0);
        assert_eq!(to_float(trunc(to_half(-124.2))), -124.0);
    }

    #[test]
    fn rounding_never_panics_and_keeps_integers_fixed() {
        for h in 0..=u16::MAX {
            let c = ceil(h);
            let f = floor(h);
            let r = rint(h);
            let t = trunc(h);
            // Integral inputs (zeroes, NaNs and infinities included) must
            // pass through every operator untouched.
            let abs = h & EXPONENT_SIGNIFICAND_MASK;
            let integral = abs == 0
                || abs >= INTEGRAL_LIMIT
                || (abs >= ONE && abs & ((1 << fraction_bits(abs)) - 1) == 0);
            if integral {
                assert_eq!(c, h, "ceil moved integral 0x{h:04x}");
                assert_eq!(f, h, "floor moved integral 0x{h:04x}");
                assert_eq!(r, h, "rint moved integral 0x{h:04x}");
                assert_eq!(t, h, "trunc moved integral 0x{h:04x}");
            }
        }
    }
}

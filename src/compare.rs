//! Comparison over half bit patterns.
//!
//! Two distinct semantics live here and must not be conflated:
//!
//! - the IEEE predicates (`equals`, `less`, `less_equals`, `greater`,
//!   `greater_equals`): NaN compares false against everything including
//!   itself, and -0 equals +0;
//! - the sorting-grade total order (`compare`): NaN ranks above every other
//!   value, all NaNs are equal to each other, and -0 orders below +0.

use core::cmp::Ordering;

use crate::bits::{EXPONENT_SIGNIFICAND_MASK, NAN, SIGN_MASK};
use crate::classify::is_nan;

/// Maps the sign-magnitude pattern onto a signed scale where plain integer
/// comparison matches IEEE ordering. Both zeroes map to 0.
const fn ordered_value(h: u16) -> i32 {
    if h & SIGN_MASK != 0 {
        0x8000 - h as i32
    } else {
        h as i32
    }
}

/// Like [`ordered_value`] but keeps -0 strictly below +0, as the total order
/// requires.
const fn total_order_value(h: u16) -> i32 {
    if h & SIGN_MASK != 0 {
        -((h & EXPONENT_SIGNIFICAND_MASK) as i32) - 1
    } else {
        h as i32
    }
}

/// IEEE numeric equality: NaN is not equal to anything, including itself;
/// +0 and -0 are equal.
pub const fn equals(x: u16, y: u16) -> bool {
    !is_nan(x) && !is_nan(y) && ordered_value(x) == ordered_value(y)
}

/// IEEE ordered `x < y`. False whenever either operand is NaN.
pub const fn less(x: u16, y: u16) -> bool {
    !is_nan(x) && !is_nan(y) && ordered_value(x) < ordered_value(y)
}

/// IEEE ordered `x <= y`. False whenever either operand is NaN.
pub const fn less_equals(x: u16, y: u16) -> bool {
    !is_nan(x) && !is_nan(y) && ordered_value(x) <= ordered_value(y)
}

/// IEEE ordered `x > y`. False whenever either operand is NaN.
pub const fn greater(x: u16, y: u16) -> bool {
    !is_nan(x) && !is_nan(y) && ordered_value(x) > ordered_value(y)
}

/// IEEE ordered `x >= y`. False whenever either operand is NaN.
pub const fn greater_equals(x: u16, y: u16) -> bool {
    !is_nan(x) && !is_nan(y) && ordered_value(x) >= ordered_value(y)
}

/// Total order for sorting, deliberately different from [`equals`] and the
/// ordered predicates: NaN is greater than everything else (all NaNs compare
/// equal to each other) and -0 is less than +0.
pub const fn compare(x: u16, y: u16) -> Ordering {
    match (is_nan(x), is_nan(y)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let a = total_order_value(x);
            let b = total_order_value(y);
            if a < b {
                Ordering::Less
            } else if a > b {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }
}

/// Smaller of two values. NaN contaminates: if either operand is NaN the
/// result is NaN. -0 counts as smaller than +0.
pub const fn min(x: u16, y: u16) -> u16 {
    if is_nan(x) || is_nan(y) {
        return NAN;
    }
    if (x | y) & EXPONENT_SIGNIFICAND_MASK == 0 {
        // Two zeroes, possibly of opposite signs.
        return if x & SIGN_MASK != 0 { x } else { y };
    }
    if ordered_value(x) < ordered_value(y) { x } else { y }
}

/// Larger of two values. NaN contaminates: if either operand is NaN the
/// result is NaN. +0 counts as larger than -0.
pub const fn max(x: u16, y: u16) -> u16 {
    if is_nan(x) || is_nan(y) {
        return NAN;
    }
    if (x | y) & EXPONENT_SIGNIFICAND_MASK == 0 {
        return if x & SIGN_MASK != 0 { y } else { x };
    }
    if ordered_value(x) > ordered_value(y) { x } else { y }
}

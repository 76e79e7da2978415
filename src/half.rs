//! A thin value-type wrapper over the free functions.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::{bits, classify, compare, convert, hex, round};

/// The error returned when parsing a [`Half`] from a decimal string fails.
#[derive(Debug, thiserror::Error)]
#[error("invalid half-precision literal: {0}")]
pub struct ParseHalfError(#[from] std::num::ParseFloatError);

/// A half-precision float stored as its raw 16-bit pattern.
///
/// `Half` adds no semantics of its own; every method delegates to the free
/// functions of this crate. Equality and ordering follow the IEEE predicates
/// (`NaN != NaN`, `-0.0 == +0.0`); use [`Half::total_cmp`] when a total
/// order is needed, e.g. for sorting.
///
/// With the `serde` feature enabled, `Half` serializes as its raw `u16` bit
/// pattern, which is the storage representation.
#[repr(transparent)]
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Half(u16);

impl Half {
    pub const POSITIVE_ZERO: Half = Half(bits::POSITIVE_ZERO);
    pub const NEGATIVE_ZERO: Half = Half(bits::NEGATIVE_ZERO);
    pub const NAN: Half = Half(bits::NAN);
    pub const POSITIVE_INFINITY: Half = Half(bits::POSITIVE_INFINITY);
    pub const NEGATIVE_INFINITY: Half = Half(bits::NEGATIVE_INFINITY);
    pub const MAX_VALUE: Half = Half(bits::MAX_VALUE);
    pub const MIN_VALUE: Half = Half(bits::MIN_VALUE);
    pub const MIN_NORMAL: Half = Half(bits::MIN_NORMAL);
    pub const LOWEST_VALUE: Half = Half(bits::LOWEST_VALUE);
    pub const EPSILON: Half = Half(bits::EPSILON);

    /// Wraps a raw bit pattern. Every pattern is valid.
    pub const fn from_bits(bits: u16) -> Half {
        Half(bits)
    }

    /// Returns the raw bit pattern.
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// See [`crate::to_half`].
    pub const fn from_f32(f: f32) -> Half {
        Half(convert::to_half(f))
    }

    /// See [`crate::to_float`].
    pub const fn to_f32(self) -> f32 {
        convert::to_float(self.0)
    }

    pub const fn is_nan(self) -> bool {
        classify::is_nan(self.0)
    }

    pub const fn is_infinite(self) -> bool {
        classify::is_infinite(self.0)
    }

    pub const fn is_normalized(self) -> bool {
        classify::is_normalized(self.0)
    }

    pub const fn ceil(self) -> Half {
        Half(round::ceil(self.0))
    }

    pub const fn floor(self) -> Half {
        Half(round::floor(self.0))
    }

    pub const fn rint(self) -> Half {
        Half(round::rint(self.0))
    }

    pub const fn trunc(self) -> Half {
        Half(round::trunc(self.0))
    }

    /// NaN-contaminating minimum, see [`crate::min`].
    pub const fn min(self, other: Half) -> Half {
        Half(compare::min(self.0, other.0))
    }

    /// NaN-contaminating maximum, see [`crate::max`].
    pub const fn max(self, other: Half) -> Half {
        Half(compare::max(self.0, other.0))
    }

    /// Total order, see [`crate::compare`]. Unlike [`PartialOrd`], this
    /// orders NaN above everything and -0 below +0.
    pub const fn total_cmp(self, other: Half) -> Ordering {
        compare::compare(self.0, other.0)
    }

    /// See [`crate::to_hex_string`].
    pub fn to_hex_string(self) -> String {
        hex::to_hex_string(self.0)
    }
}

impl PartialEq for Half {
    fn eq(&self, other: &Half) -> bool {
        compare::equals(self.0, other.0)
    }
}

impl PartialOrd for Half {
    fn partial_cmp(&self, other: &Half) -> Option<Ordering> {
        if compare::less(self.0, other.0) {
            Some(Ordering::Less)
        } else if compare::greater(self.0, other.0) {
            Some(Ordering::Greater)
        } else if compare::equals(self.0, other.0) {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}

impl From<f32> for Half {
    fn from(f: f32) -> Half {
        Half::from_f32(f)
    }
}

impl From<Half> for f32 {
    fn from(h: Half) -> f32 {
        h.to_f32()
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Half {
    type Err = ParseHalfError;

    fn from_str(s: &str) -> Result<Half, ParseHalfError> {
        Ok(Half::from_f32(s.parse::<f32>()?))
    }
}

//! Half-precision (binary16) floating-point codec.
//!
//! binary16 is a 16-bit IEEE-754 format (1 sign bit, 5 exponent bits with
//! bias 15, 10 mantissa bits) used for compact storage of floats where full
//! `f32` precision is not needed, e.g. serialized tensor buffers or texture
//! data. This crate operates on raw `u16` bit patterns: conversion to and
//! from `f32`, classification, IEEE comparison predicates, a sorting-grade
//! total order, min/max, integral rounding and a hexadecimal rendering.
//!
//! No arithmetic is provided. Callers that need math convert to `f32`,
//! compute there, and convert back.
//!
//! Every operation is a pure function, total over all 65536 bit patterns
//! (and over every `f32` value in the `f32` direction), and never panics.
//! NaN propagation is the only error channel.
//!
//! ```
//! use fp16::{to_half, to_float, compare, MAX_VALUE};
//!
//! let h = to_half(1.5f32);
//! assert_eq!(h, 0x3e00);
//! assert_eq!(to_float(h), 1.5f32);
//! assert_eq!(compare(h, MAX_VALUE), std::cmp::Ordering::Less);
//! ```
//!
//! The [`Half`] newtype wraps the same operations for callers that prefer a
//! value type over raw bits.

mod bits;
mod classify;
mod compare;
mod convert;
mod half;
mod hex;
mod round;

pub use bits::{
    EPSILON, LOWEST_VALUE, MAX_EXPONENT, MAX_VALUE, MIN_EXPONENT, MIN_NORMAL, MIN_VALUE, NAN,
    NEGATIVE_INFINITY, NEGATIVE_ZERO, POSITIVE_INFINITY, POSITIVE_ZERO, SIZE,
};
pub use classify::{is_infinite, is_nan, is_normalized};
pub use compare::{compare, equals, greater, greater_equals, less, less_equals, max, min};
pub use convert::{to_float, to_half};
pub use half::{Half, ParseHalfError};
pub use hex::to_hex_string;
pub use round::{ceil, floor, rint, trunc};

//! Hexadecimal rendering of half values.

use crate::bits::{EXPONENT_BIAS, SHIFTED_EXPONENT_MASK, exponent, sign, significand};

/// Renders `h` as a hexadecimal floating-point literal.
///
/// The leading digit is `1` for normalized values and `0` for subnormals
/// (which always print the fixed exponent `-14`); the fraction digits are
/// the raw 10-bit mantissa in hex. Special values render as `NaN`,
/// `Infinity`, `-Infinity` and `[-]0x0.0p0`.
///
/// ```
/// # use fp16::{to_hex_string, MAX_VALUE, MIN_VALUE};
/// assert_eq!(to_hex_string(MAX_VALUE), "0x1.3ffp15");
/// assert_eq!(to_hex_string(MIN_VALUE), "0x0.1p-14");
/// ```
pub fn to_hex_string(h: u16) -> String {
    let s = sign(h);
    let e = exponent(h);
    let m = significand(h);

    if e == SHIFTED_EXPONENT_MASK {
        return if m != 0 {
            "NaN".to_owned()
        } else if s != 0 {
            "-Infinity".to_owned()
        } else {
            "Infinity".to_owned()
        };
    }

    let sign = if s != 0 { "-" } else { "" };
    if e == 0 {
        if m == 0 {
            format!("{sign}0x0.0p0")
        } else {
            format!("{sign}0x0.{m:x}p-14")
        }
    } else {
        format!("{sign}0x1.{m:x}p{}", e as i32 - EXPONENT_BIAS)
    }
}

//! The codec between binary16 bit patterns and `f32`.
//!
//! `to_half` is lossy: it rounds to nearest with ties to even, saturates to
//! signed infinity past the representable range and flushes magnitudes below
//! half of the smallest subnormal to signed zero. `to_float` is exact, every
//! binary16 value is representable in binary32.

use crate::bits::{
    EXPONENT_BIAS, FP32_EXPONENT_BIAS, FP32_EXPONENT_SHIFT, FP32_QNAN_MASK,
    FP32_SHIFTED_EXPONENT_MASK, FP32_SIGN_SHIFT, FP32_SIGNIFICAND_MASK, SHIFTED_EXPONENT_MASK,
    exponent, sign, significand,
};

/// Converts an `f32` to the nearest half-precision bit pattern.
///
/// Rounds to nearest, ties to even. Magnitudes that round to 65520.0 or above
/// become signed infinity; magnitudes below 2^-25 become signed zero; values
/// between flush threshold and `MIN_NORMAL` become subnormals. Every `f32`
/// NaN maps to a half NaN.
pub const fn to_half(f: f32) -> u16 {
    let bits = f.to_bits();
    let s = bits >> FP32_SIGN_SHIFT;
    let e = ((bits >> FP32_EXPONENT_SHIFT) & FP32_SHIFTED_EXPONENT_MASK) as i32;
    let m = bits & FP32_SIGNIFICAND_MASK;

    let mut out_e: u32 = 0;
    let mut out_m: u32 = 0;

    if e == 0xff {
        // Infinity or NaN. NaN payloads collapse to the canonical quiet one.
        out_e = 0x1f;
        if m != 0 {
            out_m = 0x200;
        }
    } else {
        let e = e - FP32_EXPONENT_BIAS + EXPONENT_BIAS;
        if e >= 0x1f {
            // Exponent too large for 5 bits, saturate to infinity.
            out_e = 0x1f;
        } else if e <= 0 {
            if e >= -10 {
                // A normalized f32 below the smallest normalized half.
                // Shift into a subnormal mantissa, rounding half to even.
                let m = m | 0x80_0000;
                let shift = (14 - e) as u32;
                out_m = m >> shift;
                let low = m & ((1 << shift) - 1);
                let half = 1 << (shift - 1);
                if low + (out_m & 1) > half {
                    out_m += 1;
                }
            }
            // Otherwise the magnitude is below half of the smallest
            // subnormal: flush to signed zero.
        } else {
            out_e = e as u32;
            out_m = m >> 13;
            if (m & 0x1fff) + (out_m & 1) > 0x1000 {
                // Round up. The add below carries into the exponent when the
                // mantissa overflows, which also turns 65520.0 and friends
                // into infinity.
                out_m += 1;
            }
        }
    }

    ((s << 15) | ((out_e << 10) + out_m)) as u16
}

/// Converts a half-precision bit pattern to the `f32` with the same value.
///
/// Exact for every finite input. Infinities keep their sign, NaNs widen to an
/// `f32` NaN with the signaling bit quieted, subnormals normalize into
/// ordinary binary32 values.
pub const fn to_float(h: u16) -> f32 {
    let s = (sign(h) as u32) << FP32_SIGN_SHIFT;
    let e = exponent(h) as u32;
    let m = significand(h) as u32;

    let bits = if e == SHIFTED_EXPONENT_MASK as u32 {
        if m == 0 {
            // Infinity
            s | 0x7f80_0000
        } else {
            // NaN
            s | 0x7f80_0000 | (m << 13) | FP32_QNAN_MASK
        }
    } else if e == 0 {
        if m == 0 {
            // Signed zero
            s
        } else {
            // Subnormal. Shift left until the implicit leading bit appears;
            // the result is a normalized f32.
            let mut e32 = (FP32_EXPONENT_BIAS - EXPONENT_BIAS + 1) as u32;
            let mut m32 = m;
            while m32 & 0x400 == 0 {
                m32 <<= 1;
                e32 -= 1;
            }
            m32 &= !0x400;
            s | (e32 << FP32_EXPONENT_SHIFT) | (m32 << 13)
        }
    } else {
        // Normalized: re-bias the exponent, widen the mantissa to 23 bits.
        s | ((e + (FP32_EXPONENT_BIAS - EXPONENT_BIAS) as u32) << FP32_EXPONENT_SHIFT) | (m << 13)
    };

    f32::from_bits(bits)
}

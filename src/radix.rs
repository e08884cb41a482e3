//! Parsing digit strings into [`BigInt`]s and projecting them back out in
//! an arbitrary (possibly negative) radix.

use crate::alphabet::DigitLut;
use crate::arithmetic::{add, div_small, incr, mul_small, mul_u8, shl_bits};
use crate::bigint::BigInt;
use crate::diag;
use crate::error::CoreError;

/// Parses an unsigned digit string (no leading sign) in radix `base` over
/// the alphabet behind `lut` into a `dst_len`-byte magnitude, via Horner
/// accumulation of `digit * base^k`. An empty string parses to zero.
///
/// `base`'s magnitude must fit in `[-256, 256]` (the range [`mul_small`]
/// accepts), matching the one-byte digit LUT this crate supports.
pub fn parse(base: i32, lut: &DigitLut, digits: &str, dst_len: usize, use_simd: bool) -> BigInt {
    let mut acc = BigInt::create(dst_len, false);
    let len = digits.len();
    if len == 0 {
        return acc;
    }

    let mut weight = BigInt::create(dst_len, false);
    weight.set_byte(0, 1);
    let mut weight_next = BigInt::create(dst_len, false);
    let mut term = BigInt::create(dst_len, false);
    let mut mul_tmp = BigInt::create(dst_len + 1, false);

    for i in 0..len {
        let d = lut.digit_at(digits, len - 1 - i);
        mul_u8(&weight, d as u16, &mut term, &mut mul_tmp, use_simd);
        // mul_u8 only ever produces a non-negative magnitude (it ignores
        // both operands' signs); the digit itself is never negative, so
        // the signed term is just the weight's own sign reapplied.
        term.set_sign(weight.sign());
        add(&mut acc, &term, use_simd);
        if i + 1 < len {
            mul_small(&weight, base, &mut weight_next, &mut mul_tmp, use_simd);
            weight_next.copy_into(&mut weight);
        }
    }
    acc
}

/// Projects `value` into radix `base` (`base > 0`) over `alph`, via a
/// Double-Dabble-style repeated doubling of a digit buffer `cb` sized
/// `cb_len` bytes. Returns the ASCII digit string, sign-prefixed with
/// `'-'` if `value` is negative. A `cb` sized too small to hold the full
/// expansion truncates the top digit silently (logged).
pub fn to_base_pos(value: &BigInt, alph: &str, cb_len: usize, use_simd: bool) -> Vec<u8> {
    let alph_bytes = alph.as_bytes();
    if value.is_zero() {
        return vec![alph_bytes[0]];
    }

    let trigger: u16 = alph_bytes.len() as u16;
    let carry_add: u16 = 256 - trigger;

    let mut cb = BigInt::create(cb_len, false);
    let mut src = value.clone();
    src.set_sign(false);

    let total_bits = src.length() * 8;
    for _ in 0..total_bits {
        shl_bits(&mut cb, 1, use_simd);
        cb.set_bit(0, src.most_significant_bit());
        shl_bits(&mut src, 1, use_simd);

        for j in 0..cb.length() {
            let v = cb.get_byte(j) as u16;
            if v >= trigger {
                cb.set_byte(j, ((v + carry_add) & 0xff) as u8);
                if j + 1 < cb.length() {
                    let next = cb.get_byte(j + 1);
                    cb.set_byte(j + 1, next.wrapping_add(1));
                } else {
                    diag::warn_truncate("to_base_pos", cb_len);
                }
            }
        }
    }

    let highest = (0..cb.length()).rev().find(|&j| cb.get_byte(j) != 0).unwrap_or(0);
    let mut out = Vec::with_capacity(highest + 2);
    if value.sign() {
        out.push(b'-');
    }
    for j in (0..=highest).rev() {
        out.push(alph_bytes[cb.get_byte(j) as usize]);
    }
    out
}

/// Projects `value` into a negative radix `base` (`base < 0`) over
/// `alph`, via repeated Euclidean division. `value` is consumed
/// (repeatedly divided down to zero); there is no sign prefix, since a
/// negative base encodes sign in the digit sequence itself.
pub fn to_base_neg(value: &mut BigInt, alph: &str, base: i32) -> Result<Vec<u8>, CoreError> {
    debug_assert!(base < 0);
    let alph_bytes = alph.as_bytes();
    if value.is_zero() {
        return Ok(vec![alph_bytes[0]]);
    }

    let mut digits = Vec::new();
    let mut tmp1 = BigInt::create(2, false);
    let mut tmp2 = BigInt::create(2, false);
    while !value.is_zero() {
        let mut r = div_small(value, base, &mut tmp1, &mut tmp2)?;
        if r < 0 {
            r += base.unsigned_abs() as i32;
            incr(value);
        }
        digits.push(alph_bytes[r as usize]);
    }
    digits.reverse();
    Ok(digits)
}

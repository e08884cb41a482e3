//! Top-level entry point: normalize signs, size the working `BigInt`s,
//! dispatch to an operation, and project the result back into the
//! caller's radix.

use crate::alphabet::DigitLut;
use crate::arithmetic::{add, mul, sub};
use crate::bigint::BigInt;
use crate::diag;
use crate::error::CoreError;
use crate::radix::{parse, to_base_neg, to_base_pos};

/// Number of bits needed to represent any single digit of a base with
/// magnitude `base_abs` (`⌈log2(base_abs)⌉`).
fn ceil_log2(base_abs: u32) -> u32 {
    debug_assert!(base_abs >= 2);
    32 - (base_abs - 1).leading_zeros()
}

/// Magnitude bytes needed to hold a value with `n_digits` digits in a
/// base whose digits need `bits_per_digit` bits each: `⌈n·bits/8⌉ + 1`.
fn digit_bytes(n_digits: usize, bits_per_digit: u32) -> usize {
    let bits = n_digits * bits_per_digit as usize;
    (bits + 7) / 8 + 1
}

/// Strips a leading `'-'` from `s` when `base > 0` (the only context a
/// sign prefix is meaningful in); negative bases encode sign in the
/// digit sequence itself and never carry a prefix.
fn strip_sign(s: &str, base: i32) -> (bool, &str) {
    if base > 0 {
        if let Some(rest) = s.strip_prefix('-') {
            return (true, rest);
        }
    }
    (false, s)
}

/// Projects `value` into `base` over `alph`, appending the rendered
/// digit string into `result` (cleared first). `digit_hint` sizes the
/// intermediate positive-base projection buffer; it is a capacity hint,
/// not a hard cap — `result` itself is an ordinary growable `Vec<u8>`.
fn project(value: &mut BigInt, base: i32, alph: &str, digit_hint: usize, use_simd: bool, result: &mut Vec<u8>) -> Result<(), CoreError> {
    diag::trace_stage("op::project");
    result.clear();
    if base > 0 {
        let digits = to_base_pos(value, alph, digit_hint, use_simd);
        result.extend_from_slice(&digits);
    } else {
        let digits = to_base_neg(value, alph, base)?;
        result.extend_from_slice(&digits);
    }
    Ok(())
}

/// Computes `z1 op z2` in the given radix and alphabet, writing the
/// rendered digit string into `result`.
///
/// Preconditions, validated by the caller and trusted here: `|base| >=
/// 2`; `alph` has exactly `|base|` distinct characters; every character
/// of `z1`/`z2` (after an optional leading `'-'` when `base > 0`) is in
/// `alph`. This layer does not re-validate them (§7).
pub fn compute(
    base: i32,
    alph: &str,
    z1: &str,
    z2: &str,
    op: char,
    result: &mut Vec<u8>,
    use_simd: bool,
) -> Result<(), CoreError> {
    diag::trace_stage("op::compute");
    let base_abs = base.unsigned_abs();
    let bits_per_digit = ceil_log2(base_abs);
    let lut = DigitLut::build(alph);

    let (z1_sign, z1_digits) = strip_sign(z1, base);
    let (z2_sign, z2_digits) = strip_sign(z2, base);

    let z1_size = digit_bytes(z1_digits.len(), bits_per_digit);
    let z2_size = digit_bytes(z2_digits.len(), bits_per_digit);
    let max_digits = z1_digits.len().max(z2_digits.len());

    match op {
        '+' | '-' => {
            let bin_len = z1_size.max(z2_size) + 1;
            let mut a = parse(base, &lut, z1_digits, bin_len, use_simd);
            a.set_sign(z1_sign);
            let mut b = parse(base, &lut, z2_digits, bin_len, use_simd);
            b.set_sign(z2_sign);

            if op == '+' {
                add(&mut a, &b, use_simd);
            } else {
                sub(&mut a, &b, use_simd);
            }
            if a.is_zero() {
                a.set_sign(false);
            }

            let digit_hint = if op == '+' {
                max_digits + 2 + usize::from(base < 0)
            } else {
                max_digits + 3
            };
            project(&mut a, base, alph, digit_hint, use_simd, result)
        }
        '*' => {
            let mut a = parse(base, &lut, z1_digits, z1_size, use_simd);
            a.set_sign(z1_sign);
            let mut b = parse(base, &lut, z2_digits, z2_size, use_simd);
            b.set_sign(z2_sign);

            let mut res = BigInt::create(z1_size + z2_size, false);
            mul(&a, &b, &mut res, use_simd);
            if res.is_zero() {
                res.set_sign(false);
            }

            let digit_hint = max_digits * 2 + 1;
            project(&mut res, base, alph, digit_hint, use_simd, result)
        }
        other => Err(CoreError::InvalidOperator(other)),
    }
}

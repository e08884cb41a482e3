//! Exact addition, subtraction and multiplication on arbitrarily long
//! integers written in any signed integer radix over a custom alphabet.
//!
//! The crate is a small pipeline: [`bigint::BigInt`] is the storage
//! layer (a fixed-length, little-endian, sign-magnitude byte buffer);
//! [`arithmetic`] implements addition, subtraction, shifts,
//! multiplication and small-divisor division in place on top of it;
//! [`radix`] parses digit strings into `BigInt`s and projects them back
//! out in an arbitrary (possibly negative) radix; [`op::compute`] is the
//! single public entry point tying the three together.
//!
//! ```
//! let mut result = Vec::new();
//! radix_arith::compute(10, "0123456789", "100", "50", '+', &mut result, false).unwrap();
//! assert_eq!(result, b"150");
//! ```
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod arithmetic;
pub mod bigint;
mod diag;
pub mod error;
pub mod op;
pub mod radix;
#[cfg(test)]
mod tests;

pub use bigint::BigInt;
pub use error::CoreError;
pub use op::compute;

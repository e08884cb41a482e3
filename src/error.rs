use core::fmt;

/// Conditions that this crate reports as values instead of aborting on.
///
/// Everything else in [`crate::error`]'s sibling modules that the source
/// specification calls a "precondition violation" (an out-of-range buffer
/// index, an `abs_gt` call on a negative operand, …) is a bug in this crate
/// rather than something a caller can trigger through normal use, and is
/// expressed as a `debug_assert!`/`panic!` instead. See the crate's design
/// notes for the reasoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// `div_small` was asked to divide by zero.
    DivisionByZero,
    /// `compute` received an operator character other than `+`, `-`, `*`.
    InvalidOperator(char),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::DivisionByZero => write!(f, "division by zero in div_small"),
            CoreError::InvalidOperator(op) => write!(f, "unsupported operator '{op}'"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

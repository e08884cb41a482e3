//! Non-fatal diagnostics.
//!
//! The source specification calls out exactly two situations that are
//! "logged, not raised": add/sub carry running off the top of a sized
//! buffer, and a projection writing more digits than the caller's result
//! buffer holds. Both are sizing bugs in the caller (§3.3 is supposed to
//! prevent them), not conditions this crate can recover from, so they are
//! reported through `log::warn!` and then the operation truncates silently,
//! exactly as the source does.

/// A carry (add) or borrow (sub) propagated past the highest byte of a
/// buffer the caller was responsible for sizing correctly.
#[inline]
pub(crate) fn warn_overflow(op: &str, length: usize) {
    log::warn!("{op}: carry/borrow propagated past the sized buffer (length = {length} bytes); result is truncated");
}

/// A projected digit string needed more cells than the caller's `cb`/result
/// buffer provided.
#[inline]
pub(crate) fn warn_truncate(stage: &str, capacity: usize) {
    log::warn!("{stage}: projection exceeded the {capacity}-byte output buffer; result is truncated");
}

#[inline]
pub(crate) fn trace_stage(stage: &str) {
    log::trace!("{stage}");
}

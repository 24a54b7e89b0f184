//! Tracing hooks for operators.
//!
//! Compiled to no-ops unless the `tracing` feature is on. Install a subscriber
//! in the binary layer to see them.

use lazyq_core::error::Error;

use crate::stats::OpStats;

#[cfg(feature = "tracing")]
pub fn emit_exhausted(stats: &OpStats) {
    tracing::trace!(
        op = stats.op,
        pulled = stats.pulled,
        yielded = stats.yielded,
        "operator exhausted"
    );
}

#[cfg(not(feature = "tracing"))]
pub fn emit_exhausted(_stats: &OpStats) { /* no-op */
}

#[cfg(feature = "tracing")]
pub fn emit_rejected(op: &'static str, reason: &str) {
    tracing::debug!(op, reason, "operator rejected arguments");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_rejected(_op: &'static str, _reason: &str) { /* no-op */
}

/// Report a construction-time rejection and hand the error back.
pub fn rejected(err: Error) -> Error {
    if let Error::InvalidArgument { op, reason } = &err {
        emit_rejected(*op, reason);
    }
    err
}

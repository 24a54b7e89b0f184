//! Operator trait.
//!
//! Operators are ordinary iterators; this trait adds the introspection the
//! tests and tracing need: a stable name and progress counters.

use crate::stats::OpStats;

pub trait Operator {
    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str;

    /// Current progress of this operator.
    fn stats(&self) -> OpStats;

    /// Elements pulled from upstream so far.
    fn pulled(&self) -> usize {
        self.stats().pulled
    }
}

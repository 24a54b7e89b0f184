//! Per-operator bookkeeping: how much an operator has pulled and yielded.
//!
//! `Tally` is embedded in every operator. It counts upstream pulls, counts
//! yielded items, and fuses the operator once its output has ended so that a
//! finished operator never touches its upstream again.

use serde::Serialize;

use crate::metrics;

/// Snapshot of an operator's progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpStats {
    pub op: &'static str,
    /// Elements received from upstream.
    pub pulled: usize,
    /// Items handed to the consumer.
    pub yielded: usize,
    /// Output has ended; further `next` calls return `None` without pulling.
    pub exhausted: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Tally {
    pub(crate) pulled: usize,
    pub(crate) yielded: usize,
    pub(crate) done: bool,
}

impl Tally {
    /// Pull one element from `upstream`, counting it.
    #[inline]
    pub(crate) fn pull<I: Iterator>(&mut self, upstream: &mut I) -> Option<I::Item> {
        let item = upstream.next()?;
        self.pulled += 1;
        Some(item)
    }

    #[inline]
    pub(crate) fn emit<T>(&mut self, item: T) -> Option<T> {
        self.yielded += 1;
        Some(item)
    }

    /// Mark the output as ended. Reports once, then stays silent.
    pub(crate) fn finish<T>(&mut self, op: &'static str) -> Option<T> {
        if !self.done {
            self.done = true;
            metrics::emit_exhausted(&self.snapshot(op));
        }
        None
    }

    pub(crate) fn snapshot(&self, op: &'static str) -> OpStats {
        OpStats {
            op,
            pulled: self.pulled,
            yielded: self.yielded,
            exhausted: self.done,
        }
    }

    /// Size hint once `done` is accounted for.
    #[inline]
    pub(crate) fn bound(&self, hint: (usize, Option<usize>)) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            hint
        }
    }
}

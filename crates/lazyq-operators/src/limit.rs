//! Take and skip: fixed-count prefix operators.

use lazyq_core::config::CountPolicy;
use lazyq_core::count::resolve_count;
use lazyq_core::error::Result;

use crate::metrics;
use crate::stats::{OpStats, Tally};
use crate::traits::Operator;

const TAKE: &str = "take";
const SKIP: &str = "skip";

/// Yields at most `count` elements, then stops pulling upstream.
#[derive(Clone)]
pub struct Take<I> {
    iter: I,
    count: usize,
    tally: Tally,
}

impl<I: Iterator> Take<I> {
    pub fn new(iter: I, count: usize) -> Self {
        Self {
            iter,
            count,
            tally: Tally::default(),
        }
    }

    /// Build from a caller-supplied signed count, validated under `policy`.
    pub fn try_new(iter: I, count: i64, policy: CountPolicy) -> Result<Self> {
        let count = resolve_count(TAKE, count, policy).map_err(metrics::rejected)?;
        Ok(Self::new(iter, count))
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.tally.done {
            return None;
        }
        if self.tally.yielded >= self.count {
            return self.tally.finish(TAKE);
        }
        match self.tally.pull(&mut self.iter) {
            Some(item) => self.tally.emit(item),
            None => self.tally.finish(TAKE),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.tally.yielded;
        let (lower, upper) = self.iter.size_hint();
        let upper = upper.map_or(remaining, |u| u.min(remaining));
        self.tally.bound((lower.min(remaining), Some(upper)))
    }
}

impl<I> Operator for Take<I> {
    fn name(&self) -> &'static str {
        TAKE
    }

    fn stats(&self) -> OpStats {
        self.tally.snapshot(TAKE)
    }
}

/// Drops the first `count` elements, then yields the rest.
///
/// The dropped prefix is pulled on the first call to `next`, one element at a
/// time; there is no seeking.
#[derive(Clone)]
pub struct Skip<I> {
    iter: I,
    count: usize,
    skipped: bool,
    tally: Tally,
}

impl<I: Iterator> Skip<I> {
    pub fn new(iter: I, count: usize) -> Self {
        Self {
            iter,
            count,
            skipped: false,
            tally: Tally::default(),
        }
    }

    /// Build from a caller-supplied signed count, validated under `policy`.
    pub fn try_new(iter: I, count: i64, policy: CountPolicy) -> Result<Self> {
        let count = resolve_count(SKIP, count, policy).map_err(metrics::rejected)?;
        Ok(Self::new(iter, count))
    }
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.tally.done {
            return None;
        }
        if !self.skipped {
            self.skipped = true;
            for _ in 0..self.count {
                if self.tally.pull(&mut self.iter).is_none() {
                    return self.tally.finish(SKIP);
                }
            }
        }
        match self.tally.pull(&mut self.iter) {
            Some(item) => self.tally.emit(item),
            None => self.tally.finish(SKIP),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let pending = if self.skipped { 0 } else { self.count };
        self.tally.bound((
            lower.saturating_sub(pending),
            upper.map(|u| u.saturating_sub(pending)),
        ))
    }
}

impl<I> Operator for Skip<I> {
    fn name(&self) -> &'static str {
        SKIP
    }

    fn stats(&self) -> OpStats {
        self.tally.snapshot(SKIP)
    }
}

/// `Take` over `source`, rejecting a negative `count`.
pub fn take<S: IntoIterator>(source: S, count: i64) -> Result<Take<S::IntoIter>> {
    Take::try_new(source.into_iter(), count, CountPolicy::Reject)
}

/// `Skip` over `source`, rejecting a negative `count`.
pub fn skip<S: IntoIterator>(source: S, count: i64) -> Result<Skip<S::IntoIter>> {
    Skip::try_new(source.into_iter(), count, CountPolicy::Reject)
}

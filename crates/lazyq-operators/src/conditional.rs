//! Count-bounded conditional operators.
//!
//! Both differ from the usual take-while/skip-while:
//! - `TakeWhile` yields the first `count` elements that match, skipping the
//!   ones that don't. A failing element does not end the output.
//! - `SkipWhile` drops at most `count` leading matches. The first element that
//!   fails, or the first one reached after `count` drops, opens the output and
//!   everything after it is yielded without testing.

use lazyq_core::config::CountPolicy;
use lazyq_core::count::resolve_count;
use lazyq_core::error::Result;

use crate::metrics;
use crate::stats::{OpStats, Tally};
use crate::traits::Operator;

const TAKE_WHILE: &str = "take_while";
const SKIP_WHILE: &str = "skip_while";

#[derive(Clone)]
pub struct TakeWhile<I, P> {
    iter: I,
    count: usize,
    predicate: P,
    tally: Tally,
}

impl<I, P> TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(iter: I, count: usize, predicate: P) -> Self {
        Self {
            iter,
            count,
            predicate,
            tally: Tally::default(),
        }
    }

    pub fn try_new(iter: I, count: i64, predicate: P, policy: CountPolicy) -> Result<Self> {
        let count = resolve_count(TAKE_WHILE, count, policy).map_err(metrics::rejected)?;
        Ok(Self::new(iter, count, predicate))
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.tally.done {
            return None;
        }
        if self.tally.yielded >= self.count {
            return self.tally.finish(TAKE_WHILE);
        }
        while let Some(item) = self.tally.pull(&mut self.iter) {
            if (self.predicate)(&item) {
                return self.tally.emit(item);
            }
        }
        self.tally.finish(TAKE_WHILE)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.tally.yielded;
        let (_, upper) = self.iter.size_hint();
        let upper = upper.map_or(remaining, |u| u.min(remaining));
        self.tally.bound((0, Some(upper)))
    }
}

impl<I, P> Operator for TakeWhile<I, P> {
    fn name(&self) -> &'static str {
        TAKE_WHILE
    }

    fn stats(&self) -> OpStats {
        self.tally.snapshot(TAKE_WHILE)
    }
}

#[derive(Clone)]
pub struct SkipWhile<I, P> {
    iter: I,
    count: usize,
    predicate: P,
    dropped: usize,
    skipping: bool,
    tally: Tally,
}

impl<I, P> SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(iter: I, count: usize, predicate: P) -> Self {
        Self {
            iter,
            count,
            predicate,
            dropped: 0,
            skipping: true,
            tally: Tally::default(),
        }
    }

    pub fn try_new(iter: I, count: i64, predicate: P, policy: CountPolicy) -> Result<Self> {
        let count = resolve_count(SKIP_WHILE, count, policy).map_err(metrics::rejected)?;
        Ok(Self::new(iter, count, predicate))
    }
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.tally.done {
            return None;
        }
        while let Some(item) = self.tally.pull(&mut self.iter) {
            if self.skipping {
                if self.dropped < self.count && (self.predicate)(&item) {
                    self.dropped += 1;
                    continue;
                }
                self.skipping = false;
            }
            return self.tally.emit(item);
        }
        self.tally.finish(SKIP_WHILE)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let lower = if self.skipping {
            lower.saturating_sub(self.count - self.dropped)
        } else {
            lower
        };
        self.tally.bound((lower, upper))
    }
}

impl<I, P> Operator for SkipWhile<I, P> {
    fn name(&self) -> &'static str {
        SKIP_WHILE
    }

    fn stats(&self) -> OpStats {
        self.tally.snapshot(SKIP_WHILE)
    }
}

/// `TakeWhile` over `source`, rejecting a negative `count`.
pub fn take_while<S, P>(source: S, count: i64, predicate: P) -> Result<TakeWhile<S::IntoIter, P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile::try_new(source.into_iter(), count, predicate, CountPolicy::Reject)
}

/// `SkipWhile` over `source`, rejecting a negative `count`.
pub fn skip_while<S, P>(source: S, count: i64, predicate: P) -> Result<SkipWhile<S::IntoIter, P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    SkipWhile::try_new(source.into_iter(), count, predicate, CountPolicy::Reject)
}

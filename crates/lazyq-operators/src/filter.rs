//! Filter operators: by value, and by value plus source position.

use crate::stats::{OpStats, Tally};
use crate::traits::Operator;

const FILTER: &str = "filter";
const FILTER_INDEXED: &str = "filter_indexed";

/// Yields the upstream elements that satisfy `predicate`, in order.
#[derive(Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
    tally: Tally,
}

impl<I, P> Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            tally: Tally::default(),
        }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tally.done {
            return None;
        }
        while let Some(item) = self.tally.pull(&mut self.iter) {
            if (self.predicate)(&item) {
                return self.tally.emit(item);
            }
        }
        self.tally.finish(FILTER)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        self.tally.bound((0, upper))
    }
}

impl<I, P> Operator for Filter<I, P> {
    fn name(&self) -> &'static str {
        FILTER
    }

    fn stats(&self) -> OpStats {
        self.tally.snapshot(FILTER)
    }
}

/// Yields the upstream elements for which `predicate(item, index)` holds.
///
/// `index` is the element's zero-based position in the upstream sequence. It
/// advances for every element examined, including the ones filtered out.
#[derive(Clone)]
pub struct FilterIndexed<I, P> {
    iter: I,
    predicate: P,
    index: usize,
    tally: Tally,
}

impl<I, P> FilterIndexed<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    pub fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            index: 0,
            tally: Tally::default(),
        }
    }
}

impl<I, P> Iterator for FilterIndexed<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tally.done {
            return None;
        }
        while let Some(item) = self.tally.pull(&mut self.iter) {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return self.tally.emit(item);
            }
        }
        self.tally.finish(FILTER_INDEXED)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        self.tally.bound((0, upper))
    }
}

impl<I, P> Operator for FilterIndexed<I, P> {
    fn name(&self) -> &'static str {
        FILTER_INDEXED
    }

    fn stats(&self) -> OpStats {
        self.tally.snapshot(FILTER_INDEXED)
    }
}

pub fn filter<S, P>(source: S, predicate: P) -> Filter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Filter::new(source.into_iter(), predicate)
}

pub fn filter_indexed<S, P>(source: S, predicate: P) -> FilterIndexed<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    FilterIndexed::new(source.into_iter(), predicate)
}

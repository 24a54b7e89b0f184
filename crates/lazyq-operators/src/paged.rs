//! Paged group-sum: one sum per consecutive page of upstream elements.

use std::marker::PhantomData;
use std::ops::Add;

use lazyq_core::count::resolve_page_size;
use lazyq_core::error::Result;

use crate::metrics;
use crate::stats::{OpStats, Tally};
use crate::traits::Operator;

const PAGED_GROUP_SUM: &str = "paged_group_sum";

/// Splits upstream into non-overlapping pages of `page_size` elements and
/// yields `sum(selector(e))` for each page. The last page may be short.
///
/// A short page means upstream already returned `None`; the operator then
/// ends without asking upstream again.
#[derive(Clone)]
pub struct PagedGroupSum<I, F, N> {
    iter: I,
    page_size: usize,
    selector: F,
    drained: bool,
    tally: Tally,
    _sum: PhantomData<fn() -> N>,
}

impl<I, F, N> PagedGroupSum<I, F, N>
where
    I: Iterator,
    F: FnMut(&I::Item) -> N,
    N: Default + Add<Output = N>,
{
    pub fn try_new(iter: I, page_size: i64, selector: F) -> Result<Self> {
        let page_size =
            resolve_page_size(PAGED_GROUP_SUM, page_size).map_err(metrics::rejected)?;
        Ok(Self {
            iter,
            page_size,
            selector,
            drained: false,
            tally: Tally::default(),
            _sum: PhantomData,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl<I, F, N> Iterator for PagedGroupSum<I, F, N>
where
    I: Iterator,
    F: FnMut(&I::Item) -> N,
    N: Default + Add<Output = N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if self.tally.done || self.drained {
            return self.tally.finish(PAGED_GROUP_SUM);
        }

        let mut sum = N::default();
        let mut filled = 0;
        while filled < self.page_size {
            match self.tally.pull(&mut self.iter) {
                Some(item) => {
                    sum = sum + (self.selector)(&item);
                    filled += 1;
                }
                None => {
                    self.drained = true;
                    break;
                }
            }
        }

        if filled == 0 {
            return self.tally.finish(PAGED_GROUP_SUM);
        }
        self.tally.emit(sum)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.drained {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let pages = |n: usize| n / self.page_size + usize::from(n % self.page_size != 0);
        self.tally.bound((pages(lower), upper.map(pages)))
    }
}

impl<I, F, N> Operator for PagedGroupSum<I, F, N> {
    fn name(&self) -> &'static str {
        PAGED_GROUP_SUM
    }

    fn stats(&self) -> OpStats {
        self.tally.snapshot(PAGED_GROUP_SUM)
    }
}

pub fn paged_group_sum<S, F, N>(
    source: S,
    page_size: i64,
    selector: F,
) -> Result<PagedGroupSum<S::IntoIter, F, N>>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> N,
    N: Default + Add<Output = N>,
{
    PagedGroupSum::try_new(source.into_iter(), page_size, selector)
}

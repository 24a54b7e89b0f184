//! `Sequence`: method-chaining surface over the operators.
//!
//! A `Sequence` wraps an iterator together with the `SequenceConfig` that
//! governs count validation. Each chaining method consumes the sequence and
//! returns a new one around the next operator, carrying the config along.
//! Methods that take a count return `Result` and fail before touching the
//! source.
//!
//! ```
//! use lazyq_operators::SequenceExt;
//!
//! let evens: Vec<u32> = (1u32..)
//!     .into_sequence()
//!     .filter(|x| x % 2 == 0)
//!     .take(3)
//!     .unwrap()
//!     .collect();
//! assert_eq!(evens, vec![2, 4, 6]);
//! ```

use std::ops::Add;

use lazyq_core::config::SequenceConfig;
use lazyq_core::error::Result;

use crate::conditional::{SkipWhile, TakeWhile};
use crate::filter::{Filter, FilterIndexed};
use crate::limit::{Skip, Take};
use crate::map::Map;
use crate::paged::PagedGroupSum;
use crate::stats::OpStats;
use crate::traits::Operator;

#[derive(Debug, Clone)]
pub struct Sequence<I> {
    iter: I,
    config: SequenceConfig,
}

impl<I: Iterator> Sequence<I> {
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self::with_config(source, SequenceConfig::default())
    }

    pub fn with_config<S>(source: S, config: SequenceConfig) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: source.into_iter(),
            config,
        }
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    pub fn into_inner(self) -> I {
        self.iter
    }

    pub fn filter<P>(self, predicate: P) -> Sequence<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        let config = self.config;
        Sequence {
            iter: Filter::new(self.iter, predicate),
            config,
        }
    }

    pub fn filter_indexed<P>(self, predicate: P) -> Sequence<FilterIndexed<I, P>>
    where
        P: FnMut(&I::Item, usize) -> bool,
    {
        let config = self.config;
        Sequence {
            iter: FilterIndexed::new(self.iter, predicate),
            config,
        }
    }

    pub fn map<F, R>(self, selector: F) -> Sequence<Map<I, F>>
    where
        F: FnMut(I::Item) -> R,
    {
        let config = self.config;
        Sequence {
            iter: Map::new(self.iter, selector),
            config,
        }
    }

    pub fn take(self, count: i64) -> Result<Sequence<Take<I>>> {
        let policy = self.config.count_policy;
        let iter = Take::try_new(self.iter, count, policy)?;
        Ok(Sequence {
            iter,
            config: self.config,
        })
    }

    pub fn skip(self, count: i64) -> Result<Sequence<Skip<I>>> {
        let policy = self.config.count_policy;
        let iter = Skip::try_new(self.iter, count, policy)?;
        Ok(Sequence {
            iter,
            config: self.config,
        })
    }

    /// First `count` elements matching `predicate`; non-matching elements are
    /// passed over rather than ending the sequence.
    pub fn take_while<P>(self, count: i64, predicate: P) -> Result<Sequence<TakeWhile<I, P>>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        let policy = self.config.count_policy;
        let iter = TakeWhile::try_new(self.iter, count, predicate, policy)?;
        Ok(Sequence {
            iter,
            config: self.config,
        })
    }

    /// Drops up to `count` leading matches of `predicate`, then yields the rest.
    pub fn skip_while<P>(self, count: i64, predicate: P) -> Result<Sequence<SkipWhile<I, P>>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        let policy = self.config.count_policy;
        let iter = SkipWhile::try_new(self.iter, count, predicate, policy)?;
        Ok(Sequence {
            iter,
            config: self.config,
        })
    }

    pub fn paged_group_sum<F, N>(
        self,
        page_size: i64,
        selector: F,
    ) -> Result<Sequence<PagedGroupSum<I, F, N>>>
    where
        F: FnMut(&I::Item) -> N,
        N: Default + Add<Output = N>,
    {
        let config = self.config;
        let iter = PagedGroupSum::try_new(self.iter, page_size, selector)?;
        Ok(Sequence { iter, config })
    }

    /// `paged_group_sum` with the config's `default_page_size`.
    pub fn paged_group_sum_default<F, N>(
        self,
        selector: F,
    ) -> Result<Sequence<PagedGroupSum<I, F, N>>>
    where
        F: FnMut(&I::Item) -> N,
        N: Default + Add<Output = N>,
    {
        let page_size = i64::try_from(self.config.default_page_size).unwrap_or(i64::MAX);
        self.paged_group_sum(page_size, selector)
    }

    /// Re-wrap an arbitrary iterator adapter, keeping this sequence's config.
    pub fn pipe<J, G>(self, adapt: G) -> Sequence<J>
    where
        G: FnOnce(I) -> J,
        J: Iterator,
    {
        let config = self.config;
        let iter = adapt(self.iter);
        Sequence { iter, config }
    }
}

impl<I: Iterator> Iterator for Sequence<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: Operator> Operator for Sequence<I> {
    fn name(&self) -> &'static str {
        self.iter.name()
    }

    fn stats(&self) -> OpStats {
        self.iter.stats()
    }
}

/// Entry point: turn anything iterable into a `Sequence`.
pub trait SequenceExt: IntoIterator + Sized {
    fn into_sequence(self) -> Sequence<Self::IntoIter> {
        Sequence::new(self)
    }

    fn into_sequence_with(self, config: SequenceConfig) -> Sequence<Self::IntoIter> {
        Sequence::with_config(self, config)
    }
}

impl<S: IntoIterator> SequenceExt for S {}

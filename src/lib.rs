#![forbid(unsafe_code)]
//! lazyq: lazy, pull-based sequence operators.
//!
//! Re-exports the operator crate's chaining surface and the core error and
//! config types. Start from [`SequenceExt::into_sequence`].

pub use lazyq_core::config::{CountPolicy, SequenceConfig};
pub use lazyq_core::error::{Error, Result};
pub use lazyq_operators::{
    conditional, filter, limit, map, paged, Filter, FilterIndexed, Map, OpStats, Operator,
    PagedGroupSum, Sequence, SequenceExt, Skip, SkipWhile, Take, TakeWhile,
};

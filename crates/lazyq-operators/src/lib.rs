#![forbid(unsafe_code)]
//! lazyq-operators: lazy sequence operators over any `Iterator`.
//!
//! Design intent:
//! - Every operator is a plain `Iterator` struct wrapping its upstream; the
//!   consumer drives evaluation and nothing is pulled ahead of demand.
//! - Count arguments are validated when the operator is built, never during
//!   iteration, so a rejected call has consumed nothing.
//! - `Sequence` is the chaining surface; the per-module free functions build
//!   single operators without it.

pub mod conditional;
pub mod filter;
pub mod limit;
pub mod map;
pub mod metrics;
pub mod paged;
pub mod sequence;
pub mod stats;
pub mod traits;

pub use conditional::{SkipWhile, TakeWhile};
pub use filter::{Filter, FilterIndexed};
pub use limit::{Skip, Take};
pub use map::Map;
pub use paged::PagedGroupSum;
pub use sequence::{Sequence, SequenceExt};
pub use stats::OpStats;
pub use traits::Operator;

pub use lazyq_core::prelude::{CountPolicy, Error, Result, SequenceConfig};

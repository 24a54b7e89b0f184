//! Convenient re-exports for downstream crates.

pub use crate::config::{CountPolicy, SequenceConfig};
pub use crate::count::{resolve_count, resolve_page_size};
pub use crate::error::{Error, Result};

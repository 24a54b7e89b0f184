//! Validation of caller-supplied counts and page sizes.
//!
//! Counts arrive as `i64` so a negative value can be reported instead of
//! wrapping. Everything past this module works with `usize`.

use crate::config::CountPolicy;
use crate::error::{Error, Result};

/// Resolve an element count for `op` under `policy`.
pub fn resolve_count(op: &'static str, count: i64, policy: CountPolicy) -> Result<usize> {
    if count < 0 {
        return match policy {
            CountPolicy::Reject => Err(Error::invalid_argument(
                op,
                format!("count must be non-negative, got {count}"),
            )),
            CountPolicy::Clamp => Ok(0),
        };
    }
    Ok(usize::try_from(count).unwrap_or(usize::MAX))
}

/// Resolve a page size; zero and negative sizes are always rejected.
pub fn resolve_page_size(op: &'static str, page_size: i64) -> Result<usize> {
    if page_size <= 0 {
        return Err(Error::invalid_argument(
            op,
            format!("page size must be positive, got {page_size}"),
        ));
    }
    Ok(usize::try_from(page_size).unwrap_or(usize::MAX))
}

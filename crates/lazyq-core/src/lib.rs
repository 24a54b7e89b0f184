#![forbid(unsafe_code)]
//! lazyq-core: shared error type, count validation, and configuration.
//!
//! Nothing in here iterates. The operator crate builds on these pieces so that
//! every operator validates its arguments the same way.

pub mod config;
pub mod count;
pub mod error;
pub mod prelude;

//! Everyday utility recipes over the standard library and a few ecosystem crates.
//!
//! Each module is a small, independent set of operations: string joining and
//! splitting, collection pipelines over the [`domain::Person`] sample type,
//! comparator composition, closed ranges, escaping, checked arithmetic, file
//! helpers and a stopwatch.

pub mod cli;
pub mod collections;
pub mod config;
pub mod domain;
pub mod errors;
pub mod escape;
pub mod exitcode;
pub mod fsio;
pub mod math;
pub mod ordering;
pub mod stopwatch;
pub mod strings;
pub mod util;

pub use errors::{CookbookError, CookbookResult};

//! Domain layer: sample data and value types
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod person;
pub mod range;

pub use person::{name_or_unknown, parent_name_or_unknown, sample_person, sample_persons, Person};
pub use range::ClosedRange;

//! Merging keyed mappings.
//!
//! Unlike the rest of the crate, these helpers mutate their target in place and hand it back, so
//! that calls can be chained.

mod merge;

pub use merge::*;

//! Helpers over ordered sequences and, where noted, keyed mappings.
//!
//! # Method
//! Sequences are taken as slices and results are handed back as new [`Vec`]s, cloning elements
//! where they need to be owned. Helpers which make sense for both sequences and mappings ([`each`],
//! [`contains`], [`reduce`], [`every`], [`some`] and [`sort_by`]) accept any
//! [`Collection`](crate::traits::Collection).
//!
//! None of these helpers depend on each other.

mod access;
mod filter;
mod nested;
mod predicate;
mod set;
#[cfg(feature = "shuffle")]
mod shuffle;
mod transform;
mod tests;

pub use access::*;
pub use filter::*;
pub use nested::*;
pub use predicate::*;
pub use set::*;
#[cfg(feature = "shuffle")]
pub use shuffle::*;
pub use transform::*;

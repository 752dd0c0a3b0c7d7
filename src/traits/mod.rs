//! Traits which let a single helper accept several shapes of input.
//!
//! [`Collection`] covers anything that can be walked as `(key, value)` pairs, which includes both
//! ordered sequences (keyed by index) and keyed mappings. [`Mapping`] covers keyed lookup and
//! insertion, used for merging and for reading properties out of records. [`Truthy`] gives values
//! a notion of truthiness for predicates that default to the identity.

mod collection;
mod mapping;
mod truthy;

pub use collection::*;
pub use mapping::*;
pub use truthy::*;

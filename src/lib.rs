//! A small belt of collection, object and function utilities.
//!
//! # Purpose
//! Every function in this crate is an independent helper: it takes a collection (or a function)
//! from the caller, does one thing with it and hands back a new value. Nothing here calls anything
//! else here, and nothing keeps state between calls, except for the wrappers produced by
//! `once` and `memoize` which own their state privately.
//!
//! # Layout
//! - `collections`: access, filtering, set operations, transformation, predicates and shuffling
//!   over ordered sequences (slices) and, where it makes sense, keyed mappings.
//! - `objects`: merging keyed mappings with `extend` and
//!   `defaults`.
//! - `functions`: wrapping functions with `Once`,
//!   `Memoize` and scheduling them with `delay`.
//! - [`traits`]: the small set of traits which let one helper accept both sequences and mappings.
//!
//! # Error Handling
//! The helpers don't validate their input. Where a dynamically typed library would blow up on an
//! out of range index, these return an [`Option`] or a clamped slice instead. The only two things
//! that can really fail are looking up a method that isn't in a method table and asking the OS
//! for a timer thread, both of which are reported through [`Error`].
//!
//! When this crate employs errors via [`Result`]s, it does so with small structs that implement
//! [`Error`](std::error::Error), combined into one enum for static dispatch.
//!
//! # Dependencies
//! Errors use `derive_more` to skip the repetitive impls. The function wrappers use `parking_lot`
//! for their per-instance locks, `shuffle` uses `rand` as its source of
//! random indices and `delay` reports through `tracing`.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "functions")]
pub mod functions;
#[cfg(feature = "objects")]
pub mod objects;
pub mod traits;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{Error, UnknownMethod};
#[cfg(feature = "delay")]
#[doc(inline)]
pub use util::error::TimerSpawnFailed;

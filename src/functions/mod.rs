//! Wrappers around caller-supplied functions.
//!
//! [`Once`] and [`Memoize`] own their state privately and guard it with a lock scoped to that one
//! wrapper, so a wrapper shared between threads never runs its function twice for the same input.
//! [`delay`] is the only asynchronous helper in the crate: it hands the call to a timer thread and
//! returns immediately.

#[cfg(feature = "delay")]
mod delay;
mod memoize;
mod once;

#[cfg(feature = "delay")]
pub use delay::*;
pub use memoize::*;
pub use once::*;

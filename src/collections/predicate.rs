use crate::traits::{Collection, Truthy};

/// Returns true if `predicate` holds for every value of `collection`, stopping at the first value
/// for which it doesn't.
///
/// An empty collection, or a missing predicate, is trivially true.
pub fn every<C, P>(collection: &C, predicate: Option<P>) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    match predicate {
        Some(mut predicate) => collection.values().all(|value| predicate(value)),
        None => true,
    }
}

/// Returns true if at least one value of `collection` passes `predicate`, stopping at the first
/// that does. Without a predicate, values are tested for their own [truthiness](Truthy).
///
/// An empty collection is always false.
pub fn some<C, P>(collection: &C, predicate: Option<P>) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
    P: FnMut(&C::Value) -> bool,
{
    match predicate {
        Some(mut predicate) => collection.values().any(|value| predicate(value)),
        None => collection.values().any(|value| value.is_truthy()),
    }
}

/// Like [`some`] with a mandatory predicate, for values which have no notion of truthiness.
pub fn some_by<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    collection.values().any(|value| predicate(value))
}

use std::collections::HashSet;
use std::hash::Hash;

use crate::traits::Collection;

/// Returns the elements of `seq` which pass `predicate`, in their original order.
pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Returns the elements of `seq` which fail `predicate`, in their original order. Together with
/// [`filter`], this partitions `seq`.
pub fn reject<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().filter(|item| !predicate(item)).cloned().collect()
}

/// Returns the distinct elements of `seq`, each at the position of its first occurrence.
pub fn uniq<T: Hash + Eq + Clone>(seq: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(seq.len());
    let mut result = Vec::new();

    for item in seq {
        // Only clone the first occurrence.
        if seen.insert(item) {
            result.push(item.clone());
        }
    }

    result
}

/// Returns true if any value of `collection` is equal to `target`. For mappings, only values are
/// compared, never keys.
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    collection.values().any(|value| value == target)
}

use crate::traits::Collection;

/// Returns the first element of `seq`, or [`None`] if it is empty.
pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// Returns the leading `n` elements of `seq`. Asking for more elements than are available returns
/// the whole sequence.
pub fn first_n<T>(seq: &[T], n: usize) -> &[T] {
    &seq[..n.min(seq.len())]
}

/// Returns the last element of `seq`, or [`None`] if it is empty.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// Returns the trailing `n` elements of `seq`. Asking for more elements than are available returns
/// the whole sequence.
pub fn last_n<T>(seq: &[T], n: usize) -> &[T] {
    &seq[seq.len().saturating_sub(n)..]
}

/// Calls `iterator(value, key, collection)` once for every entry of `collection`.
///
/// Sequences are visited in order with their index as the key. Mappings are visited in the order
/// they provide.
pub fn each<'a, C, F>(collection: &'a C, mut iterator: F)
where
    C: Collection + ?Sized + 'a,
    F: FnMut(&'a C::Value, C::Key<'a>, &'a C),
{
    for (key, value) in collection.entries() {
        iterator(value, key, collection);
    }
}

/// Returns the index of the first element equal to `target`, or [`None`] if there isn't one.
pub fn index_of<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().position(|item| item == target)
}

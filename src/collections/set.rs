use std::iter::FusedIterator;
use std::slice;

/// Creates a borrowed iterator over the items of `first` that appear in every one of `others`.
/// (`first ∩ others[0] ∩ others[1] ...`)
///
/// Items are yielded in `first`'s order, duplicates within `first` included.
pub fn intersection_iter<'a, T: PartialEq>(
    first: &'a [T],
    others: &'a [&'a [T]],
) -> Intersection<'a, T> {
    Intersection {
        inner: first.iter(),
        others,
    }
}

/// Creates a borrowed iterator over the items of `first` that appear in none of `others`.
/// (`first \ others[0] \ others[1] ...`)
pub fn difference_iter<'a, T: PartialEq>(
    first: &'a [T],
    others: &'a [&'a [T]],
) -> Difference<'a, T> {
    Difference {
        inner: first.iter(),
        others,
    }
}

/// Returns the items of `first` shared with every one of `others`, preserving `first`'s order.
pub fn intersection<T: PartialEq + Clone>(first: &[T], others: &[&[T]]) -> Vec<T> {
    intersection_iter(first, others).cloned().collect()
}

/// Returns the items of `first` that are present in none of `others`, preserving `first`'s order.
pub fn difference<T: PartialEq + Clone>(first: &[T], others: &[&[T]]) -> Vec<T> {
    difference_iter(first, others).cloned().collect()
}

pub struct Intersection<'a, T: 'a> {
    pub(crate) inner: slice::Iter<'a, T>,
    pub(crate) others: &'a [&'a [T]],
}

impl<'a, T: PartialEq + 'a> Iterator for Intersection<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let others = self.others;
        self.inner
            .by_ref()
            .find(|item| others.iter().all(|other| other.contains(*item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T: PartialEq + 'a> FusedIterator for Intersection<'a, T> {}

pub struct Difference<'a, T: 'a> {
    pub(crate) inner: slice::Iter<'a, T>,
    pub(crate) others: &'a [&'a [T]],
}

impl<'a, T: PartialEq + 'a> Iterator for Difference<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let others = self.others;
        self.inner
            .by_ref()
            .find(|item| !others.iter().any(|other| other.contains(*item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T: PartialEq + 'a> FusedIterator for Difference<'a, T> {}

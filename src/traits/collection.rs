use std::collections::{BTreeMap, HashMap, btree_map, hash_map};
use std::hash::BuildHasher;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

/// A container that can be walked as `(key, value)` pairs.
///
/// Ordered sequences are keyed by their index and are walked in order. Keyed mappings are keyed by
/// a reference to their own keys and are walked in whatever order the mapping provides.
pub trait Collection {
    type Key<'a>
    where
        Self: 'a;

    type Value;

    type Entries<'a>: Iterator<Item = (Self::Key<'a>, &'a Self::Value)>
    where
        Self: 'a;

    /// Returns an iterator over every entry in the collection, visiting each exactly once.
    fn entries(&self) -> Self::Entries<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the values of the collection, discarding their keys.
    fn values(&self) -> Values<'_, Self> {
        Values {
            inner: self.entries(),
        }
    }
}

pub struct Values<'a, C: Collection + ?Sized + 'a> {
    pub(crate) inner: C::Entries<'a>,
}

impl<'a, C: Collection + ?Sized + 'a> Iterator for Values<'a, C> {
    type Item = &'a C::Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, C> FusedIterator for Values<'a, C>
where
    C: Collection + ?Sized + 'a,
    C::Entries<'a>: FusedIterator,
{
}

impl<T> Collection for [T] {
    type Key<'a>
        = usize
    where
        Self: 'a;

    type Value = T;

    type Entries<'a>
        = Enumerate<slice::Iter<'a, T>>
    where
        Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Key<'a>
        = usize
    where
        Self: 'a;

    type Value = T;

    type Entries<'a>
        = Enumerate<slice::Iter<'a, T>>
    where
        Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Key<'a>
        = usize
    where
        Self: 'a;

    type Value = T;

    type Entries<'a>
        = Enumerate<slice::Iter<'a, T>>
    where
        Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter().enumerate()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    type Value = V;

    type Entries<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    type Value = V;

    type Entries<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

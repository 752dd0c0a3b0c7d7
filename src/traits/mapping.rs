use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, btree_map, hash_map};
use std::hash::{BuildHasher, Hash};

/// A keyed mapping which supports lookup, insertion and enumeration of its own entries.
///
/// Lookups are generic over a borrowed form of the key so that records keyed by [`String`] can be
/// queried with a `&str` property name.
pub trait Mapping {
    type Key;

    type Value;

    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    fn get<Q>(&self, key: &Q) -> Option<&Self::Value>
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Ord + ?Sized;

    fn contains_key(&self, key: &Self::Key) -> bool;

    /// Inserts a value under the provided key, replacing any previous value.
    fn insert(&mut self, key: Self::Key, value: Self::Value);

    /// Returns an iterator over all entries in the mapping, as references.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<K: Hash + Eq, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;

    type Value = V;

    type Iter<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        HashMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        HashMap::insert(self, key, value);
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;

    type Value = V;

    type Iter<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        BTreeMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        BTreeMap::insert(self, key, value);
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }
}

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use crate::traits::{Collection, Mapping};
use crate::util::error::UnknownMethod;

/// Returns the result of applying `transform` to each element of `seq`, in order. The result
/// always has the same length as `seq`.
pub fn map<T, U, F>(seq: &[T], transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    seq.iter().map(transform).collect()
}

/// Returns the value of `property` for every record in `records`, in order. Records which don't
/// have the property produce [`None`].
pub fn pluck<R, Q>(records: &[R], property: &Q) -> Vec<Option<R::Value>>
where
    R: Mapping,
    R::Key: Borrow<Q>,
    R::Value: Clone,
    Q: Hash + Ord + ?Sized,
{
    records
        .iter()
        .map(|record| record.get(property).cloned())
        .collect()
}

pub type Method<T, A, R> = Box<dyn Fn(&T, &[A]) -> R>;

/// A table of named methods over `T`, each taking a slice of arguments of type `A` and producing
/// an `R`. Used by [`invoke`] to dispatch by name.
pub struct MethodTable<T, A, R> {
    methods: HashMap<String, Method<T, A, R>>,
}

impl<T, A, R> MethodTable<T, A, R> {
    pub fn new() -> MethodTable<T, A, R> {
        MethodTable {
            methods: HashMap::new(),
        }
    }

    /// Adds a method to the table, replacing any existing method with the same name.
    pub fn with<F>(mut self, name: impl Into<String>, method: F) -> MethodTable<T, A, R>
    where
        F: Fn(&T, &[A]) -> R + 'static,
    {
        self.register(name, method);
        self
    }

    /// Adds a method to the table, returning the method previously registered under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, method: F) -> Option<Method<T, A, R>>
    where
        F: Fn(&T, &[A]) -> R + 'static,
    {
        self.methods.insert(name.into(), Box::new(method))
    }

    pub fn get(&self, name: &str) -> Option<&Method<T, A, R>> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<T, A, R> Default for MethodTable<T, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A, R> Debug for MethodTable<T, A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.methods.keys()).finish()
    }
}

/// Calls the method named `method_name` on every element of `seq` with `args`, collecting the
/// results in order.
///
/// # Errors
/// Returns [`UnknownMethod`] if `table` has no method with that name, without calling anything.
pub fn invoke<T, A, R>(
    seq: &[T],
    table: &MethodTable<T, A, R>,
    method_name: &str,
    args: &[A],
) -> Result<Vec<R>, UnknownMethod> {
    let method = table.get(method_name).ok_or_else(|| UnknownMethod {
        name: method_name.to_owned(),
    })?;

    Ok(seq.iter().map(|item| method(item, args)).collect())
}

/// Folds the values of `collection` from left to right with `combiner(accumulator, value)`.
///
/// When `initial` is [`None`], the first value seeds the fold and folding starts from the second.
/// Returns [`None`] only if there is neither a seed nor any value.
pub fn reduce<C, F>(collection: &C, mut combiner: F, initial: Option<C::Value>) -> Option<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(C::Value, &C::Value) -> C::Value,
{
    let mut values = collection.values();
    let seed = match initial {
        Some(seed) => seed,
        None => values.next()?.clone(),
    };

    Some(values.fold(seed, |acc, value| combiner(acc, value)))
}

/// Like [`reduce`], but with a mandatory seed whose type may differ from the values.
pub fn reduce_with<C, A, F>(collection: &C, mut combiner: F, initial: A) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Value) -> A,
{
    collection
        .values()
        .fold(initial, |acc, value| combiner(acc, value))
}

/// Returns the values of `collection` sorted ascending by `key(value)`. The sort is stable.
pub fn sort_by<C, K, F>(collection: &C, mut key: F) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    K: Ord,
    F: FnMut(&C::Value) -> K,
{
    let mut keyed = collection
        .values()
        .map(|value| (key(value), value))
        .collect::<Vec<_>>();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    keyed.into_iter().map(|(_, value)| value.clone()).collect()
}

/// Returns `records` sorted ascending by the value of `property`. The sort is stable and records
/// without the property come first.
pub fn sort_by_property<R, Q>(records: &[R], property: &Q) -> Vec<R>
where
    R: Mapping + Clone,
    R::Key: Borrow<Q>,
    R::Value: Ord,
    Q: Hash + Ord + ?Sized,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.get(property).cmp(&b.get(property)));
    sorted
}

/// Zips any number of sequences together, so that row `i` holds the `i`th element of each
/// sequence. The result is as long as the longest sequence, with [`None`] standing in for the
/// elements of shorter ones.
pub fn zip<T: Clone>(seqs: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = seqs.iter().map(|seq| seq.len()).max().unwrap_or(0);

    (0..longest)
        .map(|i| seqs.iter().map(|seq| seq.get(i).cloned()).collect())
        .collect()
}

/// Zips two sequences of different element types together, padding the shorter with [`None`].
pub fn zip2<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(Option<A>, Option<B>)> {
    let longest = a.len().max(b.len());

    (0..longest)
        .map(|i| (a.get(i).cloned(), b.get(i).cloned()))
        .collect()
}

use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use parking_lot::Mutex;

/// A function wrapper which caches results by argument.
///
/// The cache only ever grows; nothing is evicted for the lifetime of the wrapper. Lookups and
/// computation happen under a lock scoped to this wrapper, so the function runs at most once per
/// distinct argument even when shared between threads.
pub struct Memoize<F, A, R> {
    func: F,
    cache: Mutex<HashMap<A, R>>,
}

/// Wraps `func` so that its results are cached by argument. Shorthand for [`Memoize::new`].
pub fn memoize<F, A, R>(func: F) -> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    Memoize::new(func)
}

impl<F, A, R> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    pub fn new(func: F) -> Memoize<F, A, R> {
        Memoize {
            func,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached result for `arg`, calling the wrapped function only on a miss.
    ///
    /// The wrapped function must not call back into the same wrapper, as it runs with the lock
    /// held.
    pub fn call(&self, arg: A) -> R {
        let mut cache = self.cache.lock();

        if let Some(result) = cache.get(&arg) {
            return result.clone();
        }

        let result = (self.func)(arg.clone());
        cache.insert(arg, result.clone());
        result
    }

    pub fn is_cached(&self, arg: &A) -> bool {
        self.cache.lock().contains_key(arg)
    }

    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

impl<F, A: Debug, R: Debug> Debug for Memoize<F, A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoize")
            .field("cache", &*self.cache.lock())
            .finish_non_exhaustive()
    }
}

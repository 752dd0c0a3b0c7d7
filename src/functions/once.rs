use std::fmt::{self, Debug, Formatter};
use std::mem;

use parking_lot::Mutex;

/// A function wrapper which calls its function at most once.
///
/// The first [`call`](Once::call) runs the function and caches the result, every later call hands
/// back a clone of that result. The check and the call happen under the same lock, so concurrent
/// first calls still run the function exactly once.
pub struct Once<F, R> {
    state: Mutex<State<F, R>>,
}

enum State<F, R> {
    Pending(F),
    Done(R),
    // The function has been taken out to run and either panicked or is still running.
    Poisoned,
}

/// Wraps `func` so that it is called at most once. Shorthand for [`Once::new`].
pub fn once<F, R>(func: F) -> Once<F, R>
where
    F: FnOnce() -> R,
{
    Once::new(func)
}

impl<F, R> Once<F, R>
where
    F: FnOnce() -> R,
{
    pub fn new(func: F) -> Once<F, R> {
        Once {
            state: Mutex::new(State::Pending(func)),
        }
    }

    /// Calls the wrapped function if it hasn't been called yet, returning its (cached) result.
    ///
    /// The wrapped function must not call back into the same wrapper, as it runs with the lock
    /// held.
    ///
    /// # Panics
    /// Panics if the wrapped function panicked during the first call, as there is no result to
    /// hand back and the function can't be called again.
    pub fn call(&self) -> R
    where
        R: Clone,
    {
        let mut state = self.state.lock();

        if let State::Done(result) = &*state {
            return result.clone();
        }

        match mem::replace(&mut *state, State::Poisoned) {
            State::Pending(func) => {
                let result = func();
                *state = State::Done(result.clone());
                result
            },
            _ => panic!("Once wrapper called again after its function panicked!"),
        }
    }

    /// Returns true if the wrapped function has been called and produced a result.
    pub fn has_run(&self) -> bool {
        matches!(*self.state.lock(), State::Done(_))
    }
}

impl<F, R: Debug> Debug for Once<F, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Once");
        match &*self.state.lock() {
            State::Pending(_) => debug.field("result", &"<pending>"),
            State::Done(result) => debug.field("result", result),
            State::Poisoned => debug.field("result", &"<poisoned>"),
        };
        debug.finish()
    }
}

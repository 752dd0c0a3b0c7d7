use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, warn};

use crate::util::error::{Error, TimerSpawnFailed};

/// How a delayed call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome {
    Fired,
    Cancelled,
    /// The call ran but panicked. The panic is contained to the timer thread.
    Panicked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Pending,
    Running,
    Finished(DelayOutcome),
}

#[derive(Debug)]
struct Timer {
    state: Mutex<TimerState>,
    signal: Condvar,
}

impl Timer {
    // A deadline of `None` lies beyond what `Instant` can represent, so only a cancel ends the wait.
    fn run(&self, deadline: Option<Instant>, call: impl FnOnce()) {
        let mut state = self.state.lock();
        while *state == TimerState::Pending {
            match deadline {
                Some(deadline) if Instant::now() >= deadline => break,
                Some(deadline) => {
                    self.signal.wait_until(&mut state, deadline);
                },
                None => self.signal.wait(&mut state),
            }
        }

        if *state != TimerState::Pending {
            debug!("delayed call cancelled before firing");
            return;
        }
        *state = TimerState::Running;
        drop(state);

        let outcome = match panic::catch_unwind(AssertUnwindSafe(call)) {
            Ok(()) => DelayOutcome::Fired,
            Err(_) => {
                warn!("delayed call panicked");
                DelayOutcome::Panicked
            },
        };

        *self.state.lock() = TimerState::Finished(outcome);
        self.signal.notify_all();
        debug!(?outcome, "delayed call finished");
    }
}

/// A handle to a call scheduled by [`delay`].
///
/// Dropping the handle leaves the call scheduled.
#[derive(Debug)]
pub struct Delayed {
    timer: Arc<Timer>,
    deadline: Option<Instant>,
}

impl Delayed {
    /// The earliest instant at which the call runs, or [`None`] if the wait is too long to be
    /// represented as an [`Instant`], in which case the call only ends by being cancelled.
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        *self.timer.state.lock() == TimerState::Pending
    }

    /// Stops the call from running. Returns false if it has already started or finished.
    pub fn cancel(&self) -> bool {
        let mut state = self.timer.state.lock();
        if *state != TimerState::Pending {
            return false;
        }

        *state = TimerState::Finished(DelayOutcome::Cancelled);
        self.timer.signal.notify_all();
        debug!("cancelled delayed call");
        true
    }

    /// Blocks until the call has finished or been cancelled.
    pub fn wait(&self) -> DelayOutcome {
        let mut state = self.timer.state.lock();
        loop {
            if let TimerState::Finished(outcome) = *state {
                return outcome;
            }
            self.timer.signal.wait(&mut state);
        }
    }

    /// Like [`wait`](Delayed::wait), but gives up after `timeout`, returning [`None`].
    /// A timeout too long to be represented as an [`Instant`] waits without a limit.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<DelayOutcome> {
        let Some(until) = Instant::now().checked_add(timeout) else {
            return Some(self.wait());
        };
        let mut state = self.timer.state.lock();
        loop {
            if let TimerState::Finished(outcome) = *state {
                return Some(outcome);
            }
            if self.timer.signal.wait_until(&mut state, until).timed_out() {
                return match *state {
                    TimerState::Finished(outcome) => Some(outcome),
                    _ => None,
                };
            }
        }
    }
}

/// Schedules `func(args)` to run on a timer thread no earlier than `wait` from now, returning
/// immediately. Whatever `func` returns is discarded.
///
/// Pass several arguments as a tuple. The returned [`Delayed`] can be used to cancel or wait on the
/// call, or simply dropped.
///
/// # Errors
/// Returns [`Error::TimerSpawnFailed`] if the OS refuses to create the timer thread.
pub fn delay<F, A, R>(func: F, wait: Duration, args: A) -> Result<Delayed, Error>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    let timer = Arc::new(Timer {
        state: Mutex::new(TimerState::Pending),
        signal: Condvar::new(),
    });
    let deadline = Instant::now().checked_add(wait);
    let shared = Arc::clone(&timer);

    thread::Builder::new()
        .name(String::from("delay"))
        .spawn(move || {
            shared.run(deadline, move || {
                func(args);
            });
        })
        .map_err(|error| {
            warn!(%error, "failed to spawn timer thread");
            TimerSpawnFailed(error)
        })?;

    debug!(?wait, "scheduled delayed call");
    Ok(Delayed { timer, deadline })
}

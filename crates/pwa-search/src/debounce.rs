//! Cancel-and-replace debounce timer.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A single-slot debounce timer.
///
/// At most one commit is scheduled at a time. Scheduling a new commit
/// supersedes the previous one, so only the latest value is ever committed
/// after the quiet period. Timers run on the runtime handed in at
/// construction, so the debouncer also works when driven from synchronous
/// code.
///
/// Every schedule or cancel bumps a generation counter. A timer that has
/// already woken compares its generation under the same lock before
/// committing, so a superseded commit never lands after [`Debouncer::cancel`]
/// has returned, even on a multi-threaded runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    runtime: Handle,
    generation: Arc<Mutex<u64>>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period, timing on `runtime`.
    pub fn new(delay: Duration, runtime: Handle) -> Self {
        Self {
            delay,
            runtime,
            generation: Arc::new(Mutex::new(0)),
            pending: None,
        }
    }

    /// Schedule `commit` to run once the quiet period has elapsed,
    /// replacing any commit that is still waiting.
    pub fn schedule<F>(&mut self, commit: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let scheduled = {
            let mut generation = lock(&self.generation);
            *generation += 1;
            *generation
        };

        let delay = self.delay;
        let generation = Arc::clone(&self.generation);
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;

            let current = lock(&generation);
            if *current == scheduled {
                commit();
            }
        }));
    }

    /// Drop the waiting commit, if any. Returns whether one was waiting.
    ///
    /// A commit already running on another worker finishes before this
    /// returns.
    pub fn cancel(&mut self) -> bool {
        *lock(&self.generation) += 1;

        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// Whether a commit is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn lock(generation: &Mutex<u64>) -> std::sync::MutexGuard<'_, u64> {
    generation.lock().unwrap_or_else(PoisonError::into_inner)
}

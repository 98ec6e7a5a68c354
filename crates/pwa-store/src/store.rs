//! The store handle.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

use crate::action::Action;
use crate::reducer::reduce;
use crate::state::AppState;

type Listener = Arc<dyn Fn(&Action) + Send + Sync>;

/// Identifier returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Shared, cloneable handle to the application state.
///
/// Clones share the same state and subscribers. The state lock is never held
/// while listeners run, so a listener may dispatch again.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    state: Mutex<AppState>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Store");
        // Formatting may happen inside a `dispatch_if` predicate
        match self.inner.state.try_lock() {
            Ok(state) => debug.field("state", &*state),
            Err(TryLockError::Poisoned(poisoned)) => debug.field("state", &*poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => debug.field("state", &"<locked>"),
        };
        debug
            .field("listeners", &self.listeners_guard().len())
            .finish()
    }
}

impl Store {
    /// Create a store with an empty state tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and notify subscribers.
    pub fn dispatch(&self, action: Action) {
        self.dispatch_if(|_| true, action);
    }

    /// Apply an action only if `predicate` holds for the current state.
    ///
    /// The check and the write happen under the same lock. Returns whether
    /// the action was applied.
    ///
    /// `predicate` runs with the state lock held and must not call back into
    /// this store (`state`, `select`, `dispatch`); the lock is not reentrant
    /// and such a call deadlocks. `Debug` formatting is safe.
    pub fn dispatch_if(&self, predicate: impl FnOnce(&AppState) -> bool, action: Action) -> bool {
        {
            let mut state = self.state_guard();
            if !predicate(&state) {
                return false;
            }
            tracing::debug!(
                action = %action.kind(),
                product_id = action.product_id(),
                "dispatch"
            );
            reduce(&mut state, action.clone());
        }
        self.notify(&action);
        true
    }

    /// Snapshot of the whole state tree.
    pub fn state(&self) -> AppState {
        self.state_guard().clone()
    }

    /// Read a projection of the state without cloning the tree.
    pub fn select<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        f(&self.state_guard())
    }

    /// Register a listener called after every applied action.
    pub fn subscribe(&self, listener: impl Fn(&Action) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners_guard().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners_guard();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn notify(&self, action: &Action) {
        let listeners: Vec<Listener> = self
            .listeners_guard()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(action);
        }
    }

    fn state_guard(&self) -> MutexGuard<'_, AppState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn listeners_guard(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Listener)>> {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

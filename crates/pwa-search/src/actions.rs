//! Outgoing callbacks of the search overlay.

use pwa_store::{Action, Store};

/// Callbacks the search overlay uses to talk to the rest of the app.
pub trait SearchActions: Send + Sync {
    /// Commit a search phrase.
    fn set_search_phrase(&self, phrase: &str);

    /// Request the overlay to be shown or hidden.
    fn toggle_search(&self, visible: bool);

    /// Run the search for the committed phrase.
    ///
    /// Takes no arguments; the phrase travels through the store.
    fn submit_search(&self);
}

/// [`SearchActions`] backed by the shared store.
pub struct StoreSearchActions {
    store: Store,
    on_submit: Box<dyn Fn() + Send + Sync>,
}

impl StoreSearchActions {
    /// Create store-backed actions with a submit callback.
    pub fn new(store: Store, on_submit: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            store,
            on_submit: Box::new(on_submit),
        }
    }
}

impl std::fmt::Debug for StoreSearchActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreSearchActions")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl SearchActions for StoreSearchActions {
    fn set_search_phrase(&self, phrase: &str) {
        self.store
            .dispatch(Action::SetSearchPhrase(phrase.to_string()));
    }

    fn toggle_search(&self, visible: bool) {
        self.store.dispatch(Action::ToggleSearch(visible));
    }

    fn submit_search(&self) {
        (self.on_submit)();
    }
}

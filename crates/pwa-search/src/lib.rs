//! Search overlay state and debounced input synchronisation.
//!
//! Keystrokes update a local input mirror immediately; the committed search
//! phrase in the store follows after a quiet period. Blur, focus and submit
//! flush the pending commit so the store matches the mirror at those points.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pwa_search::{SearchConfig, SearchSync, StoreSearchActions};
//!
//! let actions = Arc::new(StoreSearchActions::new(store.clone(), || submit()));
//! let mut search = SearchSync::new(SearchConfig::default(), actions, Handle::current());
//!
//! search.set_active(true, &location);
//! search.did_render();
//! search.on_keystroke("red sh");
//! search.on_keystroke("red shoes");
//! search.on_submit();
//! ```

mod actions;
mod config;
mod debounce;
mod session;
mod sync;

pub use actions::{SearchActions, StoreSearchActions};
pub use config::SearchConfig;
pub use debounce::Debouncer;
pub use session::{AnimationPhase, InputState, SearchSessionState, SearchView};
pub use sync::SearchSync;

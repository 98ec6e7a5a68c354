//! Shared application store for the storefront client.
//!
//! The store is the only shared mutable resource between the search overlay,
//! the review form and the product variant cache. Every write goes through a
//! single [`Action`] applied by a pure reducer under one lock, so no caller
//! can observe a partially applied update.
//!
//! # Architecture
//!
//! - `state.rs` - The state tree (`AppState`, `ProductState`, `SearchState`)
//! - `action.rs` - Life-cycle actions dispatched into the store
//! - `reducer.rs` - Pure `(state, action) -> state` transition
//! - `freshness.rs` - Cache freshness policies and the fetch decision rule
//! - `store.rs` - The `Store` handle (dispatch, snapshot, subscribe)
//!
//! # Example
//!
//! ```ignore
//! use pwa_store::{Action, Store};
//!
//! let store = Store::new();
//! store.dispatch(Action::SetSearchPhrase("shoes".into()));
//! assert_eq!(store.select(|s| s.search.phrase.clone()), "shoes");
//! ```

mod action;
mod freshness;
mod reducer;
mod state;
mod store;

pub use action::{Action, ActionKind};
pub use freshness::{AlwaysStale, FreshnessPolicy, TtlFreshness, should_fetch};
pub use reducer::reduce;
pub use state::{AppState, ProductState, SearchState, VariantCacheEntry};
pub use store::{Store, SubscriptionId};

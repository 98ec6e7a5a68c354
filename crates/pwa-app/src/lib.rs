//! Storefront client composition root.
//!
//! Wires the interactive components over one shared store:
//!
//! - **Search** (`pwa-search`): debounced search overlay
//! - **Reviews** (`pwa-review`): review form validation and submission
//! - **Product** (`pwa-product`): variant fetch-or-reuse cache
//!
//! and provides the ambient pieces around them: layered TOML configuration
//! (`config`), `tracing` subscriber set-up (`logging`) and configuration
//! errors (`error`).
//!
//! # Example
//!
//! ```ignore
//! use pwa_app::{App, AppConfig};
//!
//! let config = AppConfig::load_or_default(Path::new("storefront.toml"));
//! pwa_app::logging::init_logging(&LogConfig::from_settings(&config.logging))?;
//!
//! let runtime = tokio::runtime::Runtime::new()?;
//! let mut app = App::new(config, client, || println!("search submitted"), runtime.handle().clone());
//! app.store().dispatch(Action::ToggleSearch(true));
//! app.sync_search_visibility();
//! ```

pub mod config;
pub mod error;
pub mod logging;

use std::sync::Arc;

use pwa_navigation::{History, Location, QueryParams, TabBarHomeAction};
use pwa_product::{FetchOutcome, PipelineClient, VariantFetcher};
use pwa_review::{ReviewForm, ReviewRecord};
use pwa_search::{SearchSync, StoreSearchActions};
use pwa_store::Store;
use tokio::runtime::Handle;

pub use config::AppConfig;
pub use error::{ConfigError, Result};

/// The wired-up client.
pub struct App<C> {
    config: AppConfig,
    store: Store,
    location: Location,
    search: SearchSync,
    variants: VariantFetcher<C>,
}

impl<C: PipelineClient> App<C> {
    /// Create the client around a fresh store.
    ///
    /// `on_submit_search` runs when the search overlay submits; the phrase is
    /// already committed to the store at that point. Debounce timers and
    /// remote calls run on `runtime`.
    pub fn new(
        config: AppConfig,
        client: Arc<C>,
        on_submit_search: impl Fn() + Send + Sync + 'static,
        runtime: Handle,
    ) -> Self {
        let store = Store::new();
        let actions = Arc::new(StoreSearchActions::new(store.clone(), on_submit_search));
        let search = SearchSync::new(config.search.clone(), actions, runtime.clone());
        let variants = VariantFetcher::new(
            store.clone(),
            client,
            config.product.freshness(),
            runtime,
        );

        tracing::info!(
            debounce_ms = config.search.debounce_ms,
            max_review_length = config.review.max_length,
            variants_ttl_secs = config.product.ttl_secs,
            "storefront client started"
        );

        Self {
            config,
            store,
            location: Location::default(),
            search,
            variants,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Current location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Record a route change.
    pub fn set_location(&mut self, href: &str) {
        self.location = Location::parse(href);
    }

    /// Search overlay.
    pub fn search(&self) -> &SearchSync {
        &self.search
    }

    /// Search overlay, for feeding input events.
    pub fn search_mut(&mut self) -> &mut SearchSync {
        &mut self.search
    }

    /// Forward the store's `search.active` flag to the search overlay.
    pub fn sync_search_visibility(&mut self) {
        let active = self.store.select(|state| state.search.active);
        let params: &dyn QueryParams = &self.location;
        self.search.set_active(active, params);
    }

    /// Make sure variants of a product are cached or being fetched.
    pub fn fetch_variants(&self, product_id: &str) -> FetchOutcome {
        self.variants.fetch_variants(product_id)
    }

    /// Create a review form for a product using the configured limits.
    pub fn review_form(
        &self,
        existing: ReviewRecord,
        author_name: &str,
        product_id: Option<String>,
    ) -> ReviewForm {
        ReviewForm::initialize(self.config.review, existing, author_name, product_id)
    }

    /// Handle a click on the tab bar's home entry.
    pub fn click_home_tab(&self, history: &dyn History) -> bool {
        TabBarHomeAction.handle_click(self.location.pathname(), history)
    }
}

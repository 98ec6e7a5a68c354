//! Fetch-or-reuse cache for product variants.
//!
//! The cache itself lives in the store. This module only decides whether a
//! remote call is needed and reports its life-cycle through actions:
//!
//! ```text
//! absent / error / stale ──request──▶ pending ──received──▶ present
//!                                        │
//!                                        └─────error──────▶ error
//! ```
//!
//! The pending marker is written before the remote call starts, under the
//! same lock as the freshness check, so a second caller for the same product
//! sees it and skips.

use std::sync::Arc;

use chrono::Utc;
use pwa_store::{Action, FreshnessPolicy, Store, TtlFreshness, should_fetch};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::pipeline::{PipelineClient, PipelineRequest};

/// Pipeline returning the variants of a product.
pub const GET_PRODUCT_VARIANTS: &str = "getProductVariants";

/// Configuration for the variant cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantCacheConfig {
    /// Seconds received variants stay fresh.
    pub ttl_secs: u64,
}

impl Default for VariantCacheConfig {
    fn default() -> Self {
        Self { ttl_secs: 3600 }
    }
}

impl VariantCacheConfig {
    /// Freshness policy for this configuration.
    pub fn freshness(&self) -> TtlFreshness {
        TtlFreshness::from_secs(self.ttl_secs)
    }
}

/// What a call to [`VariantFetcher::fetch_variants`] did.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Cached data was reused or a request is already in flight.
    Skipped,
    /// A remote call was started; the task settles the cache entry.
    Started(JoinHandle<()>),
}

impl FetchOutcome {
    /// Whether a remote call was started.
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }

    /// Wait until the started call (if any) has settled the cache entry.
    pub async fn settled(self) {
        if let Self::Started(task) = self
            && let Err(error) = task.await
        {
            tracing::warn!(%error, "variant fetch task did not complete");
        }
    }
}

/// Fetches product variants into the store, reusing fresh cached data.
pub struct VariantFetcher<C> {
    store: Store,
    client: Arc<C>,
    freshness: Arc<dyn FreshnessPolicy>,
    runtime: Handle,
}

impl<C> Clone for VariantFetcher<C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            client: Arc::clone(&self.client),
            freshness: Arc::clone(&self.freshness),
            runtime: self.runtime.clone(),
        }
    }
}

impl<C: PipelineClient> VariantFetcher<C> {
    /// Create a fetcher writing into `store`. Remote calls run on `runtime`.
    pub fn new(
        store: Store,
        client: Arc<C>,
        freshness: impl FreshnessPolicy + 'static,
        runtime: Handle,
    ) -> Self {
        Self {
            store,
            client,
            freshness: Arc::new(freshness),
            runtime,
        }
    }

    /// Make sure variants for `product_id` are cached or being fetched.
    ///
    /// Never fails: a failed remote call is logged and leaves an error entry
    /// in the store. May be called from outside the fetcher's runtime.
    pub fn fetch_variants(&self, product_id: &str) -> FetchOutcome {
        let now = Utc::now();
        let freshness = &*self.freshness;
        let started = self.store.dispatch_if(
            |state| should_fetch(state.product.variants(product_id), freshness, now),
            Action::RequestProductVariants {
                product_id: product_id.to_string(),
            },
        );

        if !started {
            tracing::debug!(product_id, "variants cached or in flight");
            return FetchOutcome::Skipped;
        }

        let store = self.store.clone();
        let client = Arc::clone(&self.client);
        let product_id = product_id.to_string();

        FetchOutcome::Started(self.runtime.spawn(async move {
            let result = PipelineRequest::new(GET_PRODUCT_VARIANTS)
                .set_input(json!({ "productId": product_id }))
                .dispatch(&*client)
                .await;

            match result {
                Ok(data) => store.dispatch(Action::ReceiveProductVariants {
                    product_id,
                    data,
                    received_at: Utc::now(),
                }),
                Err(error) => {
                    tracing::error!(%error, product_id = %product_id, "failed to fetch product variants");
                    store.dispatch(Action::ErrorProductVariants { product_id });
                }
            }
        }))
    }
}

//! State tree held by the store.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// ROOT STATE
// =============================================================================

/// Root of the application state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Product data and caches.
    pub product: ProductState,

    /// Search overlay state shared with the navigator.
    pub search: SearchState,
}

// =============================================================================
// PRODUCT
// =============================================================================

/// Product-related caches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductState {
    /// Variant cache keyed by product id. A missing key means "absent".
    pub variants_by_product_id: HashMap<String, VariantCacheEntry>,
}

impl ProductState {
    /// Cached variant entry for a product, if any.
    pub fn variants(&self, product_id: &str) -> Option<&VariantCacheEntry> {
        self.variants_by_product_id.get(product_id)
    }
}

/// Cache entry for the variants of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VariantCacheEntry {
    /// A request has been started and not yet settled.
    Pending,

    /// The remote call succeeded.
    Present {
        /// Payload returned by the remote call.
        data: Value,
        /// When the payload was received.
        received_at: DateTime<Utc>,
    },

    /// The last remote call failed.
    Error,
}

impl VariantCacheEntry {
    /// Whether a request is in flight for this entry.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether the last request failed.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Received payload, if present.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Present { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Present { .. } => "present",
            Self::Error => "error",
        }
    }
}

// =============================================================================
// SEARCH
// =============================================================================

/// Search state shared between the navigator and the search overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Last committed (debounced) search phrase.
    pub phrase: String,

    /// Whether the search overlay is requested to be visible.
    pub active: bool,
}

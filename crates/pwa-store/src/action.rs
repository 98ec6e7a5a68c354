//! Actions dispatched into the store.
//!
//! Each variant carries only the data its reducer branch needs.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A single atomic state transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Product variants life-cycle
    /// A variants request was started for a product.
    RequestProductVariants { product_id: String },
    /// Variants were received for a product.
    ReceiveProductVariants {
        product_id: String,
        data: Value,
        received_at: DateTime<Utc>,
    },
    /// The variants request for a product failed.
    ErrorProductVariants { product_id: String },

    // Search
    /// Commit a search phrase.
    SetSearchPhrase(String),
    /// Request the search overlay to be shown or hidden.
    ToggleSearch(bool),
}

/// Discriminant of an [`Action`], for logging and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    RequestProductVariants,
    ReceiveProductVariants,
    ErrorProductVariants,
    SetSearchPhrase,
    ToggleSearch,
}

impl Action {
    /// Discriminant of this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::RequestProductVariants { .. } => ActionKind::RequestProductVariants,
            Action::ReceiveProductVariants { .. } => ActionKind::ReceiveProductVariants,
            Action::ErrorProductVariants { .. } => ActionKind::ErrorProductVariants,
            Action::SetSearchPhrase(_) => ActionKind::SetSearchPhrase,
            Action::ToggleSearch(_) => ActionKind::ToggleSearch,
        }
    }

    /// Product id the action refers to, if any.
    pub fn product_id(&self) -> Option<&str> {
        match self {
            Action::RequestProductVariants { product_id }
            | Action::ReceiveProductVariants { product_id, .. }
            | Action::ErrorProductVariants { product_id } => Some(product_id),
            Action::SetSearchPhrase(_) | Action::ToggleSearch(_) => None,
        }
    }
}

impl ActionKind {
    /// Stable action type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestProductVariants => "REQUEST_PRODUCT_VARIANTS",
            Self::ReceiveProductVariants => "RECEIVE_PRODUCT_VARIANTS",
            Self::ErrorProductVariants => "ERROR_PRODUCT_VARIANTS",
            Self::SetSearchPhrase => "SET_SEARCH_PHRASE",
            Self::ToggleSearch => "TOGGLE_SEARCH",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Pure state transitions.

use crate::action::Action;
use crate::state::{AppState, VariantCacheEntry};

/// Apply an action to the state tree.
///
/// Every branch touches exactly one slice of the tree. Variant life-cycle
/// actions only ever replace the entry for their own product id.
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::RequestProductVariants { product_id } => {
            state
                .product
                .variants_by_product_id
                .insert(product_id, VariantCacheEntry::Pending);
        }
        Action::ReceiveProductVariants {
            product_id,
            data,
            received_at,
        } => {
            state
                .product
                .variants_by_product_id
                .insert(product_id, VariantCacheEntry::Present { data, received_at });
        }
        Action::ErrorProductVariants { product_id } => {
            state
                .product
                .variants_by_product_id
                .insert(product_id, VariantCacheEntry::Error);
        }
        Action::SetSearchPhrase(phrase) => {
            state.search.phrase = phrase;
        }
        Action::ToggleSearch(active) => {
            state.search.active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_variant_life_cycle() {
        let mut state = AppState::default();

        reduce(
            &mut state,
            Action::RequestProductVariants {
                product_id: "P1".into(),
            },
        );
        assert!(state.product.variants("P1").is_some_and(VariantCacheEntry::is_pending));

        reduce(
            &mut state,
            Action::ReceiveProductVariants {
                product_id: "P1".into(),
                data: json!({"products": []}),
                received_at: Utc::now(),
            },
        );
        let entry = state.product.variants("P1").cloned();
        assert_eq!(
            entry.as_ref().and_then(VariantCacheEntry::data),
            Some(&json!({"products": []}))
        );

        reduce(
            &mut state,
            Action::ErrorProductVariants {
                product_id: "P1".into(),
            },
        );
        assert!(state.product.variants("P1").is_some_and(VariantCacheEntry::is_error));
    }

    #[test]
    fn test_variant_actions_are_keyed() {
        let mut state = AppState::default();
        reduce(
            &mut state,
            Action::RequestProductVariants {
                product_id: "P1".into(),
            },
        );
        reduce(
            &mut state,
            Action::ErrorProductVariants {
                product_id: "P2".into(),
            },
        );

        assert!(state.product.variants("P1").is_some_and(VariantCacheEntry::is_pending));
        assert!(state.product.variants("P2").is_some_and(VariantCacheEntry::is_error));
        assert!(state.product.variants("P3").is_none());
    }

    #[test]
    fn test_search_actions() {
        let mut state = AppState::default();
        reduce(&mut state, Action::ToggleSearch(true));
        reduce(&mut state, Action::SetSearchPhrase("red shoes".into()));

        assert!(state.search.active);
        assert_eq!(state.search.phrase, "red shoes");
        assert!(state.product.variants_by_product_id.is_empty());
    }
}

//! Integration tests for the store and the fetch decision rule.

use chrono::{Duration, Utc};
use proptest::prelude::*;
use pwa_store::{Action, Store, TtlFreshness, VariantCacheEntry, should_fetch};
use serde_json::json;

fn receive(product_id: &str) -> Action {
    Action::ReceiveProductVariants {
        product_id: product_id.to_string(),
        data: json!({"products": [{"id": format!("{product_id}-1")}]}),
        received_at: Utc::now(),
    }
}

#[test]
fn test_pending_marker_blocks_second_request() {
    let store = Store::new();
    let policy = TtlFreshness::default();

    let first = store.dispatch_if(
        |s| should_fetch(s.product.variants("P1"), &policy, Utc::now()),
        Action::RequestProductVariants {
            product_id: "P1".into(),
        },
    );
    let second = store.dispatch_if(
        |s| should_fetch(s.product.variants("P1"), &policy, Utc::now()),
        Action::RequestProductVariants {
            product_id: "P1".into(),
        },
    );

    assert!(first);
    assert!(!second);
}

#[test]
fn test_fresh_entry_short_circuits() {
    let store = Store::new();
    store.dispatch(receive("P1"));

    let policy = TtlFreshness::from_secs(60);
    let now = Utc::now();
    assert!(!store.select(|s| should_fetch(s.product.variants("P1"), &policy, now)));
    assert!(store.select(|s| should_fetch(
        s.product.variants("P1"),
        &policy,
        now + Duration::seconds(120)
    )));
}

#[test]
fn test_error_entry_is_refetched() {
    let store = Store::new();
    store.dispatch(Action::RequestProductVariants {
        product_id: "P1".into(),
    });
    store.dispatch(Action::ErrorProductVariants {
        product_id: "P1".into(),
    });

    let entry = store.select(|s| s.product.variants("P1").cloned());
    assert_eq!(entry, Some(VariantCacheEntry::Error));
    assert!(should_fetch(entry.as_ref(), &TtlFreshness::default(), Utc::now()));
}

#[test]
fn test_state_serializes_with_status_tag() {
    let store = Store::new();
    store.dispatch(Action::RequestProductVariants {
        product_id: "P1".into(),
    });

    let value = serde_json::to_value(store.state()).unwrap();
    assert_eq!(
        value["product"]["variants_by_product_id"]["P1"]["status"],
        json!("pending")
    );
}

proptest! {
    /// Only the most recent life-cycle action for a product decides its entry.
    #[test]
    fn prop_last_variant_action_wins(steps in prop::collection::vec(0u8..3, 1..20)) {
        let store = Store::new();
        for step in &steps {
            let action = match step {
                0 => Action::RequestProductVariants { product_id: "P1".into() },
                1 => receive("P1"),
                _ => Action::ErrorProductVariants { product_id: "P1".into() },
            };
            store.dispatch(action);
        }

        let entry = store.select(|s| s.product.variants("P1").cloned());
        let label = entry.map(|e| e.label());
        let expected = match steps.last() {
            Some(0) => "pending",
            Some(1) => "present",
            _ => "error",
        };
        prop_assert_eq!(label, Some(expected));
    }
}

//! Error handling and edge case tests.

use quantity_selector::{Action, ItemId, RawAction, Store, StoreConfig, WidgetError};

fn mounted_store() -> Store {
    let store = Store::new(StoreConfig::default()).unwrap();
    store.dispatch(Action::Initialize).unwrap();
    store
}

// --- Invalid Actions ---

#[test]
fn test_unknown_kind_is_invalid_action() {
    let store = mounted_store();
    let before = store.snapshot();

    let result = store.dispatch_raw(RawAction::new("resetQuantity"));
    match result {
        Err(WidgetError::InvalidAction(kind)) => assert_eq!(kind, "resetQuantity"),
        other => panic!("Expected InvalidAction, got {:?}", other),
    }

    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_unknown_kind_from_json() {
    let store = mounted_store();
    let before = store.snapshot();

    let result = store.dispatch_json(r#"{"type": "clear"}"#);
    assert!(matches!(result, Err(WidgetError::InvalidAction(_))));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_malformed_json() {
    let store = mounted_store();
    let result = store.dispatch_json("{not json");
    assert!(matches!(result, Err(WidgetError::Deserialization(_))));
    assert_eq!(store.stats().rejected, 1);
}

#[test]
fn test_select_without_id() {
    let store = mounted_store();
    let result = store.dispatch_raw(RawAction::new("selectItem"));
    assert!(matches!(result, Err(WidgetError::MissingItemId)));
}

// --- Selection Errors ---

#[test]
fn test_select_non_numeric_id() {
    let store = mounted_store();
    let before = store.snapshot();

    let result = store.dispatch(Action::select("Second"));
    assert!(matches!(result, Err(WidgetError::InvalidItemId(_))));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_select_missing_item() {
    let store = mounted_store();
    let before = store.snapshot();

    let result = store.dispatch(Action::select("4"));
    assert!(matches!(result, Err(WidgetError::UnknownItem(ItemId(4)))));
    assert_eq!(store.snapshot(), before);
    assert_eq!(store.snapshot().selected(), ItemId(1));
}

#[test]
fn test_store_usable_after_errors() {
    let store = mounted_store();

    let _ = store.dispatch_raw(RawAction::new("nope"));
    let _ = store.dispatch(Action::select("0"));

    let state = store.dispatch(Action::IncrementQuantity).unwrap();
    assert_eq!(state.quantity(), 2);
    assert_eq!(state.total(), Some(20.0));

    let stats = store.stats();
    assert_eq!(stats.dispatched, 2);
    assert_eq!(stats.rejected, 2);
}

// --- Configuration Errors ---

#[test]
fn test_config_quantity_out_of_range() {
    let result = Store::new(StoreConfig {
        initial_quantity: 12,
        ..Default::default()
    });
    assert!(matches!(result, Err(WidgetError::QuantityOutOfRange(12))));
}

#[test]
fn test_config_unknown_selection() {
    let result = Store::new(StoreConfig {
        initial_selection: Some(ItemId(7)),
        ..Default::default()
    });
    assert!(matches!(result, Err(WidgetError::UnknownItem(ItemId(7)))));
}

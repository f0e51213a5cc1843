//! Order editor action tests

mod common;

use rust_decimal::Decimal;
use serde_json::json;

use common::{MockOrders, raw_order};
use courier_client::{ClientError, OrderEditor, StatusCode, TaskRole};
use shared::client::{DriverChoice, RelatedTaskResponse};
use shared::models::RawOrder;

fn split_order(status: i32) -> RawOrder {
    RawOrder {
        status: Some(json!(status)),
        driver_id: Some("d-5".to_string()),
        notes: Some("leave at door".to_string()),
        cod_amount: Some(json!(25.0)),
        order_fees: Some(json!(4.5)),
        ..raw_order("t-1", "Warehouse 4", "99 Harbor Rd")
    }
}

fn pickup_only_api() -> MockOrders {
    MockOrders {
        order: Some(RawOrder {
            status: Some(json!(0)),
            ..raw_order("t-1", "12 Main St", "12 main st ")
        })
        .into(),
        related: Some(Ok(RelatedTaskResponse {
            status: "success".to_string(),
            has_related_task: true,
            delivery_address: Some("99 Harbor Rd".to_string()),
            delivery_job_id: Some("t-del-7".to_string()),
        }))
        .into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn load_resolves_connected_task_and_substitutes_display_address() {
    let api = pickup_only_api();
    let editor = OrderEditor::load(&api, "t-1").await.unwrap();

    assert_eq!(
        editor.role(),
        &TaskRole::PickupLeg {
            connected_task_id: "t-del-7".to_string()
        }
    );
    assert_eq!(editor.record().connected_task_id.as_deref(), Some("t-del-7"));
    assert_eq!(editor.display_delivery_address(), "99 Harbor Rd");
    // The record itself keeps its own address; classification is unchanged
    assert!(editor.record().is_pickup_only());
}

#[tokio::test]
async fn save_overwrites_local_state_with_the_values_sent() {
    let api = MockOrders {
        order: Some(split_order(0)).into(),
        ..Default::default()
    };
    let mut editor = OrderEditor::load(&api, "t-1").await.unwrap();

    editor.set_cod_amount(Decimal::new(3000, 2));
    editor.set_notes("call first");
    assert!(editor.has_pending_edits());

    let notice = editor.save().await.unwrap();
    assert_eq!(notice.message, "Order saved");
    assert!(!editor.has_pending_edits());
    assert_eq!(editor.record().cod_amount, Decimal::new(3000, 2));
    assert_eq!(editor.record().notes.as_deref(), Some("call first"));
    // Unedited fields are sent as-is
    let updates = api.updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].order_fees, Decimal::new(45, 1));
}

#[tokio::test]
async fn failed_save_retains_pending_edits() {
    let api = MockOrders {
        order: Some(split_order(0)).into(),
        fail_update: true,
        ..Default::default()
    };
    let mut editor = OrderEditor::load(&api, "t-1").await.unwrap();

    editor.set_cod_amount(Decimal::new(3000, 2));
    let err = editor.save().await.unwrap_err();
    assert_eq!(err.to_string(), "update rejected");

    // Edits stay local and unsent so the user may retry
    assert!(editor.has_pending_edits());
    assert_eq!(editor.record().cod_amount, Decimal::new(25, 0));
    assert!(api.updates.lock().unwrap().is_empty());
}

#[tokio::test]
async fn return_swaps_addresses_and_carries_no_cod() {
    let api = MockOrders {
        order: Some(split_order(2)).into(),
        ..Default::default()
    };
    let editor = OrderEditor::load(&api, "t-1").await.unwrap();

    editor.create_return(DriverChoice::Keep).await.unwrap();

    let returns = api.returns.lock().unwrap();
    assert_eq!(returns.len(), 1);
    let request = &returns[0];
    assert_eq!(request.pickup_address, "99 Harbor Rd");
    assert_eq!(request.delivery_address, "Warehouse 4");
    assert_eq!(request.order_fees, Decimal::new(45, 1));
    assert_eq!(request.driver_id.as_deref(), Some("d-5"));

    // The wire payload has no COD field at all
    let payload = serde_json::to_value(request).unwrap();
    assert!(payload.get("codAmount").is_none());
    assert!(payload.get("cod_amount").is_none());
}

#[tokio::test]
async fn return_driver_choice_clear_and_assign() {
    let api = MockOrders {
        order: Some(split_order(0)).into(),
        ..Default::default()
    };
    let editor = OrderEditor::load(&api, "t-1").await.unwrap();

    editor.create_return(DriverChoice::Clear).await.unwrap();
    editor
        .create_return(DriverChoice::Assign("d-9".to_string()))
        .await
        .unwrap();

    let returns = api.returns.lock().unwrap();
    assert_eq!(returns[0].driver_id, None);
    assert_eq!(returns[1].driver_id.as_deref(), Some("d-9"));
}

#[tokio::test]
async fn pickup_only_orders_are_never_returnable() {
    let api = pickup_only_api();
    let editor = OrderEditor::load(&api, "t-1").await.unwrap();

    let err = editor.create_return(DriverChoice::Keep).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(api.returns.lock().unwrap().is_empty());
}

#[tokio::test]
async fn reorder_copies_fields_without_mutating_the_original() {
    let api = MockOrders {
        order: Some(split_order(2)).into(),
        ..Default::default()
    };
    let editor = OrderEditor::load(&api, "t-1").await.unwrap();

    editor
        .reorder(courier_client::ReorderDraft {
            cod_amount: Some(Decimal::new(100, 0)),
            ..Default::default()
        })
        .await
        .unwrap();

    let reorders = api.reorders.lock().unwrap();
    assert_eq!(reorders.len(), 1);
    assert_eq!(reorders[0].pickup_address, "Warehouse 4");
    assert_eq!(reorders[0].delivery_address, "99 Harbor Rd");
    assert_eq!(reorders[0].cod_amount, Decimal::new(100, 0));
    assert_eq!(reorders[0].order_fees, Decimal::new(45, 1));
    // Original untouched
    assert_eq!(editor.record().cod_amount, Decimal::new(25, 0));
}

#[tokio::test]
async fn successful_orders_require_the_explicit_override_to_delete() {
    let api = MockOrders {
        order: Some(split_order(2)).into(),
        ..Default::default()
    };
    let mut editor = OrderEditor::load(&api, "t-1").await.unwrap();

    let err = editor.delete(false).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(editor.is_selected());

    editor.delete(true).await.unwrap();
    assert!(!editor.is_selected());
    assert_eq!(api.deletes.lock().unwrap().as_slice(), ["t-1"]);
}

#[tokio::test]
async fn delete_notice_names_the_paired_task() {
    let api = pickup_only_api();
    let mut editor = OrderEditor::load(&api, "t-1").await.unwrap();

    let notice = editor.delete(false).await.unwrap();
    assert!(notice.message.contains("t-del-7"));
    assert!(!editor.is_selected());
}

#[tokio::test]
async fn only_terminal_statuses_may_be_set_directly() {
    let api = MockOrders {
        order: Some(split_order(0)).into(),
        ..Default::default()
    };
    let mut editor = OrderEditor::load(&api, "t-1").await.unwrap();

    let err = editor.set_status(StatusCode::Started).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    editor.set_status(StatusCode::Failed).await.unwrap();
    assert_eq!(editor.record().status, Some(StatusCode::Failed));
    assert!(editor.is_selected());
    let updates = api.status_updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].0, "t-1");
}

#[tokio::test]
async fn status_override_to_deleted_clears_the_selection() {
    let api = MockOrders {
        order: Some(split_order(0)).into(),
        ..Default::default()
    };
    let mut editor = OrderEditor::load(&api, "t-1").await.unwrap();

    editor.set_status(StatusCode::Deleted).await.unwrap();
    assert_eq!(editor.record().status, Some(StatusCode::Deleted));
    assert!(!editor.is_selected());
}

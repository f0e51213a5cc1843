//! Client-related types shared between the API client and the console
//!
//! Request/response DTOs for the delivery-management API. Wire field names
//! are camelCase throughout; the envelope itself lives in [`crate::response`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RawOrder, StatusCode};
use crate::response::STATUS_SUCCESS;

// =============================================================================
// Order listing
// =============================================================================

/// Order-listing request; pages are 1-indexed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListRequest {
    /// Inclusive range start, ISO timestamp
    pub date_from: String,
    /// Inclusive range end, ISO timestamp
    pub date_to: String,
    pub limit: u32,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_pickups: Option<bool>,
}

/// Order-listing response data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderListData {
    pub orders: Vec<RawOrder>,
    /// Server-reported total; authoritative for pagination when present
    pub total: Option<u64>,
}

// =============================================================================
// Connected-task lookup
// =============================================================================

/// Related-delivery-address lookup response (flat, not enveloped)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTaskResponse {
    pub status: String,
    #[serde(default)]
    pub has_related_task: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_job_id: Option<String>,
}

impl RelatedTaskResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

// =============================================================================
// Order mutations
// =============================================================================

/// Save edited fields on an existing order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub cod_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub order_fees: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Create a new task copying customer/address fields from an existing order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReorderRequest {
    pub source_task_id: String,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub pickup_address: String,
    pub delivery_address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub cod_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub order_fees: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
}

/// What happens to the driver assignment on a return task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverChoice {
    /// Carry the original driver over
    Keep,
    /// Leave the return unassigned
    Clear,
    /// Assign a specific driver
    Assign(String),
}

/// Create a return task: addresses swapped, no COD (returns carry no
/// collection amount), fees carried over
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReturnRequest {
    pub source_task_id: String,
    pub pickup_address: String,
    pub delivery_address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub order_fees: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
}

/// Direct status override, bypassing the normal lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: StatusCode,
}

// =============================================================================
// Token / plan administration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenRequest {
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub return_fee: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignPlanRequest {
    pub merchant_id: String,
    pub plan_id: String,
}

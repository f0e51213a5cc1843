//! Order model
//!
//! A "task" is one delivery unit. A logical order may be split into a pickup
//! leg and a delivery leg, each a separate task with its own identifier. A
//! task whose pickup and delivery addresses are textually equal represents
//! only the pickup leg of a split order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Task status, integer-coded on the wire
///
/// Codes outside the known set are preserved losslessly as `Unknown(n)` and
/// treated conservatively by the eligibility functions below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum StatusCode {
    Assigned,
    Started,
    Successful,
    Failed,
    Arrived,
    Unassigned,
    Accepted,
    Declined,
    Cancelled,
    Deleted,
    Unknown(i32),
}

impl From<i32> for StatusCode {
    fn from(code: i32) -> Self {
        match code {
            0 => StatusCode::Assigned,
            1 => StatusCode::Started,
            2 => StatusCode::Successful,
            3 => StatusCode::Failed,
            4 => StatusCode::Arrived,
            6 => StatusCode::Unassigned,
            7 => StatusCode::Accepted,
            8 => StatusCode::Declined,
            9 => StatusCode::Cancelled,
            10 => StatusCode::Deleted,
            n => StatusCode::Unknown(n),
        }
    }
}

impl From<StatusCode> for i32 {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::Assigned => 0,
            StatusCode::Started => 1,
            StatusCode::Successful => 2,
            StatusCode::Failed => 3,
            StatusCode::Arrived => 4,
            StatusCode::Unassigned => 6,
            StatusCode::Accepted => 7,
            StatusCode::Declined => 8,
            StatusCode::Cancelled => 9,
            StatusCode::Deleted => 10,
            StatusCode::Unknown(n) => n,
        }
    }
}

impl StatusCode {
    /// Numeric wire code
    pub fn code(&self) -> i32 {
        i32::from(*self)
    }

    /// Display label; unrecognized codes render as `Status <n>`
    pub fn label(&self) -> String {
        match self {
            StatusCode::Assigned => "Assigned".to_string(),
            StatusCode::Started => "Started".to_string(),
            StatusCode::Successful => "Successful".to_string(),
            StatusCode::Failed => "Failed".to_string(),
            StatusCode::Arrived => "Arrived".to_string(),
            StatusCode::Unassigned => "Unassigned".to_string(),
            StatusCode::Accepted => "Accepted".to_string(),
            StatusCode::Declined => "Declined".to_string(),
            StatusCode::Cancelled => "Cancelled".to_string(),
            StatusCode::Deleted => "Deleted".to_string(),
            StatusCode::Unknown(n) => format!("Status {}", n),
        }
    }
}

/// Relationship of a task to its paired leg, resolved via backend lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRole {
    /// No paired task; the record stands on its own
    Standalone,
    /// Pickup leg of a split order; the paired delivery task is known
    PickupLeg { connected_task_id: String },
    /// Delivery leg of a split order
    DeliveryLeg { connected_task_id: String },
}

impl TaskRole {
    /// The paired task identifier, when one exists
    pub fn connected_task_id(&self) -> Option<&str> {
        match self {
            TaskRole::Standalone => None,
            TaskRole::PickupLeg { connected_task_id }
            | TaskRole::DeliveryLeg { connected_task_id } => Some(connected_task_id),
        }
    }
}

/// Canonical order record, post-normalization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRecord {
    pub task_id: String,
    /// Completion timestamp as delivered by the backend; parsed only at
    /// render time so an unparseable value can pass through verbatim
    pub completed_at: Option<String>,
    pub driver_id: Option<String>,
    pub driver_name: Option<String>,
    pub driver_phone: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub pickup_address: String,
    pub delivery_address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub cod_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub order_fees: Decimal,
    pub status: Option<StatusCode>,
    pub tags: Option<String>,
    pub notes: Option<String>,
    /// Reference (not ownership) to the paired task; `None` until resolved
    pub connected_task_id: Option<String>,
}

impl OrderRecord {
    /// Pickup-only classification: pickup and delivery addresses equal after
    /// trimming and lowercasing
    pub fn is_pickup_only(&self) -> bool {
        addresses_match(&self.pickup_address, &self.delivery_address)
    }
}

/// Case-insensitive, whitespace-trimmed address comparison
pub fn addresses_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Currency display: always exactly two decimal places
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value)
}

/// Whether the Delete action is offered for a task in this status
///
/// Successful tasks are only removable via an explicit status override;
/// already-cancelled/deleted tasks have nothing to delete; unknown codes are
/// treated conservatively.
pub fn deletable(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::Assigned | StatusCode::Started | StatusCode::Failed
    )
}

/// Whether the Return action is offered
///
/// Pickup-only tasks are never returnable regardless of status: reversing
/// identical addresses is meaningless.
pub fn returnable(pickup_only: bool, status: StatusCode) -> bool {
    if pickup_only {
        return false;
    }
    matches!(
        status,
        StatusCode::Assigned | StatusCode::Started | StatusCode::Successful | StatusCode::Failed
    )
}

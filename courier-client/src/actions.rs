//! Order editor and action orchestrator
//!
//! Four user-invocable operations over one fetched order: save, reorder,
//! return and status override/delete. Each is independently guarded and
//! non-transactional: one request, one notice, no client-side rollback.
//! Local edits are transient until the backend acknowledges a save, at
//! which point the local copy is overwritten with the values sent — never
//! the reverse.

use rust_decimal::Decimal;

use shared::client::{
    CreateReorderRequest, CreateReturnRequest, DriverChoice, UpdateOrderRequest,
    UpdateStatusRequest,
};
use shared::models::{OrderRecord, StatusCode, TaskRole, deletable, returnable};

use crate::api::OrdersApi;
use crate::resolve::resolve_role;
use crate::{ClientError, ClientResult};

/// Transient success notification, one per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Prefer the backend-supplied message; fall back to a fixed one
    fn from_backend(message: Option<String>, fallback: &str) -> Self {
        Self::new(message.unwrap_or_else(|| fallback.to_string()))
    }
}

/// Caller-editable fields for a reorder; unset fields are copied from the
/// source order
#[derive(Debug, Clone, Default)]
pub struct ReorderDraft {
    pub cod_amount: Option<Decimal>,
    pub order_fees: Option<Decimal>,
    pub notes: Option<String>,
    pub driver_id: Option<String>,
}

/// Pending local edits, held unsent until `save`
#[derive(Debug, Clone, Default)]
struct PendingEdits {
    cod_amount: Option<Decimal>,
    order_fees: Option<Decimal>,
    notes: Option<String>,
}

impl PendingEdits {
    fn is_empty(&self) -> bool {
        self.cod_amount.is_none() && self.order_fees.is_none() && self.notes.is_none()
    }
}

/// One order under edit: the fetched record, its resolved role and any
/// pending edits
pub struct OrderEditor<'a> {
    api: &'a dyn OrdersApi,
    record: OrderRecord,
    role: TaskRole,
    display_address: Option<String>,
    edits: PendingEdits,
    selected: bool,
}

impl<'a> OrderEditor<'a> {
    /// Fetch an order, normalize it and resolve its connected task
    pub async fn load(api: &'a dyn OrdersApi, task_id: &str) -> ClientResult<Self> {
        let raw = api.search_order(task_id).await?;
        let mut record = raw.normalize();
        let resolution = resolve_role(api, &record).await;
        record.connected_task_id = resolution.role.connected_task_id().map(str::to_string);

        Ok(Self {
            api,
            record,
            role: resolution.role,
            display_address: resolution.display_address,
            edits: PendingEdits::default(),
            selected: true,
        })
    }

    pub fn record(&self) -> &OrderRecord {
        &self.record
    }

    pub fn role(&self) -> &TaskRole {
        &self.role
    }

    /// Whether an order is still selected (cleared by a successful delete)
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Delivery address to display: the paired task's address when resolved,
    /// otherwise the record's own
    pub fn display_delivery_address(&self) -> &str {
        self.display_address
            .as_deref()
            .unwrap_or(&self.record.delivery_address)
    }

    pub fn has_pending_edits(&self) -> bool {
        !self.edits.is_empty()
    }

    pub fn set_cod_amount(&mut self, value: Decimal) {
        self.edits.cod_amount = Some(value);
    }

    pub fn set_order_fees(&mut self, value: Decimal) {
        self.edits.order_fees = Some(value);
    }

    pub fn set_notes(&mut self, value: impl Into<String>) {
        self.edits.notes = Some(value.into());
    }

    /// Send pending edits upstream
    ///
    /// On success the local record is overwritten with exactly the values
    /// sent (the server is assumed authoritative-equal). On failure the
    /// edits are retained unsent so the user may retry.
    pub async fn save(&mut self) -> ClientResult<Notice> {
        let request = UpdateOrderRequest {
            cod_amount: self.edits.cod_amount.unwrap_or(self.record.cod_amount),
            order_fees: self.edits.order_fees.unwrap_or(self.record.order_fees),
            notes: self.edits.notes.clone().or_else(|| self.record.notes.clone()),
        };

        let message = self.api.update_order(&self.record.task_id, &request).await?;

        self.record.cod_amount = request.cod_amount;
        self.record.order_fees = request.order_fees;
        self.record.notes = request.notes;
        self.edits = PendingEdits::default();
        Ok(Notice::from_backend(message, "Order saved"))
    }

    /// Create a new task copying customer/address fields from this order;
    /// the original task is not mutated
    pub async fn reorder(&self, draft: ReorderDraft) -> ClientResult<Notice> {
        let request = CreateReorderRequest {
            source_task_id: self.record.task_id.clone(),
            customer_name: self.record.customer_name.clone(),
            customer_phone: self.record.customer_phone.clone(),
            pickup_address: self.record.pickup_address.clone(),
            delivery_address: self.record.delivery_address.clone(),
            cod_amount: draft.cod_amount.unwrap_or(self.record.cod_amount),
            order_fees: draft.order_fees.unwrap_or(self.record.order_fees),
            notes: draft.notes.or_else(|| self.record.notes.clone()),
            driver_id: draft.driver_id,
        };

        let message = self.api.create_reorder(&request).await?;
        Ok(Notice::from_backend(message, "Reorder created"))
    }

    /// Create a return task: addresses swapped, no COD, fees carried over
    ///
    /// Guarded by the return-eligibility table; pickup-only tasks are never
    /// returnable.
    pub async fn create_return(&self, driver: DriverChoice) -> ClientResult<Notice> {
        let status = self.record.status.ok_or_else(|| {
            ClientError::Validation("Order status is unknown; return is unavailable".to_string())
        })?;
        if !returnable(self.record.is_pickup_only(), status) {
            return Err(ClientError::Validation(
                "Return is not available for this order".to_string(),
            ));
        }

        let driver_id = match driver {
            DriverChoice::Keep => self.record.driver_id.clone(),
            DriverChoice::Clear => None,
            DriverChoice::Assign(id) => Some(id),
        };
        let request = CreateReturnRequest {
            source_task_id: self.record.task_id.clone(),
            pickup_address: self.record.delivery_address.clone(),
            delivery_address: self.record.pickup_address.clone(),
            order_fees: self.record.order_fees,
            notes: self.record.notes.clone(),
            driver_id,
        };

        let message = self.api.create_return(&request).await?;
        Ok(Notice::from_backend(message, "Return created"))
    }

    /// Directly override the status, bypassing the normal lifecycle
    ///
    /// Only Successful, Failed and Deleted may be set this way. One request
    /// is issued for the visible task; the backend cascades to the connected
    /// task where documented, and the notice says so.
    pub async fn set_status(&mut self, target: StatusCode) -> ClientResult<Notice> {
        if !matches!(
            target,
            StatusCode::Successful | StatusCode::Failed | StatusCode::Deleted
        ) {
            return Err(ClientError::Validation(format!(
                "Status {} cannot be set directly",
                target.label()
            )));
        }

        let request = UpdateStatusRequest { status: target };
        let message = self.api.update_status(&self.record.task_id, &request).await?;
        self.record.status = Some(target);
        // Deleting via status override clears the selection like `delete`
        if target == StatusCode::Deleted {
            self.selected = false;
        }

        let mut notice = Notice::from_backend(
            message,
            &format!("Status set to {}", target.label()),
        );
        if let Some(connected) = &self.record.connected_task_id {
            notice.message = format!(
                "{} (also applies to connected task {})",
                notice.message, connected
            );
        }
        Ok(notice)
    }

    /// Delete the task and clear the local selection
    ///
    /// Guarded by the delete-eligibility table unless `force` (the explicit
    /// override used for Successful tasks).
    pub async fn delete(&mut self, force: bool) -> ClientResult<Notice> {
        if !force {
            let eligible = self.record.status.is_some_and(deletable);
            if !eligible {
                return Err(ClientError::Validation(
                    "This order cannot be deleted in its current status".to_string(),
                ));
            }
        }

        let message = self.api.delete_task(&self.record.task_id).await?;
        self.selected = false;

        let mut notice = Notice::from_backend(message, "Order deleted");
        if let Some(connected) = &self.record.connected_task_id {
            notice.message = format!(
                "{} (paired delivery task {} is removed as well)",
                notice.message, connected
            );
        }
        Ok(notice)
    }
}

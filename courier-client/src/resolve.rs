//! Connected-task resolver
//!
//! A task whose pickup and delivery addresses are equal is only the pickup
//! leg of a split order; the paired delivery task is looked up so cross-leg
//! actions stay consistent. Resolution is advisory: it augments what is
//! displayed and which secondary actions are offered, but a failed lookup
//! never blocks the primary operation.

use shared::models::{OrderRecord, TaskRole};

use crate::api::OrdersApi;

/// Outcome of connected-task resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub role: TaskRole,
    /// The paired task's delivery address, for display substitution
    pub display_address: Option<String>,
}

impl Resolution {
    fn standalone() -> Self {
        Self {
            role: TaskRole::Standalone,
            display_address: None,
        }
    }
}

/// Resolve the task role for `record`
///
/// Tasks with distinct addresses are standalone and no lookup is issued.
/// For pickup-only tasks the related-task endpoint is queried; a negative
/// or failed lookup leaves the task standalone.
pub async fn resolve_role(api: &dyn OrdersApi, record: &OrderRecord) -> Resolution {
    if !record.is_pickup_only() {
        return Resolution::standalone();
    }

    match api.related_task(&record.task_id).await {
        Ok(response) if response.is_success() && response.has_related_task => {
            match response.delivery_job_id {
                Some(connected_task_id) => Resolution {
                    role: TaskRole::PickupLeg { connected_task_id },
                    display_address: response.delivery_address,
                },
                None => Resolution::standalone(),
            }
        }
        Ok(_) => Resolution::standalone(),
        Err(err) => {
            tracing::warn!(
                task_id = %record.task_id,
                error = %err,
                "related-task lookup failed; treating task as standalone"
            );
            Resolution::standalone()
        }
    }
}

//! Typed endpoint wrappers for the delivery-management API
//!
//! Split into one trait per console surface so workflows and tests depend
//! only on the endpoints they use. [`HttpCourierApi`] implements all of them
//! over [`HttpTransport`].

use async_trait::async_trait;

use shared::ApiEnvelope;
use shared::client::{
    AssignPlanRequest, CreatePlanRequest, CreateReorderRequest, CreateReturnRequest,
    CreateTokenRequest, OrderListData, OrderListRequest, RelatedTaskResponse, UpdateOrderRequest,
    UpdateStatusRequest,
};
use shared::models::{ApiToken, CreatedToken, Customer, Driver, FeePlan, Merchant, RawOrder};

use crate::transport::HttpTransport;
use crate::{ClientError, ClientResult};

/// Order search, listing and mutation endpoints
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// Fetch one order by task identifier
    async fn search_order(&self, task_id: &str) -> ClientResult<RawOrder>;

    /// Fetch one page of orders for a date range
    async fn list_orders(&self, request: &OrderListRequest) -> ClientResult<OrderListData>;

    /// Look up the paired delivery task for a pickup-only task
    async fn related_task(&self, task_id: &str) -> ClientResult<RelatedTaskResponse>;

    /// Save edited fields; returns the backend message when present
    async fn update_order(
        &self,
        task_id: &str,
        request: &UpdateOrderRequest,
    ) -> ClientResult<Option<String>>;

    /// Create a new task copied from an existing order
    async fn create_reorder(&self, request: &CreateReorderRequest)
    -> ClientResult<Option<String>>;

    /// Create a return task with swapped addresses
    async fn create_return(&self, request: &CreateReturnRequest) -> ClientResult<Option<String>>;

    /// Directly override the task status
    async fn update_status(
        &self,
        task_id: &str,
        request: &UpdateStatusRequest,
    ) -> ClientResult<Option<String>>;

    /// Delete a task; the backend cascades to the connected task where
    /// documented
    async fn delete_task(&self, task_id: &str) -> ClientResult<Option<String>>;
}

/// Customer/driver/merchant search endpoints
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search_customers(&self, query: &str) -> ClientResult<Vec<Customer>>;
    async fn search_drivers(&self, query: &str) -> ClientResult<Vec<Driver>>;
    async fn search_merchants(&self, query: &str) -> ClientResult<Vec<Merchant>>;
}

/// API token administration
#[async_trait]
pub trait TokensApi: Send + Sync {
    async fn list_tokens(&self) -> ClientResult<Vec<ApiToken>>;

    /// Create a token; the response carries the one-time plaintext value
    async fn create_token(&self, request: &CreateTokenRequest) -> ClientResult<CreatedToken>;

    async fn revoke_token(&self, token_id: &str) -> ClientResult<Option<String>>;
}

/// Merchant fee-plan administration
#[async_trait]
pub trait PlansApi: Send + Sync {
    async fn list_plans(&self) -> ClientResult<Vec<FeePlan>>;
    async fn create_plan(&self, request: &CreatePlanRequest) -> ClientResult<FeePlan>;
    async fn assign_plan(&self, request: &AssignPlanRequest) -> ClientResult<Option<String>>;
}

/// HTTP implementation of every console API surface
#[derive(Debug, Clone)]
pub struct HttpCourierApi {
    transport: HttpTransport,
}

impl HttpCourierApi {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }
}

/// Unwrap an envelope that must carry data
fn require_data<T>(envelope: ApiEnvelope<T>) -> ClientResult<T> {
    if !envelope.is_success() {
        return Err(ClientError::Api {
            message: envelope.message_or_default(),
        });
    }
    envelope
        .data
        .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
}

/// Unwrap a mutation envelope; only the message survives
fn require_success(envelope: ApiEnvelope<serde_json::Value>) -> ClientResult<Option<String>> {
    if !envelope.is_success() {
        return Err(ClientError::Api {
            message: envelope.message_or_default(),
        });
    }
    Ok(envelope.message)
}

#[async_trait]
impl OrdersApi for HttpCourierApi {
    async fn search_order(&self, task_id: &str) -> ClientResult<RawOrder> {
        let envelope: ApiEnvelope<RawOrder> = self
            .transport
            .get(&format!("/api/search/order/{}", task_id))
            .await?;
        require_data(envelope)
    }

    async fn list_orders(&self, request: &OrderListRequest) -> ClientResult<OrderListData> {
        let envelope: ApiEnvelope<OrderListData> =
            self.transport.post("/api/orders/list", request).await?;
        require_data(envelope)
    }

    async fn related_task(&self, task_id: &str) -> ClientResult<RelatedTaskResponse> {
        // Flat response, not enveloped
        self.transport
            .get(&format!("/api/orders/{}/related", task_id))
            .await
    }

    async fn update_order(
        &self,
        task_id: &str,
        request: &UpdateOrderRequest,
    ) -> ClientResult<Option<String>> {
        let envelope = self
            .transport
            .put(&format!("/api/orders/{}", task_id), request)
            .await?;
        require_success(envelope)
    }

    async fn create_reorder(
        &self,
        request: &CreateReorderRequest,
    ) -> ClientResult<Option<String>> {
        let envelope = self.transport.post("/api/orders/reorder", request).await?;
        require_success(envelope)
    }

    async fn create_return(&self, request: &CreateReturnRequest) -> ClientResult<Option<String>> {
        let envelope = self.transport.post("/api/orders/return", request).await?;
        require_success(envelope)
    }

    async fn update_status(
        &self,
        task_id: &str,
        request: &UpdateStatusRequest,
    ) -> ClientResult<Option<String>> {
        let envelope = self
            .transport
            .put(&format!("/api/orders/{}/status", task_id), request)
            .await?;
        require_success(envelope)
    }

    async fn delete_task(&self, task_id: &str) -> ClientResult<Option<String>> {
        let envelope = self
            .transport
            .delete(&format!("/api/orders/{}", task_id))
            .await?;
        require_success(envelope)
    }
}

#[async_trait]
impl SearchApi for HttpCourierApi {
    async fn search_customers(&self, query: &str) -> ClientResult<Vec<Customer>> {
        let envelope: ApiEnvelope<Vec<Customer>> = self
            .transport
            .get_query("/api/search/customers", &[("q", query)])
            .await?;
        require_data(envelope)
    }

    async fn search_drivers(&self, query: &str) -> ClientResult<Vec<Driver>> {
        let envelope: ApiEnvelope<Vec<Driver>> = self
            .transport
            .get_query("/api/search/drivers", &[("q", query)])
            .await?;
        require_data(envelope)
    }

    async fn search_merchants(&self, query: &str) -> ClientResult<Vec<Merchant>> {
        let envelope: ApiEnvelope<Vec<Merchant>> = self
            .transport
            .get_query("/api/search/merchants", &[("q", query)])
            .await?;
        require_data(envelope)
    }
}

#[async_trait]
impl TokensApi for HttpCourierApi {
    async fn list_tokens(&self) -> ClientResult<Vec<ApiToken>> {
        let envelope: ApiEnvelope<Vec<ApiToken>> = self.transport.get("/api/tokens").await?;
        require_data(envelope)
    }

    async fn create_token(&self, request: &CreateTokenRequest) -> ClientResult<CreatedToken> {
        let envelope: ApiEnvelope<CreatedToken> =
            self.transport.post("/api/tokens", request).await?;
        require_data(envelope)
    }

    async fn revoke_token(&self, token_id: &str) -> ClientResult<Option<String>> {
        let envelope = self
            .transport
            .delete(&format!("/api/tokens/{}", token_id))
            .await?;
        require_success(envelope)
    }
}

#[async_trait]
impl PlansApi for HttpCourierApi {
    async fn list_plans(&self) -> ClientResult<Vec<FeePlan>> {
        let envelope: ApiEnvelope<Vec<FeePlan>> = self.transport.get("/api/plans").await?;
        require_data(envelope)
    }

    async fn create_plan(&self, request: &CreatePlanRequest) -> ClientResult<FeePlan> {
        let envelope: ApiEnvelope<FeePlan> = self.transport.post("/api/plans", request).await?;
        require_data(envelope)
    }

    async fn assign_plan(&self, request: &AssignPlanRequest) -> ClientResult<Option<String>> {
        let envelope = self.transport.post("/api/plans/assign", request).await?;
        require_success(envelope)
    }
}

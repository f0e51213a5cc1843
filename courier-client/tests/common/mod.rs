//! Scripted in-process mock of the orders API surface

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use courier_client::{ClientError, ClientResult, OrdersApi};
use shared::client::{
    CreateReorderRequest, CreateReturnRequest, OrderListData, OrderListRequest,
    RelatedTaskResponse, UpdateOrderRequest, UpdateStatusRequest,
};
use shared::models::RawOrder;

/// Mock orders API: responses are scripted up front, every call is recorded
#[derive(Default)]
#[allow(dead_code)]
pub struct MockOrders {
    pub order: Mutex<Option<RawOrder>>,
    /// Listing responses, consumed front to back
    pub pages: Mutex<Vec<ClientResult<OrderListData>>>,
    pub list_requests: Mutex<Vec<OrderListRequest>>,
    pub related: Mutex<Option<ClientResult<RelatedTaskResponse>>>,
    pub related_calls: Mutex<u32>,
    pub updates: Mutex<Vec<UpdateOrderRequest>>,
    pub reorders: Mutex<Vec<CreateReorderRequest>>,
    pub returns: Mutex<Vec<CreateReturnRequest>>,
    pub status_updates: Mutex<Vec<(String, UpdateStatusRequest)>>,
    pub deletes: Mutex<Vec<String>>,
    pub fail_update: bool,
}

#[async_trait]
impl OrdersApi for MockOrders {
    async fn search_order(&self, _task_id: &str) -> ClientResult<RawOrder> {
        self.order
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ClientError::NotFound("no order scripted".to_string()))
    }

    async fn list_orders(&self, request: &OrderListRequest) -> ClientResult<OrderListData> {
        self.list_requests.lock().unwrap().push(request.clone());
        let mut pages = self.pages.lock().unwrap();
        if pages.is_empty() {
            return Err(ClientError::Internal("no more pages scripted".to_string()));
        }
        pages.remove(0)
    }

    async fn related_task(&self, _task_id: &str) -> ClientResult<RelatedTaskResponse> {
        *self.related_calls.lock().unwrap() += 1;
        self.related
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(ClientError::Internal("no lookup scripted".to_string())))
    }

    async fn update_order(
        &self,
        _task_id: &str,
        request: &UpdateOrderRequest,
    ) -> ClientResult<Option<String>> {
        if self.fail_update {
            return Err(ClientError::Api {
                message: "update rejected".to_string(),
            });
        }
        self.updates.lock().unwrap().push(request.clone());
        Ok(Some("Order saved".to_string()))
    }

    async fn create_reorder(
        &self,
        request: &CreateReorderRequest,
    ) -> ClientResult<Option<String>> {
        self.reorders.lock().unwrap().push(request.clone());
        Ok(None)
    }

    async fn create_return(&self, request: &CreateReturnRequest) -> ClientResult<Option<String>> {
        self.returns.lock().unwrap().push(request.clone());
        Ok(None)
    }

    async fn update_status(
        &self,
        task_id: &str,
        request: &UpdateStatusRequest,
    ) -> ClientResult<Option<String>> {
        self.status_updates
            .lock()
            .unwrap()
            .push((task_id.to_string(), request.clone()));
        Ok(None)
    }

    async fn delete_task(&self, task_id: &str) -> ClientResult<Option<String>> {
        self.deletes.lock().unwrap().push(task_id.to_string());
        Ok(None)
    }
}

/// A raw order with the given identifier and addresses, Assigned status
#[allow(dead_code)]
pub fn raw_order(task_id: &str, pickup: &str, delivery: &str) -> RawOrder {
    RawOrder {
        task_id: Some(task_id.to_string()),
        pickup_address: Some(pickup.to_string()),
        delivery_address: Some(delivery.to_string()),
        status: Some(json!(0)),
        ..Default::default()
    }
}

/// A listing page of sequentially numbered orders starting at `first`
#[allow(dead_code)]
pub fn page_of(first: u32, count: u32, total: Option<u64>) -> ClientResult<OrderListData> {
    let orders = (first..first + count)
        .map(|n| raw_order(&format!("t-{}", n), "Warehouse", "Elsewhere"))
        .collect();
    Ok(OrderListData { orders, total })
}

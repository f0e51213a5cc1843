//! Raw order payload and field normalization
//!
//! The backend emits two naming conventions for the same logical field: the
//! legacy snake_case names and the camelCase names produced by its transform
//! layer. Some payloads carry one, some the other, some both. Normalization
//! resolves each field in a fixed order — legacy name, then transformed name,
//! then a type-appropriate default — and is total: it never errors, whatever
//! shape the payload takes.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::order::{OrderRecord, StatusCode};

/// Order record as delivered by the backend, both naming conventions kept
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOrder {
    pub task_id: Option<String>,
    #[serde(rename = "taskId")]
    pub task_id_alt: Option<String>,

    pub completed_at: Option<String>,
    #[serde(rename = "completedAt")]
    pub completed_at_alt: Option<String>,

    pub driver_id: Option<String>,
    #[serde(rename = "driverId")]
    pub driver_id_alt: Option<String>,

    pub driver_name: Option<String>,
    #[serde(rename = "driverName")]
    pub driver_name_alt: Option<String>,

    pub driver_phone: Option<String>,
    #[serde(rename = "driverPhone")]
    pub driver_phone_alt: Option<String>,

    pub customer_name: Option<String>,
    #[serde(rename = "customerName")]
    pub customer_name_alt: Option<String>,

    pub customer_phone: Option<String>,
    #[serde(rename = "customerPhone")]
    pub customer_phone_alt: Option<String>,

    pub pickup_address: Option<String>,
    #[serde(rename = "pickupAddress")]
    pub pickup_address_alt: Option<String>,

    pub delivery_address: Option<String>,
    #[serde(rename = "deliveryAddress")]
    pub delivery_address_alt: Option<String>,

    /// Kept as raw JSON: non-numeric values collapse to zero, not an error
    pub cod_amount: Option<Value>,
    #[serde(rename = "codAmount")]
    pub cod_amount_alt: Option<Value>,

    pub order_fees: Option<Value>,
    #[serde(rename = "orderFees")]
    pub order_fees_alt: Option<Value>,

    /// May be null/absent ("unknown") or a non-numeric stray value
    pub status: Option<Value>,

    /// Free-text label(s): a string or an array of strings
    pub tags: Option<Value>,

    pub notes: Option<String>,
}

impl RawOrder {
    /// Produce exactly one canonical record; pure and total
    pub fn normalize(self) -> OrderRecord {
        OrderRecord {
            task_id: self.task_id.or(self.task_id_alt).unwrap_or_default(),
            completed_at: self.completed_at.or(self.completed_at_alt),
            driver_id: self.driver_id.or(self.driver_id_alt),
            driver_name: self.driver_name.or(self.driver_name_alt),
            driver_phone: self.driver_phone.or(self.driver_phone_alt),
            customer_name: self.customer_name.or(self.customer_name_alt),
            customer_phone: self.customer_phone.or(self.customer_phone_alt),
            pickup_address: self
                .pickup_address
                .or(self.pickup_address_alt)
                .unwrap_or_default(),
            delivery_address: self
                .delivery_address
                .or(self.delivery_address_alt)
                .unwrap_or_default(),
            cod_amount: currency(self.cod_amount.or(self.cod_amount_alt)),
            order_fees: currency(self.order_fees.or(self.order_fees_alt)),
            status: status(self.status),
            tags: tags(self.tags),
            notes: self.notes,
            connected_task_id: None,
        }
    }
}

/// Currency coercion: JSON numbers pass, everything else defaults to zero
fn currency(value: Option<Value>) -> Decimal {
    value
        .as_ref()
        .and_then(Value::as_f64)
        .and_then(Decimal::from_f64)
        .unwrap_or(Decimal::ZERO)
}

fn status(value: Option<Value>) -> Option<StatusCode> {
    value
        .as_ref()
        .and_then(Value::as_i64)
        .map(|code| StatusCode::from(code as i32))
}

fn tags(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Array(items)) => {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if joined.is_empty() { None } else { Some(joined) }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::format_amount;
    use serde_json::json;

    #[test]
    fn missing_currency_fields_default_to_zero() {
        let record = RawOrder::default().normalize();
        assert_eq!(format_amount(record.cod_amount), "0.00");
        assert_eq!(format_amount(record.order_fees), "0.00");
        assert_eq!(record.task_id, "");
        assert_eq!(record.status, None);
    }

    #[test]
    fn non_numeric_currency_defaults_to_zero() {
        let raw: RawOrder = serde_json::from_value(json!({
            "taskId": "t-9",
            "cod_amount": "12.50",
            "orderFees": null,
        }))
        .unwrap();
        let record = raw.normalize();
        assert_eq!(format_amount(record.cod_amount), "0.00");
        assert_eq!(format_amount(record.order_fees), "0.00");
    }

    #[test]
    fn legacy_name_wins_over_transformed_name() {
        let raw: RawOrder = serde_json::from_value(json!({
            "cod_amount": 10.5,
            "codAmount": 99.0,
            "driver_name": "Imran",
            "driverName": "Other",
        }))
        .unwrap();
        let record = raw.normalize();
        assert_eq!(format_amount(record.cod_amount), "10.50");
        assert_eq!(record.driver_name.as_deref(), Some("Imran"));
    }

    #[test]
    fn transformed_name_used_when_legacy_absent() {
        let raw: RawOrder = serde_json::from_value(json!({
            "taskId": "t-1",
            "codAmount": 7.0,
            "pickupAddress": "A",
            "deliveryAddress": "B",
        }))
        .unwrap();
        let record = raw.normalize();
        assert_eq!(record.task_id, "t-1");
        assert_eq!(format_amount(record.cod_amount), "7.00");
        assert_eq!(record.pickup_address, "A");
    }

    #[test]
    fn stray_status_and_tags_shapes_are_tolerated() {
        let raw: RawOrder = serde_json::from_value(json!({
            "status": "not-a-number",
            "tags": ["fragile", "priority"],
        }))
        .unwrap();
        let record = raw.normalize();
        assert_eq!(record.status, None);
        assert_eq!(record.tags.as_deref(), Some("fragile, priority"));

        let raw: RawOrder = serde_json::from_value(json!({ "status": 2 })).unwrap();
        assert_eq!(raw.normalize().status, Some(StatusCode::Successful));
    }
}

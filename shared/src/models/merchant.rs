//! Merchant, customer and driver directory records

use serde::{Deserialize, Serialize};

/// Merchant account; `plan_id` references a fee plan when assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub plan_id: Option<String>,
}

/// Delivery recipient as returned by customer search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Delivery personnel as returned by driver search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
}

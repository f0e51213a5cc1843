//! Merchant fee plan model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::merchant::Merchant;

/// Fee plan owned by the backend; read-through copy only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeePlan {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub return_fee: Decimal,
}

/// Merchants whose `plan_id` references an existing plan
pub fn assigned_merchants<'a>(merchants: &'a [Merchant], plans: &[FeePlan]) -> Vec<&'a Merchant> {
    merchants
        .iter()
        .filter(|m| {
            m.plan_id
                .as_ref()
                .is_some_and(|id| plans.iter().any(|p| &p.id == id))
        })
        .collect()
}

//! Bill calculation DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use domain_split::{BillResult, DiscountPolicy};

/// A single line item as submitted by the caller
#[derive(Debug, Deserialize, Validate)]
pub struct LineItemRequest {
    #[validate(length(min = 1, message = "Item name cannot be empty"))]
    pub name: String,
    pub unit_rate: Decimal,
    pub quantity: u32,
    #[validate(length(min = 1, message = "Item must be shared by at least one participant"))]
    pub shared_by: Vec<String>,
    pub discount_percent: Option<Decimal>,
}

/// Request body for the calculate operation
#[derive(Debug, Deserialize, Validate)]
pub struct CalculateBillRequest {
    #[validate(nested)]
    pub items: Vec<LineItemRequest>,
    #[serde(default)]
    pub tax_percent: Decimal,
    #[serde(default)]
    pub discount_percent: Decimal,
    /// Overrides the server's configured policy when present
    pub discount_policy: Option<DiscountPolicy>,
}

/// The full bill breakdown returned to the caller
///
/// Amounts are raw decimals; currency formatting is the caller's concern.
#[derive(Debug, Serialize)]
pub struct CalculateBillResponse {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub final_total: Decimal,
    pub shares: BTreeMap<String, Decimal>,
}

impl From<BillResult> for CalculateBillResponse {
    fn from(result: BillResult) -> Self {
        Self {
            subtotal: result.subtotal.amount(),
            tax_amount: result.tax_amount.amount(),
            discount_amount: result.discount_amount.amount(),
            final_total: result.final_total.amount(),
            shares: result
                .shares
                .into_iter()
                .map(|(participant, share)| (participant.into_inner(), share.amount()))
                .collect(),
        }
    }
}

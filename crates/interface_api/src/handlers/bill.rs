//! Bill calculation handler

use axum::{extract::State, Json};
use validator::Validate;

use core_kernel::Money;
use domain_split::{Ledger, LineItem, Participant};

use crate::dto::bill::{CalculateBillRequest, CalculateBillResponse};
use crate::{error::ApiError, AppState};

/// Calculates a bill breakdown with per-participant shares
///
/// Builds a fresh ledger from the request body, so concurrent requests
/// never share state. Validation failures surface as 422 responses.
pub async fn calculate_bill(
    State(state): State<AppState>,
    Json(request): Json<CalculateBillRequest>,
) -> Result<Json<CalculateBillResponse>, ApiError> {
    request.validate()?;

    let policy = request
        .discount_policy
        .unwrap_or(state.config.default_discount_policy);

    let mut ledger = Ledger::new(policy);
    for item in &request.items {
        let shared_by = item.shared_by.iter().cloned().map(Participant::new).collect();
        let mut line = LineItem::new(
            item.name.clone(),
            Money::new(item.unit_rate),
            item.quantity,
            shared_by,
        )?;
        if let Some(percent) = item.discount_percent {
            line = line.with_discount(percent)?;
        }
        ledger.add_item(line);
    }
    ledger.set_tax(request.tax_percent)?;
    ledger.set_discount(request.discount_percent)?;

    let result = ledger.calculate();

    tracing::debug!(
        items = ledger.len(),
        participants = result.shares.len(),
        policy = %ledger.policy(),
        "calculated bill"
    );

    Ok(Json(result.into()))
}

//! Payment API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::billing::SettlementService;
use crate::core::ServerState;
use crate::store::PaymentRepository;
use crate::utils::AppResult;

use shared::models::{Payment, PaymentCreate};

/// GET /api/payments
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Payment>>> {
    let repo = PaymentRepository::new(state.get_store());
    Ok(Json(repo.find_all()))
}

/// GET /api/payments/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Payment>> {
    let repo = PaymentRepository::new(state.get_store());
    Ok(Json(repo.find_by_id(&id)?))
}

/// GET /api/payments/invoice/:invoice_id
///
/// All payments against an invoice, cancelled ones included, payment date
/// ascending.
pub async fn list_by_invoice(
    State(state): State<ServerState>,
    Path(invoice_id): Path<String>,
) -> AppResult<Json<Vec<Payment>>> {
    let service = SettlementService::new(state.get_store());
    Ok(Json(service.list_for_invoice(&invoice_id)?))
}

/// POST /api/payments
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<Json<Payment>> {
    let service = SettlementService::new(state.get_store());
    Ok(Json(service.record_payment(payload)?))
}

/// PUT /api/payments/:id/cancel
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Payment>> {
    let service = SettlementService::new(state.get_store());
    Ok(Json(service.cancel_payment(&id)?))
}

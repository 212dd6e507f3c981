//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::billing::InvoiceService;
use crate::core::ServerState;
use crate::store::InvoiceRepository;
use crate::utils::AppResult;

use shared::models::{Invoice, InvoiceCreate, InvoiceStatusUpdate};

/// GET /api/invoices
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Invoice>>> {
    let repo = InvoiceRepository::new(state.get_store());
    Ok(Json(repo.find_all()))
}

/// GET /api/invoices/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Invoice>> {
    let repo = InvoiceRepository::new(state.get_store());
    Ok(Json(repo.find_by_id(&id)?))
}

/// POST /api/invoices
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InvoiceCreate>,
) -> AppResult<Json<Invoice>> {
    let service = InvoiceService::new(state.get_store());
    Ok(Json(service.create(payload)?))
}

/// PUT /api/invoices/:id/status
///
/// Restricted to cancelling a pending invoice; `paid` is reached only
/// through payment settlement.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InvoiceStatusUpdate>,
) -> AppResult<Json<Invoice>> {
    let service = InvoiceService::new(state.get_store());
    Ok(Json(service.update_status(&id, payload.payment_status)?))
}

//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::orders;
use crate::orders::lifecycle;
use crate::store::OrderRepository;
use crate::utils::{AppError, AppResult, ErrorCode};

use shared::models::{Order, OrderCreate, OrderStatus, OrderStatusUpdate};

/// Query parameters for order listing
#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    /// Exact status match; omit for all orders
    pub status: Option<OrderStatus>,
}

/// GET /api/orders?status=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.get_store());
    let orders = repo.find_all();
    Ok(Json(lifecycle::filter_by_status(&orders, query.status)))
}

/// GET /api/orders/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_store());
    Ok(Json(repo.find_by_id(&id)?))
}

/// POST /api/orders
///
/// Accepts `{tableId, items: [{productId, quantity, notes}]}`.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    Ok(Json(orders::create_order(&state.get_store(), payload)?))
}

/// PUT /api/orders/:id/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    Ok(Json(orders::update_status(
        &state.get_store(),
        &id,
        payload.status,
    )?))
}

/// GET /api/orders/table/:table_id/active
///
/// The newest pending or preparing order for a table.
pub async fn active_by_table(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_store());
    repo.find_active_by_table(&table_id)
        .map(Json)
        .ok_or_else(|| {
            AppError::new(ErrorCode::OrderNotFound).with_detail("tableId", table_id.clone())
        })
}

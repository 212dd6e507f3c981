//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::store::CategoryRepository;
use crate::utils::AppResult;

use shared::models::{Category, CategoryCreate, CategoryUpdate};

/// GET /api/product-categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.get_store());
    Ok(Json(repo.find_all()))
}

/// POST /api/product-categories
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::new(state.get_store());
    Ok(Json(repo.create(payload)?))
}

/// PUT /api/product-categories/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::new(state.get_store());
    Ok(Json(repo.update(&id, payload)?))
}

/// DELETE /api/product-categories/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CategoryRepository::new(state.get_store());
    Ok(Json(repo.delete(&id)?))
}

//! Order repository

use std::sync::Arc;

use shared::models::Order;

use crate::utils::{AppError, AppResult, ErrorCode};

use super::MemStore;

/// Repository for orders
#[derive(Clone)]
pub struct OrderRepository {
    store: Arc<MemStore>,
}

impl OrderRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    pub fn insert(&self, order: Order) {
        self.store.orders.insert(order.id.clone(), order);
    }

    /// All orders, newest first
    pub fn find_all(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .store
            .orders
            .iter()
            .map(|entry| entry.clone())
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Order> {
        self.store
            .orders
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("id", id))
    }

    /// The newest active (pending or preparing) order for a table, if any
    pub fn find_active_by_table(&self, table_id: &str) -> Option<Order> {
        self.store
            .orders
            .iter()
            .filter(|entry| entry.table == table_id && entry.status.is_active())
            .map(|entry| entry.clone())
            .max_by_key(|order| order.created_at)
    }

    /// Run a mutation under the order's entry lock
    ///
    /// The closure either fully applies or, by returning an error, leaves the
    /// entry untouched (callers must not partially mutate before erroring).
    pub fn with_mut<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Order) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut entry = self
            .store
            .orders
            .get_mut(id)
            .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("id", id))?;
        f(&mut entry)
    }
}

//! Dining table repository

use std::sync::Arc;

use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate, TableStatus};

use crate::utils::{AppError, AppResult, ErrorCode};

use super::{MemStore, new_id};

/// Repository for dining tables
#[derive(Clone)]
pub struct DiningTableRepository {
    store: Arc<MemStore>,
}

impl DiningTableRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// All tables, ordered by name
    pub fn find_all(&self) -> Vec<DiningTable> {
        let mut tables: Vec<DiningTable> = self
            .store
            .tables
            .iter()
            .map(|entry| entry.clone())
            .collect();
        tables.sort_by(|a, b| a.name.cmp(&b.name));
        tables
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<DiningTable> {
        self.store
            .tables
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| AppError::new(ErrorCode::TableNotFound).with_detail("id", id))
    }

    pub fn create(&self, payload: DiningTableCreate) -> AppResult<DiningTable> {
        if payload.name.trim().is_empty() {
            return Err(AppError::validation("Table name must not be empty"));
        }

        let table = DiningTable {
            id: new_id(),
            name: payload.name,
            capacity: payload.capacity.unwrap_or(4),
            status: payload.status.unwrap_or_default(),
        };
        self.store.tables.insert(table.id.clone(), table.clone());
        Ok(table)
    }

    pub fn update(&self, id: &str, payload: DiningTableUpdate) -> AppResult<DiningTable> {
        let mut entry = self
            .store
            .tables
            .get_mut(id)
            .ok_or_else(|| AppError::new(ErrorCode::TableNotFound).with_detail("id", id))?;

        if let Some(name) = payload.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Table name must not be empty"));
            }
            entry.name = name;
        }
        if let Some(capacity) = payload.capacity {
            entry.capacity = capacity;
        }
        if let Some(status) = payload.status {
            entry.status = status;
        }

        Ok(entry.clone())
    }

    /// Operator-driven status change, independent of order existence
    pub fn set_status(&self, id: &str, status: TableStatus) -> AppResult<DiningTable> {
        let mut entry = self
            .store
            .tables
            .get_mut(id)
            .ok_or_else(|| AppError::new(ErrorCode::TableNotFound).with_detail("id", id))?;
        entry.status = status;
        Ok(entry.clone())
    }

    pub fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.store.tables.remove(id).is_some())
    }
}

//! Category repository

use std::sync::Arc;

use shared::models::{Category, CategoryCreate, CategoryUpdate};

use crate::utils::{AppError, AppResult, ErrorCode};

use super::{MemStore, new_id};

/// Repository for product categories
#[derive(Clone)]
pub struct CategoryRepository {
    store: Arc<MemStore>,
}

impl CategoryRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// All categories, ordered by name
    pub fn find_all(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self
            .store
            .categories
            .iter()
            .map(|entry| entry.clone())
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        categories
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Category> {
        self.store
            .categories
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id))
    }

    pub fn create(&self, payload: CategoryCreate) -> AppResult<Category> {
        if payload.name.trim().is_empty() {
            return Err(AppError::validation("Category name must not be empty"));
        }

        let category = Category {
            id: new_id(),
            name: payload.name,
            description: payload.description,
        };
        self.store
            .categories
            .insert(category.id.clone(), category.clone());
        Ok(category)
    }

    pub fn update(&self, id: &str, payload: CategoryUpdate) -> AppResult<Category> {
        let mut entry = self
            .store
            .categories
            .get_mut(id)
            .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id))?;

        if let Some(name) = payload.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Category name must not be empty"));
            }
            entry.name = name;
        }
        if let Some(description) = payload.description {
            entry.description = Some(description);
        }

        Ok(entry.clone())
    }

    /// Delete a category
    ///
    /// Products referencing it are left as-is: an orphaned reference degrades
    /// to "uncategorized" at display time.
    pub fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.store.categories.remove(id).is_some())
    }
}

//! Product repository

use std::sync::Arc;

use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::utils::{AppError, AppResult, ErrorCode};

use super::{MemStore, new_id};

/// Repository for catalog products
#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<MemStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// All products, ordered by name
    pub fn find_all(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .store
            .products
            .iter()
            .map(|entry| entry.clone())
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Product> {
        self.store
            .products
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))
    }

    /// Products assigned to a category, ordered by name
    pub fn find_by_category(&self, category_id: &str) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .store
            .products
            .iter()
            .filter(|entry| entry.category.as_deref() == Some(category_id))
            .map(|entry| entry.clone())
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }

    pub fn create(&self, payload: ProductCreate) -> AppResult<Product> {
        if payload.name.trim().is_empty() {
            return Err(AppError::validation("Product name must not be empty"));
        }
        validate_price(payload.price)?;

        let product = Product {
            id: new_id(),
            name: payload.name,
            description: payload.description,
            price: shared::money::round_currency(payload.price),
            category: payload.category,
            stock: payload.stock.unwrap_or(0),
            is_available: payload.is_available.unwrap_or(true),
        };
        self.store
            .products
            .insert(product.id.clone(), product.clone());
        Ok(product)
    }

    pub fn update(&self, id: &str, payload: ProductUpdate) -> AppResult<Product> {
        if let Some(price) = payload.price {
            validate_price(price)?;
        }

        let mut entry = self
            .store
            .products
            .get_mut(id)
            .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))?;

        if let Some(name) = payload.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Product name must not be empty"));
            }
            entry.name = name;
        }
        if let Some(description) = payload.description {
            entry.description = Some(description);
        }
        if let Some(price) = payload.price {
            entry.price = shared::money::round_currency(price);
        }
        if let Some(category) = payload.category {
            entry.category = Some(category);
        }
        if let Some(stock) = payload.stock {
            entry.stock = stock;
        }
        if let Some(is_available) = payload.is_available {
            entry.is_available = is_available;
        }

        Ok(entry.clone())
    }
}

fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() {
        return Err(AppError::validation(format!(
            "price must be a finite number, got {}",
            price
        )));
    }
    if price < 0.0 {
        return Err(AppError::validation(format!(
            "price must be non-negative, got {}",
            price
        )));
    }
    Ok(())
}

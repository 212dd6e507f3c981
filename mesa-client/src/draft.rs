//! Order draft builder
//!
//! Accumulates line items for one in-progress order-creation session (one
//! table, one sitting) before submission. Each line snapshots the product's
//! current price; the running total uses the same currency arithmetic as the
//! server. Draft state lives only in memory and is lost on navigation away.

use shared::models::{OrderCreate, OrderItemCreate, Product};
use shared::money;
use thiserror::Error;

/// Draft validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Product is not available: {0}")]
    ProductUnavailable(String),

    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(i32),

    #[error("Item index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Draft has no items")]
    Empty,
}

/// A draft line item
#[derive(Debug, Clone, PartialEq)]
pub struct DraftItem {
    pub product_id: String,
    pub product_name: String,
    /// Price snapshot taken when the item was added
    pub unit_price: f64,
    pub quantity: i32,
    pub notes: Option<String>,
}

/// Client-local, unsaved accumulation of line items prior to submission
#[derive(Debug, Clone)]
pub struct OrderDraft {
    table_id: String,
    items: Vec<DraftItem>,
}

impl OrderDraft {
    /// Start an empty draft for a table
    pub fn new(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            items: Vec::new(),
        }
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn items(&self) -> &[DraftItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Append a line item
    ///
    /// The product must resolve against the given catalog and be available;
    /// its current price is snapshotted into the line.
    pub fn add_item(
        &mut self,
        catalog: &[Product],
        product_id: &str,
        quantity: i32,
        notes: Option<String>,
    ) -> Result<(), DraftError> {
        if quantity < 1 {
            return Err(DraftError::InvalidQuantity(quantity));
        }

        let product = catalog
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| DraftError::UnknownProduct(product_id.to_string()))?;

        if !product.is_available {
            return Err(DraftError::ProductUnavailable(product_id.to_string()));
        }

        self.items.push(DraftItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            unit_price: product.price,
            quantity,
            notes,
        });

        Ok(())
    }

    /// Remove a line item by position
    pub fn remove_item(&mut self, index: usize) -> Result<DraftItem, DraftError> {
        if index >= self.items.len() {
            return Err(DraftError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Running total: sum of unit price times quantity, 2 decimal places
    pub fn total(&self) -> f64 {
        money::sum(
            self.items
                .iter()
                .map(|item| money::line_total(item.unit_price, item.quantity)),
        )
    }

    /// Build the order-creation request payload
    ///
    /// Fails on an empty draft; the draft itself is not consumed, so a
    /// failed submission preserves every entered line.
    pub fn to_request(&self) -> Result<OrderCreate, DraftError> {
        if self.items.is_empty() {
            return Err(DraftError::Empty);
        }

        Ok(OrderCreate {
            table_id: self.table_id.clone(),
            items: self
                .items
                .iter()
                .map(|item| OrderItemCreate {
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                    notes: item.notes.clone(),
                })
                .collect(),
        })
    }

    /// Drop all entered lines (called after a successful submission)
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

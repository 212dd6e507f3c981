//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// The category reference is optional: a product whose category has been
/// deleted degrades to "uncategorized" for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Unit price in currency unit (non-negative)
    pub price: f64,
    /// Category reference (String ID)
    pub category: Option<String>,
    pub stock: i32,
    pub is_available: bool,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub stock: Option<i32>,
    pub is_available: Option<bool>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<i32>,
    pub is_available: Option<bool>,
}

//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status
///
/// `Completed` and `Cancelled` are terminal; an order is "active" for its
/// table while `Pending` or `Preparing`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Wire-format string for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the order still counts as active for its table
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Preparing)
    }

    /// Whether this status can never change again
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// Order line item
///
/// Name and unit price are snapshots taken at order time; later catalog
/// price changes never affect an existing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product reference (String ID)
    pub product: String,
    pub product_name: String,
    /// Unit price in currency unit, captured at order time
    pub unit_price: f64,
    pub quantity: i32,
    pub notes: Option<String>,
    /// unit_price * quantity, rounded to 2 decimal places
    pub line_total: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Table reference (String ID)
    pub table: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    /// Sum of line totals, fixed at creation
    pub total_amount: f64,
    /// Set once an invoice has been generated from this order
    pub invoiced: bool,
    pub created_at: DateTime<Utc>,
}

/// Create order line item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemCreate {
    pub product_id: String,
    pub quantity: i32,
    pub notes: Option<String>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub table_id: String,
    pub items: Vec<OrderItemCreate>,
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

//! Payment Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    BankTransfer,
    MobilePayment,
}

/// Payment entity
///
/// A cancelled payment stays on record but is excluded from the invoice's
/// cumulative paid amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    /// Invoice reference (String ID)
    pub invoice: String,
    /// Amount in currency unit (positive)
    pub amount: f64,
    pub method: PaymentMethod,
    pub payment_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub cancelled: bool,
}

/// Create payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreate {
    pub invoice_id: String,
    pub amount: f64,
    pub method: PaymentMethod,
    pub notes: Option<String>,
}

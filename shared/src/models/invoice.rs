//! Invoice Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Invoice payment status
///
/// There is no distinct "partially paid" state: an invoice with payments
/// below its total stays `Pending` until settled in full.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvoicePaymentStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
}

/// Invoice entity
///
/// One-to-one with its source order; total amount is copied from the order
/// at creation and never re-derived from payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    /// Source order reference (String ID)
    pub order: String,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub notes: Option<String>,
    pub total_amount: f64,
    pub payment_status: InvoicePaymentStatus,
}

/// Create invoice payload
///
/// `invoice_date` defaults to today, `due_date` to invoice date + 7 days.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreate {
    pub order_id: String,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Update payment status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceStatusUpdate {
    pub payment_status: InvoicePaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&InvoicePaymentStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&InvoicePaymentStatus::Paid).unwrap(),
            "\"paid\""
        );

        let status: InvoicePaymentStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, InvoicePaymentStatus::Cancelled);
    }

    #[test]
    fn test_status_update_wire_format() {
        let json = r#"{"paymentStatus":"cancelled"}"#;
        let payload: InvoiceStatusUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(payload.payment_status, InvoicePaymentStatus::Cancelled);
    }
}

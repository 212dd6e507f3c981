//! Invoice generation
//!
//! An invoice can only be generated from a completed, not-yet-invoiced order.
//! Creation copies the order total, assigns the next invoice number, and
//! marks the source order invoiced under its entry lock, so a second call
//! against the same order always fails instead of duplicating.

use std::sync::Arc;

use chrono::{Duration, Utc};
use shared::models::{Invoice, InvoiceCreate, InvoicePaymentStatus, OrderStatus};

use crate::store::{InvoiceRepository, MemStore, new_id};
use crate::utils::{AppError, AppResult, ErrorCode};

use super::DEFAULT_PAYMENT_TERM_DAYS;

/// Invoice generation service
#[derive(Clone)]
pub struct InvoiceService {
    store: Arc<MemStore>,
}

impl InvoiceService {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// Generate an invoice from a completed order
    ///
    /// Dates default to today and invoice date + 7 days. Invoices are
    /// immutable after creation except for `payment_status`, which belongs
    /// to the settlement tracker.
    pub fn create(&self, payload: InvoiceCreate) -> AppResult<Invoice> {
        let invoice_date = payload
            .invoice_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let due_date = payload
            .due_date
            .unwrap_or(invoice_date + Duration::days(DEFAULT_PAYMENT_TERM_DAYS));

        if due_date < invoice_date {
            return Err(AppError::new(ErrorCode::DueDateBeforeInvoiceDate)
                .with_detail("invoiceDate", invoice_date.to_string())
                .with_detail("dueDate", due_date.to_string()));
        }

        // Eligibility check and invoiced-flag update happen under the
        // order's entry lock; a concurrent second call sees the flag.
        let mut order = self
            .store
            .orders
            .get_mut(&payload.order_id)
            .ok_or_else(|| {
                AppError::new(ErrorCode::OrderNotFound).with_detail("id", payload.order_id.clone())
            })?;

        if order.status != OrderStatus::Completed {
            return Err(AppError::new(ErrorCode::OrderNotCompleted)
                .with_detail("status", order.status.as_str()));
        }
        if order.invoiced {
            return Err(AppError::new(ErrorCode::OrderAlreadyInvoiced)
                .with_detail("orderId", order.id.clone()));
        }

        let invoice = Invoice {
            id: new_id(),
            order: order.id.clone(),
            invoice_number: InvoiceRepository::new(self.store.clone()).next_invoice_number(),
            invoice_date,
            due_date,
            notes: payload.notes,
            total_amount: order.total_amount,
            payment_status: InvoicePaymentStatus::Pending,
        };

        self.store
            .invoices
            .insert(invoice.id.clone(), invoice.clone());
        order.invoiced = true;

        tracing::info!(
            invoice_id = %invoice.id,
            number = %invoice.invoice_number,
            order_id = %invoice.order,
            total = invoice.total_amount,
            "Invoice generated"
        );

        Ok(invoice)
    }

    /// Explicit status change, restricted to cancelling a pending invoice
    ///
    /// `paid` is only ever reached through settlement; `pending` is the
    /// creation state and cannot be re-entered from here.
    pub fn update_status(&self, id: &str, target: InvoicePaymentStatus) -> AppResult<Invoice> {
        if target != InvoicePaymentStatus::Cancelled {
            return Err(AppError::invalid_request(
                "Invoice payment status is managed by payment settlement",
            ));
        }

        let mut invoice = self.store.invoices.get_mut(id).ok_or_else(|| {
            AppError::new(ErrorCode::InvoiceNotFound).with_detail("id", id)
        })?;

        if invoice.payment_status != InvoicePaymentStatus::Pending {
            return Err(AppError::new(ErrorCode::InvoiceNotPending)
                .with_detail("status", status_str(invoice.payment_status)));
        }

        invoice.payment_status = InvoicePaymentStatus::Cancelled;
        tracing::info!(invoice_id = %id, "Invoice cancelled");
        Ok(invoice.clone())
    }
}

pub(crate) fn status_str(status: InvoicePaymentStatus) -> &'static str {
    match status {
        InvoicePaymentStatus::Pending => "pending",
        InvoicePaymentStatus::Paid => "paid",
        InvoicePaymentStatus::Cancelled => "cancelled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::{DiningTableCreate, OrderCreate, OrderItemCreate, ProductCreate};

    use crate::orders;
    use crate::store::{DiningTableRepository, ProductRepository};

    fn completed_order(store: &Arc<MemStore>) -> String {
        let table = DiningTableRepository::new(store.clone())
            .create(DiningTableCreate {
                name: "T1".into(),
                capacity: None,
                status: None,
            })
            .unwrap();
        let product = ProductRepository::new(store.clone())
            .create(ProductCreate {
                name: "Set Menu".into(),
                description: None,
                price: 200.0,
                category: None,
                stock: None,
                is_available: None,
            })
            .unwrap();

        let order = orders::create_order(
            store,
            OrderCreate {
                table_id: table.id,
                items: vec![OrderItemCreate {
                    product_id: product.id,
                    quantity: 1,
                    notes: None,
                }],
            },
        )
        .unwrap();

        orders::update_status(store, &order.id, shared::models::OrderStatus::Preparing).unwrap();
        orders::update_status(store, &order.id, shared::models::OrderStatus::Completed).unwrap();
        order.id
    }

    fn payload(order_id: &str) -> InvoiceCreate {
        InvoiceCreate {
            order_id: order_id.into(),
            invoice_date: None,
            due_date: None,
            notes: None,
        }
    }

    #[test]
    fn test_create_copies_total_and_marks_order() {
        let store = Arc::new(MemStore::new());
        let order_id = completed_order(&store);

        let invoice = InvoiceService::new(store.clone()).create(payload(&order_id)).unwrap();

        assert_eq!(invoice.total_amount, 200.0);
        assert_eq!(invoice.payment_status, InvoicePaymentStatus::Pending);
        assert_eq!(invoice.invoice_number, "INV-000001");
        assert!(store.orders.get(&order_id).unwrap().invoiced);
    }

    #[test]
    fn test_second_invoice_for_same_order_fails() {
        let store = Arc::new(MemStore::new());
        let order_id = completed_order(&store);
        let service = InvoiceService::new(store.clone());

        service.create(payload(&order_id)).unwrap();
        let err = service.create(payload(&order_id)).unwrap_err();

        assert_eq!(err.code, ErrorCode::OrderAlreadyInvoiced);
        assert_eq!(store.invoices.len(), 1);
    }

    #[test]
    fn test_non_completed_order_rejected() {
        let store = Arc::new(MemStore::new());
        let order_id = completed_order(&store);

        // A fresh pending order on the same table
        let product = ProductRepository::new(store.clone())
            .create(ProductCreate {
                name: "Dessert".into(),
                description: None,
                price: 10.0,
                category: None,
                stock: None,
                is_available: None,
            })
            .unwrap();
        let table_id = store.orders.get(&order_id).unwrap().table.clone();
        let pending = orders::create_order(
            &store,
            OrderCreate {
                table_id,
                items: vec![OrderItemCreate {
                    product_id: product.id,
                    quantity: 1,
                    notes: None,
                }],
            },
        )
        .unwrap();

        let err = InvoiceService::new(store.clone())
            .create(payload(&pending.id))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotCompleted);
        assert!(!store.orders.get(&pending.id).unwrap().invoiced);
    }

    #[test]
    fn test_default_due_date_is_seven_days_out() {
        let store = Arc::new(MemStore::new());
        let order_id = completed_order(&store);

        let invoice = InvoiceService::new(store.clone())
            .create(InvoiceCreate {
                order_id,
                invoice_date: NaiveDate::from_ymd_opt(2024, 1, 1),
                due_date: None,
                notes: None,
            })
            .unwrap();

        assert_eq!(invoice.invoice_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    }

    #[test]
    fn test_due_date_before_invoice_date_rejected() {
        let store = Arc::new(MemStore::new());
        let order_id = completed_order(&store);

        let err = InvoiceService::new(store.clone())
            .create(InvoiceCreate {
                order_id: order_id.clone(),
                invoice_date: NaiveDate::from_ymd_opt(2024, 1, 10),
                due_date: NaiveDate::from_ymd_opt(2024, 1, 5),
                notes: None,
            })
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DueDateBeforeInvoiceDate);
        // Nothing persisted, order still invoiceable
        assert!(store.invoices.is_empty());
        assert!(!store.orders.get(&order_id).unwrap().invoiced);
    }

    #[test]
    fn test_missing_order_rejected() {
        let store = Arc::new(MemStore::new());
        let err = InvoiceService::new(store).create(payload("missing")).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[test]
    fn test_update_status_only_cancels_pending() {
        let store = Arc::new(MemStore::new());
        let order_id = completed_order(&store);
        let service = InvoiceService::new(store.clone());

        let invoice = service.create(payload(&order_id)).unwrap();

        // paid is reserved for settlement
        let err = service
            .update_status(&invoice.id, InvoicePaymentStatus::Paid)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);

        let cancelled = service
            .update_status(&invoice.id, InvoicePaymentStatus::Cancelled)
            .unwrap();
        assert_eq!(cancelled.payment_status, InvoicePaymentStatus::Cancelled);

        // Cancelling twice fails: the invoice is no longer pending
        let err = service
            .update_status(&invoice.id, InvoicePaymentStatus::Cancelled)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvoiceNotPending);
    }
}

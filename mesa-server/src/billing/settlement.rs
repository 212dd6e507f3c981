//! Payment settlement
//!
//! Records payments against invoices and keeps the invoice payment status in
//! step with the cumulative non-cancelled paid amount. The sum of
//! non-cancelled payments never exceeds the invoice total; a payment that
//! would violate this is rejected before anything is persisted.
//!
//! Lock ordering: the invoice entry is always taken before any payment
//! entry.

use std::sync::Arc;

use chrono::Utc;
use shared::models::{InvoicePaymentStatus, Payment, PaymentCreate};
use shared::money;

use crate::store::{MemStore, PaymentRepository, new_id};
use crate::utils::{AppError, AppResult, ErrorCode};

use super::invoice::status_str;

/// Payment settlement service
#[derive(Clone)]
pub struct SettlementService {
    store: Arc<MemStore>,
}

impl SettlementService {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// Record a payment against a pending invoice
    ///
    /// When the cumulative paid amount reaches the invoice total (within the
    /// 0.01 currency tolerance) the invoice transitions to `paid`; otherwise
    /// it stays `pending`.
    pub fn record_payment(&self, payload: PaymentCreate) -> AppResult<Payment> {
        if !payload.amount.is_finite() || payload.amount <= 0.0 {
            return Err(AppError::new(ErrorCode::PaymentInvalidAmount)
                .with_detail("amount", payload.amount.to_string()));
        }

        let mut invoice = self
            .store
            .invoices
            .get_mut(&payload.invoice_id)
            .ok_or_else(|| {
                AppError::new(ErrorCode::InvoiceNotFound)
                    .with_detail("id", payload.invoice_id.clone())
            })?;

        if invoice.payment_status != InvoicePaymentStatus::Pending {
            return Err(AppError::new(ErrorCode::InvoiceNotPending)
                .with_detail("status", status_str(invoice.payment_status)));
        }

        let paid = PaymentRepository::new(self.store.clone()).paid_amount(&invoice.id);
        let prospective = money::to_decimal(paid) + money::to_decimal(payload.amount);
        if prospective > money::to_decimal(invoice.total_amount) + money::MONEY_TOLERANCE {
            return Err(AppError::new(ErrorCode::PaymentExceedsTotal)
                .with_detail("paid", paid.to_string())
                .with_detail("amount", payload.amount.to_string())
                .with_detail("total", invoice.total_amount.to_string()));
        }

        let payment = Payment {
            id: new_id(),
            invoice: invoice.id.clone(),
            amount: money::round_currency(payload.amount),
            method: payload.method,
            payment_date: Utc::now(),
            notes: payload.notes,
            cancelled: false,
        };
        self.store
            .payments
            .insert(payment.id.clone(), payment.clone());

        let cumulative = money::sum([paid, payment.amount]);
        if money::is_settled(cumulative, invoice.total_amount) {
            invoice.payment_status = InvoicePaymentStatus::Paid;
            tracing::info!(invoice_id = %invoice.id, paid = cumulative, "Invoice fully paid");
        } else {
            tracing::info!(
                invoice_id = %invoice.id,
                paid = cumulative,
                total = invoice.total_amount,
                "Partial payment recorded"
            );
        }

        Ok(payment)
    }

    /// Cancel a payment and re-evaluate the invoice status
    ///
    /// Cancelling an already-cancelled payment is a no-op that changes
    /// neither the payment nor the invoice.
    pub fn cancel_payment(&self, payment_id: &str) -> AppResult<Payment> {
        let (invoice_id, existing) = {
            let payment = self.store.payments.get(payment_id).ok_or_else(|| {
                AppError::new(ErrorCode::PaymentNotFound).with_detail("id", payment_id)
            })?;
            (payment.invoice.clone(), payment.clone())
        };

        if existing.cancelled {
            return Ok(existing);
        }

        // Invoice entry first, then the payment entry
        let invoice_entry = self.store.invoices.get_mut(&invoice_id);

        let cancelled = {
            let mut payment = self.store.payments.get_mut(payment_id).ok_or_else(|| {
                AppError::new(ErrorCode::PaymentNotFound).with_detail("id", payment_id)
            })?;
            payment.cancelled = true;
            payment.clone()
        };

        if let Some(mut invoice) = invoice_entry
            && invoice.payment_status == InvoicePaymentStatus::Paid
        {
            let paid = PaymentRepository::new(self.store.clone()).paid_amount(&invoice_id);
            if !money::is_settled(paid, invoice.total_amount) {
                invoice.payment_status = InvoicePaymentStatus::Pending;
                tracing::info!(invoice_id = %invoice_id, paid = paid, "Invoice reverted to pending");
            }
        }

        Ok(cancelled)
    }

    /// All payments against an invoice, cancelled ones included, ordered by
    /// payment date ascending
    pub fn list_for_invoice(&self, invoice_id: &str) -> AppResult<Vec<Payment>> {
        if !self.store.invoices.contains_key(invoice_id) {
            return Err(AppError::new(ErrorCode::InvoiceNotFound).with_detail("id", invoice_id));
        }
        Ok(PaymentRepository::new(self.store.clone()).find_by_invoice(invoice_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{
        DiningTableCreate, InvoiceCreate, OrderCreate, OrderItemCreate, PaymentMethod,
        ProductCreate,
    };

    use crate::billing::InvoiceService;
    use crate::orders;
    use crate::store::{DiningTableRepository, ProductRepository};

    fn invoice_status(store: &Arc<MemStore>, id: &str) -> InvoicePaymentStatus {
        store.invoices.get(id).unwrap().payment_status
    }

    /// A pending invoice over a 200.00 order
    fn pending_invoice(store: &Arc<MemStore>) -> shared::models::Invoice {
        let table = DiningTableRepository::new(store.clone())
            .create(DiningTableCreate {
                name: "T1".into(),
                capacity: None,
                status: None,
            })
            .unwrap();
        let product = ProductRepository::new(store.clone())
            .create(ProductCreate {
                name: "Tasting Menu".into(),
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

        InvoiceService::new(store.clone())
            .create(InvoiceCreate {
                order_id: order.id,
                invoice_date: None,
                due_date: None,
                notes: None,
            })
            .unwrap()
    }

    fn pay(invoice_id: &str, amount: f64) -> PaymentCreate {
        PaymentCreate {
            invoice_id: invoice_id.into(),
            amount,
            method: PaymentMethod::Cash,
            notes: None,
        }
    }

    #[test]
    fn test_full_payment_settles_invoice() {
        let store = Arc::new(MemStore::new());
        let invoice = pending_invoice(&store);
        let service = SettlementService::new(store.clone());

        service.record_payment(pay(&invoice.id, 200.0)).unwrap();
        assert_eq!(
            invoice_status(&store, &invoice.id),
            InvoicePaymentStatus::Paid
        );

        // Any further payment is rejected, however small
        let err = service.record_payment(pay(&invoice.id, 0.01)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvoiceNotPending);
    }

    #[test]
    fn test_partial_then_overpayment_then_exact_settlement() {
        let store = Arc::new(MemStore::new());
        let invoice = pending_invoice(&store);
        let service = SettlementService::new(store.clone());

        // 120.00 of 200.00: invoice stays pending
        service.record_payment(pay(&invoice.id, 120.0)).unwrap();
        assert_eq!(
            invoice_status(&store, &invoice.id),
            InvoicePaymentStatus::Pending
        );

        // 120 + 90 > 200: rejected, nothing persisted
        let err = service.record_payment(pay(&invoice.id, 90.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentExceedsTotal);
        assert_eq!(service.list_for_invoice(&invoice.id).unwrap().len(), 1);

        // 120 + 80 = 200: settles exactly
        service.record_payment(pay(&invoice.id, 80.0)).unwrap();
        assert_eq!(
            invoice_status(&store, &invoice.id),
            InvoicePaymentStatus::Paid
        );
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let store = Arc::new(MemStore::new());
        let invoice = pending_invoice(&store);
        let service = SettlementService::new(store.clone());

        for amount in [0.0, -5.0, f64::NAN] {
            let err = service.record_payment(pay(&invoice.id, amount)).unwrap_err();
            assert_eq!(err.code, ErrorCode::PaymentInvalidAmount);
        }
    }

    #[test]
    fn test_payment_against_cancelled_invoice_rejected() {
        let store = Arc::new(MemStore::new());
        let invoice = pending_invoice(&store);

        InvoiceService::new(store.clone())
            .update_status(&invoice.id, InvoicePaymentStatus::Cancelled)
            .unwrap();

        let err = SettlementService::new(store.clone())
            .record_payment(pay(&invoice.id, 50.0))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvoiceNotPending);
    }

    #[test]
    fn test_cancel_payment_reverts_paid_invoice() {
        let store = Arc::new(MemStore::new());
        let invoice = pending_invoice(&store);
        let service = SettlementService::new(store.clone());

        let payment = service.record_payment(pay(&invoice.id, 200.0)).unwrap();
        assert_eq!(
            invoice_status(&store, &invoice.id),
            InvoicePaymentStatus::Paid
        );

        let cancelled = service.cancel_payment(&payment.id).unwrap();
        assert!(cancelled.cancelled);
        assert_eq!(
            invoice_status(&store, &invoice.id),
            InvoicePaymentStatus::Pending
        );
    }

    #[test]
    fn test_cancel_payment_is_idempotent() {
        let store = Arc::new(MemStore::new());
        let invoice = pending_invoice(&store);
        let service = SettlementService::new(store.clone());

        let payment = service.record_payment(pay(&invoice.id, 80.0)).unwrap();
        service.cancel_payment(&payment.id).unwrap();
        let status_after_first = invoice_status(&store, &invoice.id);

        // Second cancellation: no-op, status does not change a second time
        let again = service.cancel_payment(&payment.id).unwrap();
        assert!(again.cancelled);
        assert_eq!(
            invoice_status(&store, &invoice.id),
            status_after_first
        );
    }

    #[test]
    fn test_cancelled_payment_frees_room_for_new_payments() {
        let store = Arc::new(MemStore::new());
        let invoice = pending_invoice(&store);
        let service = SettlementService::new(store.clone());

        let payment = service.record_payment(pay(&invoice.id, 150.0)).unwrap();
        service.cancel_payment(&payment.id).unwrap();

        // 150 is cancelled, so a fresh 200 fits
        service.record_payment(pay(&invoice.id, 200.0)).unwrap();
        assert_eq!(
            invoice_status(&store, &invoice.id),
            InvoicePaymentStatus::Paid
        );
    }

    #[test]
    fn test_listing_includes_cancelled_in_date_order() {
        let store = Arc::new(MemStore::new());
        let invoice = pending_invoice(&store);
        let service = SettlementService::new(store.clone());

        let first = service.record_payment(pay(&invoice.id, 50.0)).unwrap();
        service.cancel_payment(&first.id).unwrap();
        service.record_payment(pay(&invoice.id, 60.0)).unwrap();

        let listed = service.list_for_invoice(&invoice.id).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert!(listed[0].cancelled);
        assert!(!listed[1].cancelled);

        let err = service.list_for_invoice("missing").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvoiceNotFound);
    }

    #[test]
    fn test_unknown_invoice_and_payment() {
        let store = Arc::new(MemStore::new());
        let service = SettlementService::new(store);

        let err = service.record_payment(pay("missing", 10.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvoiceNotFound);

        let err = service.cancel_payment("missing").unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentNotFound);
    }
}

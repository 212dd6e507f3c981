//! Payment repository

use std::sync::Arc;

use shared::models::Payment;

use crate::utils::{AppError, AppResult, ErrorCode};

use super::MemStore;

/// Repository for payments
#[derive(Clone)]
pub struct PaymentRepository {
    store: Arc<MemStore>,
}

impl PaymentRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// All payments, ordered by payment date ascending
    pub fn find_all(&self) -> Vec<Payment> {
        let mut payments: Vec<Payment> = self
            .store
            .payments
            .iter()
            .map(|entry| entry.clone())
            .collect();
        payments.sort_by_key(|p| p.payment_date);
        payments
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Payment> {
        self.store
            .payments
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| AppError::new(ErrorCode::PaymentNotFound).with_detail("id", id))
    }

    /// All payments against an invoice (cancelled ones included), ordered by
    /// payment date ascending
    pub fn find_by_invoice(&self, invoice_id: &str) -> Vec<Payment> {
        let mut payments: Vec<Payment> = self
            .store
            .payments
            .iter()
            .filter(|entry| entry.invoice == invoice_id)
            .map(|entry| entry.clone())
            .collect();
        payments.sort_by_key(|p| p.payment_date);
        payments
    }

    /// Cumulative non-cancelled amount paid against an invoice
    pub fn paid_amount(&self, invoice_id: &str) -> f64 {
        shared::money::sum(
            self.store
                .payments
                .iter()
                .filter(|entry| entry.invoice == invoice_id && !entry.cancelled)
                .map(|entry| entry.amount),
        )
    }
}

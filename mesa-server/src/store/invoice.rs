//! Invoice repository

use std::sync::Arc;
use std::sync::atomic::Ordering;

use shared::models::Invoice;

use crate::utils::{AppError, AppResult, ErrorCode};

use super::MemStore;

/// Repository for invoices
#[derive(Clone)]
pub struct InvoiceRepository {
    store: Arc<MemStore>,
}

impl InvoiceRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// All invoices, ordered by invoice number
    pub fn find_all(&self) -> Vec<Invoice> {
        let mut invoices: Vec<Invoice> = self
            .store
            .invoices
            .iter()
            .map(|entry| entry.clone())
            .collect();
        invoices.sort_by(|a, b| a.invoice_number.cmp(&b.invoice_number));
        invoices
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Invoice> {
        self.store
            .invoices
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| AppError::new(ErrorCode::InvoiceNotFound).with_detail("id", id))
    }

    /// The invoice generated from an order, if any (one-to-one)
    pub fn find_by_order(&self, order_id: &str) -> Option<Invoice> {
        self.store
            .invoices
            .iter()
            .find(|entry| entry.order == order_id)
            .map(|entry| entry.clone())
    }

    /// Next invoice number in the `INV-NNNNNN` sequence
    pub fn next_invoice_number(&self) -> String {
        let seq = self.store.invoice_seq.fetch_add(1, Ordering::SeqCst) + 1;
        format!("INV-{:06}", seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_number_sequence() {
        let repo = InvoiceRepository::new(Arc::new(MemStore::new()));
        assert_eq!(repo.next_invoice_number(), "INV-000001");
        assert_eq!(repo.next_invoice_number(), "INV-000002");
        assert_eq!(repo.next_invoice_number(), "INV-000003");
    }
}

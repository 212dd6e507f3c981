//! In-Memory Store
//!
//! Provides CRUD repositories over a process-local [`MemStore`]. The store is
//! the sole source of truth and serializes writes per entity: every mutation
//! either fully applies or does not apply at all.
//!
//! Lock ordering for multi-entity operations is always invoice before
//! payment; order entries are never held while touching other collections
//! except during invoice creation, which owns that pairing.

// Auth
pub mod operator;

// Catalog
pub mod category;
pub mod product;

// Location
pub mod dining_table;

// Workflow
pub mod invoice;
pub mod order;
pub mod payment;

// Re-exports
pub use category::CategoryRepository;
pub use dining_table::DiningTableRepository;
pub use invoice::InvoiceRepository;
pub use operator::{Operator, OperatorRepository};
pub use order::OrderRepository;
pub use payment::PaymentRepository;
pub use product::ProductRepository;

use std::sync::atomic::AtomicU64;

use dashmap::DashMap;
use shared::models::{Category, DiningTable, Invoice, Order, Payment, Product};

/// Process-local entity store
///
/// Each collection is an id-keyed [`DashMap`]; repositories and the billing
/// services hold an `Arc<MemStore>` and operate on the collections directly.
#[derive(Debug, Default)]
pub struct MemStore {
    pub(crate) tables: DashMap<String, DiningTable>,
    pub(crate) categories: DashMap<String, Category>,
    pub(crate) products: DashMap<String, Product>,
    pub(crate) orders: DashMap<String, Order>,
    pub(crate) invoices: DashMap<String, Invoice>,
    pub(crate) payments: DashMap<String, Payment>,
    pub(crate) operators: DashMap<String, Operator>,
    /// Monotonic counter backing invoice number generation
    pub(crate) invoice_seq: AtomicU64,
}

impl MemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

/// Generate a fresh entity id
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

//! Billing module
//!
//! - **invoice**: invoice generation from completed orders
//! - **settlement**: recording and cancelling payments against invoices
//!
//! An invoice is generated exactly once from a completed, not-yet-invoiced
//! order; payments then settle it until the outstanding balance reaches zero.

pub mod invoice;
pub mod settlement;

pub use invoice::InvoiceService;
pub use settlement::SettlementService;

/// Default payment term applied when no due date is chosen
pub const DEFAULT_PAYMENT_TERM_DAYS: i64 = 7;

//! API route modules
//!
//! # Structure
//!
//! - [`auth`] - authentication endpoints
//! - [`tables`] - dining table management
//! - [`categories`] - category management
//! - [`products`] - product catalog
//! - [`orders`] - order creation and lifecycle
//! - [`invoices`] - invoice generation
//! - [`payments`] - payment settlement

pub mod auth;
pub mod categories;
pub mod invoices;
pub mod orders;
pub mod payments;
pub mod products;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};

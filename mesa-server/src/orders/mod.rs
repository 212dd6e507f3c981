//! Order module
//!
//! - **lifecycle**: the order status state machine
//! - **service**: order composition from create payloads and status updates

pub mod lifecycle;
pub mod service;

pub use lifecycle::{advance, filter_by_status, is_allowed};
pub use service::{create_order, update_status};

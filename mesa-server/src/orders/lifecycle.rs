//! Order lifecycle state machine
//!
//! ```text
//! pending ──► preparing ──► completed (terminal)
//!    │            │
//!    └────────────┴───────► cancelled (terminal)
//! ```
//!
//! Reaching `completed` makes an order eligible for invoicing; reaching
//! `cancelled` permanently excludes it.

use shared::models::{Order, OrderStatus};

use crate::utils::{AppError, AppResult, ErrorCode};

/// Whether a status transition is allowed
///
/// The allowed transitions are exactly `pending→preparing`,
/// `pending→cancelled`, `preparing→completed`, and `preparing→cancelled`.
pub fn is_allowed(from: OrderStatus, to: OrderStatus) -> bool {
    use OrderStatus::*;
    matches!(
        (from, to),
        (Pending, Preparing) | (Pending, Cancelled) | (Preparing, Completed) | (Preparing, Cancelled)
    )
}

/// Advance an order to the target status
///
/// On a disallowed transition the order is left untouched and an
/// `OrderInvalidTransition` error is returned; nothing must be sent to the
/// backing store in that case.
pub fn advance(order: &mut Order, target: OrderStatus) -> AppResult<()> {
    if !is_allowed(order.status, target) {
        return Err(AppError::with_message(
            ErrorCode::OrderInvalidTransition,
            format!(
                "Cannot move order from {} to {}",
                order.status.as_str(),
                target.as_str()
            ),
        )
        .with_detail("from", order.status.as_str())
        .with_detail("to", target.as_str()));
    }

    order.status = target;
    Ok(())
}

/// Filter orders by exact status match; `None` keeps everything
///
/// Pure view operation, never mutates the collection.
pub fn filter_by_status(orders: &[Order], status: Option<OrderStatus>) -> Vec<Order> {
    match status {
        Some(wanted) => orders
            .iter()
            .filter(|order| order.status == wanted)
            .cloned()
            .collect(),
        None => orders.to_vec(),
    }
}

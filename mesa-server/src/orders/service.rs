//! Order composition and status updates
//!
//! Orders are composed server-side from the `{tableId, items}` create
//! payload: each line resolves its product, snapshots name and current
//! price, and the order total is fixed at creation time.

use std::sync::Arc;

use chrono::Utc;
use shared::models::{Order, OrderCreate, OrderItem, OrderStatus};
use shared::money;

use crate::orders::lifecycle;
use crate::store::{DiningTableRepository, MemStore, OrderRepository, ProductRepository, new_id};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Maximum allowed quantity per line item
const MAX_QUANTITY: i32 = 9999;

/// Compose and persist a new order
///
/// Line items snapshot the product's current price; later catalog changes
/// never affect the stored order.
pub fn create_order(store: &Arc<MemStore>, payload: OrderCreate) -> AppResult<Order> {
    let tables = DiningTableRepository::new(store.clone());
    tables.find_by_id(&payload.table_id)?;

    if payload.items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }

    let products = ProductRepository::new(store.clone());
    let mut items = Vec::with_capacity(payload.items.len());

    for line in payload.items {
        if line.quantity < 1 {
            return Err(AppError::validation(format!(
                "quantity must be at least 1, got {}",
                line.quantity
            ))
            .with_detail("productId", line.product_id));
        }
        if line.quantity > MAX_QUANTITY {
            return Err(AppError::validation(format!(
                "quantity exceeds maximum allowed ({}), got {}",
                MAX_QUANTITY, line.quantity
            )));
        }

        let product = products.find_by_id(&line.product_id)?;
        if !product.is_available {
            return Err(AppError::new(ErrorCode::ProductUnavailable)
                .with_detail("productId", product.id.clone()));
        }

        let line_total = money::line_total(product.price, line.quantity);
        items.push(OrderItem {
            product: product.id,
            product_name: product.name,
            unit_price: product.price,
            quantity: line.quantity,
            notes: line.notes,
            line_total,
        });
    }

    let total_amount = money::sum(items.iter().map(|item| item.line_total));

    let order = Order {
        id: new_id(),
        table: payload.table_id,
        items,
        status: OrderStatus::Pending,
        total_amount,
        invoiced: false,
        created_at: Utc::now(),
    };

    OrderRepository::new(store.clone()).insert(order.clone());
    tracing::info!(order_id = %order.id, table = %order.table, total = order.total_amount, "Order created");

    Ok(order)
}

/// Advance an order's status under its entry lock
pub fn update_status(
    store: &Arc<MemStore>,
    id: &str,
    target: OrderStatus,
) -> AppResult<Order> {
    let repo = OrderRepository::new(store.clone());
    let order = repo.with_mut(id, |order| {
        lifecycle::advance(order, target)?;
        Ok(order.clone())
    })?;

    tracing::info!(order_id = %id, status = order.status.as_str(), "Order status updated");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{DiningTableCreate, OrderItemCreate, ProductCreate, ProductUpdate};

    fn seeded_store() -> (Arc<MemStore>, String, String, String) {
        let store = Arc::new(MemStore::new());

        let table = DiningTableRepository::new(store.clone())
            .create(DiningTableCreate {
                name: "T1".into(),
                capacity: None,
                status: None,
            })
            .unwrap();

        let products = ProductRepository::new(store.clone());
        let product_a = products
            .create(ProductCreate {
                name: "Grilled Fish".into(),
                description: None,
                price: 50.0,
                category: None,
                stock: None,
                is_available: None,
            })
            .unwrap();
        let product_b = products
            .create(ProductCreate {
                name: "House Salad".into(),
                description: None,
                price: 30.0,
                category: None,
                stock: None,
                is_available: None,
            })
            .unwrap();

        (store, table.id, product_a.id, product_b.id)
    }

    fn line(product_id: &str, quantity: i32) -> OrderItemCreate {
        OrderItemCreate {
            product_id: product_id.into(),
            quantity,
            notes: None,
        }
    }

    #[test]
    fn test_create_order_total_is_sum_of_line_totals() {
        let (store, table_id, product_a, product_b) = seeded_store();

        // product A price 50.00 qty 2, product B price 30.00 qty 1 -> 130.00
        let order = create_order(
            &store,
            OrderCreate {
                table_id,
                items: vec![line(&product_a, 2), line(&product_b, 1)],
            },
        )
        .unwrap();

        assert_eq!(order.total_amount, 130.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(!order.invoiced);
        assert_eq!(order.items[0].line_total, 100.0);
        assert_eq!(order.items[1].line_total, 30.0);
    }

    #[test]
    fn test_order_total_not_recomputed_after_price_change() {
        let (store, table_id, product_a, _) = seeded_store();

        let order = create_order(
            &store,
            OrderCreate {
                table_id,
                items: vec![line(&product_a, 1)],
            },
        )
        .unwrap();
        assert_eq!(order.total_amount, 50.0);

        // Catalog price changes after the order exists
        ProductRepository::new(store.clone())
            .update(
                &product_a,
                ProductUpdate {
                    name: None,
                    description: None,
                    price: Some(99.0),
                    category: None,
                    stock: None,
                    is_available: None,
                },
            )
            .unwrap();

        let stored = OrderRepository::new(store.clone())
            .find_by_id(&order.id)
            .unwrap();
        assert_eq!(stored.total_amount, 50.0);
        assert_eq!(stored.items[0].unit_price, 50.0);
    }

    #[test]
    fn test_create_order_empty_items_rejected() {
        let (store, table_id, _, _) = seeded_store();

        let err = create_order(
            &store,
            OrderCreate {
                table_id,
                items: vec![],
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
    }

    #[test]
    fn test_create_order_unknown_product_rejected() {
        let (store, table_id, _, _) = seeded_store();

        let err = create_order(
            &store,
            OrderCreate {
                table_id,
                items: vec![line("missing", 1)],
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
    }

    #[test]
    fn test_create_order_unavailable_product_rejected() {
        let (store, table_id, product_a, _) = seeded_store();

        ProductRepository::new(store.clone())
            .update(
                &product_a,
                ProductUpdate {
                    name: None,
                    description: None,
                    price: None,
                    category: None,
                    stock: None,
                    is_available: Some(false),
                },
            )
            .unwrap();

        let err = create_order(
            &store,
            OrderCreate {
                table_id,
                items: vec![line(&product_a, 1)],
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductUnavailable);
    }

    #[test]
    fn test_create_order_invalid_quantity_rejected() {
        let (store, table_id, product_a, _) = seeded_store();

        let err = create_order(
            &store,
            OrderCreate {
                table_id,
                items: vec![line(&product_a, 0)],
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_create_order_unknown_table_rejected() {
        let (store, _, product_a, _) = seeded_store();

        let err = create_order(
            &store,
            OrderCreate {
                table_id: "missing".into(),
                items: vec![line(&product_a, 1)],
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);
    }

    #[test]
    fn test_update_status_walks_the_state_machine() {
        let (store, table_id, product_a, _) = seeded_store();

        let order = create_order(
            &store,
            OrderCreate {
                table_id,
                items: vec![line(&product_a, 1)],
            },
        )
        .unwrap();

        // pending -> completed is not allowed, store untouched
        let err = update_status(&store, &order.id, OrderStatus::Completed).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidTransition);
        let stored = OrderRepository::new(store.clone())
            .find_by_id(&order.id)
            .unwrap();
        assert_eq!(stored.status, OrderStatus::Pending);

        let order = update_status(&store, &order.id, OrderStatus::Preparing).unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
        let order = update_status(&store, &order.id, OrderStatus::Completed).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);

        // Terminal states are never left
        let err = update_status(&store, &order.id, OrderStatus::Cancelled).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidTransition);
    }
}

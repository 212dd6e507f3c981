//! Domain models shared between server and client
//!
//! All entities serialize with camelCase field names; statuses and payment
//! methods are snake_case strings on the wire.

pub mod category;
pub mod dining_table;
pub mod invoice;
pub mod order;
pub mod payment;
pub mod product;

pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use dining_table::{
    DiningTable, DiningTableCreate, DiningTableStatusUpdate, DiningTableUpdate, TableStatus,
};
pub use invoice::{Invoice, InvoiceCreate, InvoicePaymentStatus, InvoiceStatusUpdate};
pub use order::{
    Order, OrderCreate, OrderItem, OrderItemCreate, OrderStatus, OrderStatusUpdate,
};
pub use payment::{Payment, PaymentCreate, PaymentMethod};
pub use product::{Product, ProductCreate, ProductUpdate};

//! Mesa Server - restaurant management backend
//!
//! # Architecture
//!
//! - **store** (`store`): in-memory entity store and repositories
//! - **auth** (`auth`): JWT + Argon2 authentication
//! - **orders** (`orders`): order composition and lifecycle state machine
//! - **billing** (`billing`): invoice generation and payment settlement
//! - **api** (`api`): RESTful HTTP routes and handlers
//!
//! # Module structure
//!
//! ```text
//! mesa-server/src/
//! ├── core/          # Configuration, state, server assembly
//! ├── auth/          # JWT authentication
//! ├── store/         # In-memory store and repositories
//! ├── orders/        # Order composition and lifecycle
//! ├── billing/       # Invoices and payment settlement
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Logging and shared helpers
//! ```

pub mod api;
pub mod auth;
pub mod billing;
pub mod core;
pub mod orders;
pub mod store;
pub mod utils;

// Re-export public types
pub use crate::auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState};
pub use crate::store::MemStore;
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::init_logger;

/// Load .env and prepare the process environment
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

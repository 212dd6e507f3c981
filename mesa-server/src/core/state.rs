use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;
use crate::store::{MemStore, Operator, OperatorRepository};

/// Server state - shared handles to all services
///
/// `ServerState` is cheap to clone (`Arc` internals) and is handed to every
/// axum handler via `State`.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Configuration (immutable) |
/// | store | In-memory entity store |
/// | jwt_service | JWT authentication service |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// In-memory entity store
    pub store: Arc<MemStore>,
    /// JWT authentication service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Initialize server state: store, JWT service, seeded operator
    pub fn initialize(config: &Config) -> Self {
        let store = Arc::new(MemStore::new());
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        // Seed the default operator so a fresh instance is usable
        let operators = OperatorRepository::new(store.clone());
        match Operator::with_password(&config.admin_username, "Administrator", &config.admin_password)
        {
            Ok(operator) => {
                operators.insert(operator);
                tracing::info!(username = %config.admin_username, "Seeded default operator");
            }
            Err(e) => {
                tracing::error!("Failed to seed default operator: {}", e);
            }
        }

        Self {
            config: config.clone(),
            store,
            jwt_service,
        }
    }

    /// Get the shared store handle
    pub fn get_store(&self) -> Arc<MemStore> {
        self.store.clone()
    }

    /// Get the JWT service
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}

use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// All values can be overridden via environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP service port |
/// | BIND_ADDR | 127.0.0.1 | Bind address |
/// | ENVIRONMENT | development | Runtime environment |
/// | ADMIN_USERNAME | admin | Seeded operator username |
/// | ADMIN_PASSWORD | admin | Seeded operator password (dev default) |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 ADMIN_PASSWORD=s3cret cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address for the HTTP listener
    pub bind_addr: String,
    /// HTTP API service port
    pub http_port: u16,
    /// JWT authentication configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Username of the operator seeded at startup
    pub admin_username: String,
    /// Password of the operator seeded at startup
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".into()),
        }
    }

    /// Override the listener settings, typically for tests
    pub fn with_overrides(bind_addr: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.bind_addr = bind_addr.into();
        config.http_port = http_port;
        config
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

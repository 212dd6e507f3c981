//! Shared types for the Mesa restaurant management system
//!
//! Common types used by both the server and the client: domain models,
//! error types, the API response envelope, auth DTOs, and money arithmetic.

pub mod client;
pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};

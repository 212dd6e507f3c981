//! Utility module - shared helpers
//!
//! - [`AppError`] / [`AppResult`] - application error types (from shared::error)
//! - [`logger`] - tracing setup

pub mod logger;

// Re-export error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

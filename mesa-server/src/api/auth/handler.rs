//! Authentication Handlers
//!
//! Login, logout, and current-user lookup.

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::store::OperatorRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

// Re-use shared DTOs for API consistency
use shared::client::{LoginRequest, LoginResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 250;

/// POST /api/auth/login
///
/// Authenticates operator credentials and returns a JWT token.
/// The error message is identical for unknown usernames and wrong passwords
/// to prevent username enumeration.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let operators = OperatorRepository::new(state.get_store());
    let operator = operators.find_by_username(&req.username);

    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let operator = match operator {
        Some(op) => {
            if !op.is_active {
                return Err(AppError::invalid_credentials());
            }

            let password_valid = op
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(username = %req.username, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            op
        }
        None => {
            tracing::warn!(username = %req.username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(&operator.id, &operator.username, &operator.display_name)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(username = %operator.username, "Login successful");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: operator.id,
            username: operator.username,
            display_name: operator.display_name,
        },
    }))
}

/// GET /api/auth/me
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<UserInfo> {
    Json(UserInfo {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
    })
}

/// POST /api/auth/logout
///
/// Tokens are stateless; the client clears its stored credential.
pub async fn logout(Extension(user): Extension<CurrentUser>) -> ApiResponse<()> {
    tracing::info!(username = %user.username, "Logout");
    ApiResponse::ok()
}

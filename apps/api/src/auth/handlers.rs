//! Axum route handlers for signup and login.
//!
//! Sessions and tokens are out of scope: login answers with a status only,
//! and the caller owns whatever session it wants to build on top.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub username: String,
    pub status: String,
}

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    validate_credentials(&request)?;

    state
        .credentials
        .register(&request.username, &request.password)
        .await?;

    Ok(Json(AuthResponse {
        username: request.username,
        status: "registered".to_string(),
    }))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    validate_credentials(&request)?;

    if !state
        .credentials
        .verify(&request.username, &request.password)
        .await
    {
        return Err(AppError::Unauthorized);
    }

    Ok(Json(AuthResponse {
        username: request.username,
        status: "ok".to_string(),
    }))
}

fn validate_credentials(request: &CredentialsRequest) -> Result<(), AppError> {
    if request.username.trim().is_empty() {
        return Err(AppError::Validation("username cannot be empty".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::Validation("password cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_username_is_rejected() {
        let request = CredentialsRequest {
            username: "  ".to_string(),
            password: "secret".to_string(),
        };
        assert!(validate_credentials(&request).is_err());
    }

    #[test]
    fn test_empty_password_is_rejected() {
        let request = CredentialsRequest {
            username: "user1".to_string(),
            password: String::new(),
        };
        assert!(validate_credentials(&request).is_err());
    }

    #[test]
    fn test_normal_credentials_pass() {
        let request = CredentialsRequest {
            username: "user1".to_string(),
            password: "washingMachine".to_string(),
        };
        assert!(validate_credentials(&request).is_ok());
    }
}

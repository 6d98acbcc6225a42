// Copyright (C) 2026 The Horas Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the server.
//!
//! Provides an Axum extractor that validates the bearer session token
//! and yields the authenticated user context to handlers.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use horas_api::{AuthenticatedActor, AuthenticationService};
use horas_persistence::UserData;
use tracing::{debug, warn};

use crate::AppState;

/// Extractor for authenticated users.
///
/// Validates the `Authorization: Bearer <token>` header via
/// `AuthenticationService::validate_session` and returns the
/// authenticated actor together with the stored account.
///
/// # Errors
///
/// Rejects with HTTP 401 if the header is missing or malformed, or if
/// the session is unknown or expired.
pub struct SessionUser(pub AuthenticatedActor, pub UserData);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingAuthorizationHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::InvalidAuthorizationHeader
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            SessionError::InvalidAuthorizationHeader
        })?;

        let mut persistence = state.persistence.lock().await;
        let (actor, user) = AuthenticationService::validate_session(&mut persistence, token)
            .map_err(|e| {
                warn!(error = %e, "Session validation failed");
                SessionError::InvalidSession(e.to_string())
            })?;

        debug!(
            username = %user.username,
            role = ?actor.role,
            "Session validated successfully"
        );

        Ok(Self(actor, user))
    }
}

/// Session extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Session validation failed.
    InvalidSession(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingAuthorizationHeader => (
                StatusCode::UNAUTHORIZED,
                String::from("Missing Authorization header"),
            ),
            Self::InvalidAuthorizationHeader => (
                StatusCode::UNAUTHORIZED,
                String::from("Invalid Authorization header"),
            ),
            Self::InvalidSession(message) => (StatusCode::UNAUTHORIZED, message),
        };

        let body = axum::Json(serde_json::json!({
            "error": true,
            "message": message,
        }));
        (status, body).into_response()
    }
}

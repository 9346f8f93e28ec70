use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::future::Future;
use std::sync::Arc;

use crate::{auth, context, AppError, AppState};

/// Extracts the session token from either a session cookie (frontend) or
/// Authorization header (testing, service calls)
fn extract_token_from_request(parts: &Parts) -> Option<String> {
    if let Some(cookie_header) = parts.headers.get(header::COOKIE) {
        if let Ok(cookie_str) = cookie_header.to_str() {
            // Parse cookies manually (cookie = "name=value; name2=value2")
            for cookie in cookie_str.split(';') {
                let cookie = cookie.trim();
                if let Some(value) = cookie.strip_prefix("session=") {
                    return Some(value.to_string());
                }
            }
        }
    }

    if let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    None
}

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

impl FromRequestParts<Arc<AppState>> for AuthenticatedUser {
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = extract_token_from_request(parts);
        let secret = state.config.session_secret.clone();

        async move {
            let token = token.ok_or_else(|| {
                AppError::Unauthorized(
                    "Missing authentication: no session cookie or Authorization header"
                        .to_string(),
                )
            })?;

            let user_id = auth::verify_session_token(&token, &secret)?;

            // Single write-once enrichment of the request context; log lines
            // after this point can be tagged with the user as well as the id.
            context::set_user_id(&user_id);
            tracing::debug!(user_id, "session verified");

            Ok(AuthenticatedUser { user_id })
        }
    }
}

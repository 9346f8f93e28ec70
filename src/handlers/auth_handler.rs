use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::extractors::AuthenticatedUser;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: String,
}

/// GET /api/auth/me - Identity of the current session
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Authenticated user", body = MeResponse),
        (status = 401, description = "Missing or invalid session")
    ),
    tag = "auth",
    security(("cookie_auth" = []))
)]
pub async fn get_me(auth: AuthenticatedUser) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: auth.user_id,
    })
}

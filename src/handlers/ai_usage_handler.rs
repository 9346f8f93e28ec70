use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{extractors::AuthenticatedUser, models::AiUsage, AppResult, AppState};

/// GET /api/ai-usage - Daily AI analysis quota for the current user
#[utoipa::path(
    get,
    path = "/api/ai-usage",
    responses(
        (status = 200, description = "Quota usage", body = AiUsage)
    ),
    tag = "ai-usage",
    security(("cookie_auth" = []))
)]
pub async fn get_ai_usage(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<AiUsage>> {
    let used = state.ai_usage.get(&auth.user_id).await.unwrap_or(0);
    Ok(Json(AiUsage::new(used, state.config.ai_daily_limit)))
}

//! Administration-area handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/notices
///
/// Configuration warnings for the signed-in administrator.
pub async fn list_notices(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let notices = state.homepages.admin_notices(&state.config.admin_url);
    tracing::debug!(user_id = auth.user_id, count = notices.len(), "Admin notices listed");

    Ok(Json(DataResponse { data: notices }))
}

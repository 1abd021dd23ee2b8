//! Role-based access control for editor endpoints.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use homepages_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

pub const ROLE_ADMINISTRATOR: &str = "administrator";
pub const ROLE_EDITOR: &str = "editor";

/// Requires the `editor` or `administrator` role. Rejects with 403 otherwise.
///
/// ```ignore
/// async fn write(RequireEditor(user): RequireEditor) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireEditor(pub AuthUser);

impl FromRequestParts<AppState> for RequireEditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_EDITOR && user.role != ROLE_ADMINISTRATOR {
            return Err(AppError::Core(CoreError::Forbidden(
                "Editor role required".into(),
            )));
        }
        Ok(RequireEditor(user))
    }
}

//! Pre-dispatch check for the homepage REST listing.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use super::auth::MaybeUser;
use crate::error::AppError;
use crate::query::ListingParams;
use crate::state::AppState;

/// Runs the plugin's REST pre-dispatch check before the listing handler.
///
/// Rejects with `rest_forbidden` (401 anonymous, 403 signed in) for any page
/// past the first.
pub struct ListingGuard {
    pub params: ListingParams,
}

impl FromRequestParts<AppState> for ListingGuard {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListingParams>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let user = match MaybeUser::from_request_parts(parts, state).await {
            Ok(user) => user,
            Err(never) => match never {},
        };

        state.homepages.rest_pre_dispatch(
            parts.uri.path(),
            params.page.as_deref(),
            user.is_logged_in(),
        )?;

        Ok(ListingGuard { params })
    }
}

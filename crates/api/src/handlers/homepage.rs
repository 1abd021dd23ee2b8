//! REST endpoints for homepage documents.
//!
//! The listing is public and guarded by [`ListingGuard`]; writes require
//! an editor and fire the save and status-transition hooks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use homepages_core::error::CoreError;
use homepages_core::ports::DocumentStore;
use homepages_core::post::{PostStatus, HOMEPAGE_POST_TYPE};
use homepages_core::query::QueryDescription;
use homepages_core::types::DocumentId;
use homepages_db::models::post::{NewPost, PostUpdate};
use serde::Deserialize;

use crate::engine::lifecycle;
use crate::error::{AppError, AppResult};
use crate::middleware::listing_guard::ListingGuard;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for creating a homepage.
#[derive(Debug, Deserialize)]
pub struct CreateHomepage {
    #[serde(default = "default_status")]
    pub status: PostStatus,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub featured_image: Option<DocumentId>,
}

fn default_status() -> PostStatus {
    PostStatus::Draft
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /{namespace}/homepage
///
/// Always at most one item: the latest published homepage.
pub async fn list_homepages(
    State(state): State<AppState>,
    guard: ListingGuard,
) -> AppResult<impl IntoResponse> {
    let mut query = QueryDescription {
        post_type: Some(HOMEPAGE_POST_TYPE.to_string()),
        posts_per_page: guard.params.per_page(),
        paged: guard.params.page(),
        ..QueryDescription::secondary()
    };
    state.homepages.rest_listing_query(&mut query);

    let homepages = state.posts.query(&query);

    Ok(Json(DataResponse { data: homepages }))
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /{namespace}/homepage
pub async fn create_homepage(
    RequireEditor(auth): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateHomepage>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }

    let outcome = state.posts.insert(NewPost {
        post_type: HOMEPAGE_POST_TYPE.to_string(),
        status: input.status,
        title: input.title,
        content: input.content,
        featured_image: input.featured_image,
        published_at: None,
    })?;
    lifecycle::dispatch(&state.homepages, &outcome.events);

    tracing::info!(
        post_id = outcome.post.id,
        status = %outcome.post.status,
        user_id = auth.user_id,
        role = %auth.role,
        "Homepage created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: outcome.post })))
}

/// PUT /{namespace}/homepage/{id}
pub async fn update_homepage(
    RequireEditor(auth): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
    Json(input): Json<PostUpdate>,
) -> AppResult<impl IntoResponse> {
    state
        .posts
        .get_post(id)
        .filter(|post| post.is_homepage())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Homepage",
            id,
        }))?;

    let outcome = state.posts.update(id, input)?;
    lifecycle::dispatch(&state.homepages, &outcome.events);

    tracing::info!(
        post_id = id,
        status = %outcome.post.status,
        user_id = auth.user_id,
        role = %auth.role,
        "Homepage updated"
    );

    Ok(Json(DataResponse { data: outcome.post }))
}

//! Front-end views: the site root and document permalinks.
//!
//! Each handler only decides the shape of the main query; the driver runs
//! the plugin pipeline against it. Not-found views still carry a body.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use homepages_core::post::HOMEPAGE_POST_TYPE;
use homepages_core::query::QueryDescription;
use homepages_core::settings::FrontPageMode;
use homepages_core::types::{absint, DocumentId};

use crate::engine::driver::{run_main_query, FrontView};
use crate::middleware::auth::MaybeUser;
use crate::query::FrontParams;
use crate::state::AppState;

fn respond(view: FrontView) -> Response {
    let status = if view.is_404 {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, Json(view)).into_response()
}

/// GET /
///
/// The home view. `?page_id=` opens a page, `?paged=` a later listing page,
/// and signed-in visitors may preview a homepage with `?p=&preview=true`.
pub async fn front_page(
    user: MaybeUser,
    State(state): State<AppState>,
    Query(params): Query<FrontParams>,
) -> Response {
    let preview = params
        .p
        .as_deref()
        .filter(|_| params.is_preview() && user.is_logged_in());

    let mut ctx = user.context();
    if let Some(p) = preview {
        ctx = ctx.with_preview(p);
    }

    let view = run_main_query(&state, ctx, |reading| {
        if let Some(page_id) = params.page_id() {
            return QueryDescription::page(page_id);
        }
        if reading.effective_mode() == FrontPageMode::Page {
            return QueryDescription::page(reading.page_on_front);
        }
        match preview {
            Some(p) => QueryDescription {
                is_preview: true,
                ..QueryDescription::singular(HOMEPAGE_POST_TYPE, absint(p))
            },
            None => QueryDescription::home(params.paged()),
        }
    });

    respond(view)
}

/// GET /homepage/{id}
///
/// A homepage's own permalink.
pub async fn homepage_permalink(
    user: MaybeUser,
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
) -> Response {
    let view = run_main_query(&state, user.context(), |_| {
        QueryDescription::singular(HOMEPAGE_POST_TYPE, id)
    });

    respond(view)
}

/// GET /pages/{id}
pub async fn page(
    user: MaybeUser,
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
) -> Response {
    let view = run_main_query(&state, user.context(), |_| QueryDescription::page(id));

    respond(view)
}

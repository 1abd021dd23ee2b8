//! Main-query driver.
//!
//! ```text
//! build query ─► parse_query ─► execute ─► posts_results ─► wp ─► document_title
//! ```

use homepages_core::context::RequestContext;
use homepages_core::ports::DocumentStore;
use homepages_core::post::{Post, PostStatus};
use homepages_core::query::QueryDescription;
use homepages_core::settings::ReadingSettings;
use serde::Serialize;

use crate::state::AppState;

/// Title used when nothing more specific applies.
pub const SITE_TITLE: &str = "Home";

/// Title of not-found responses.
pub const NOT_FOUND_TITLE: &str = "Page not found";

/// The rendered outcome of a front-end request.
#[derive(Debug, Clone, Serialize)]
pub struct FrontView {
    pub is_home: bool,
    pub is_404: bool,
    pub title: String,
    pub posts: Vec<Post>,
}

/// Run one front-end request.
///
/// `build` shapes the main query from the site's reading settings, the way
/// the host parses a request URL.
pub fn run_main_query<F>(state: &AppState, ctx: RequestContext, build: F) -> FrontView
where
    F: FnOnce(&ReadingSettings) -> QueryDescription,
{
    let pipeline = state.homepages.begin_request(ctx);
    let mut query = build(pipeline.reading());

    pipeline.parse_query(&mut query);

    if query.posts_per_page.is_none() && !query.is_singular {
        query.posts_per_page = Some(pipeline.reading().posts_per_page);
    }
    if query.is_singular && query.post_status.is_none() && pipeline.context().is_logged_in {
        query.post_status = Some(PostStatus::any());
    }
    query.posts = state.posts.query(&query);

    pipeline.posts_results(&mut query);
    let action = pipeline.wp(&mut query);

    if query.is_singular && query.posts.is_empty() && !query.is_404 {
        query.set_404();
    }
    if query.is_404 {
        query.posts.clear();
    }

    let title = pipeline.document_title(&query, default_title(&query));
    tracing::debug!(
        mode = %pipeline.mode(),
        ?action,
        is_home = query.is_home,
        is_404 = query.is_404,
        found = query.posts.len(),
        "Main query rendered"
    );

    FrontView {
        is_home: query.is_home,
        is_404: query.is_404,
        title,
        posts: query.posts,
    }
}

fn default_title(query: &QueryDescription) -> String {
    if query.is_404 {
        return NOT_FOUND_TITLE.to_string();
    }
    if query.is_singular {
        if let Some(post) = query.posts.first() {
            return post.title.clone();
        }
    }
    SITE_TITLE.to_string()
}

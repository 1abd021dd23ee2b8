pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the site route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   home view (?paged, ?page_id, ?p&preview)
/// /homepage/{id}                      homepage permalink
/// /pages/{id}                         page permalink
///
/// /{namespace}/homepage               list (guarded), create (auth)
/// /{namespace}/homepage/{id}          update (auth)
///
/// /admin/notices                      admin diagnostics (auth)
/// ```
///
/// `rest_route` is the listing route including its namespace, e.g.
/// `/wp/v2/homepage`.
pub fn site_routes(rest_route: &str) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::front::front_page))
        .route("/homepage/{id}", get(handlers::front::homepage_permalink))
        .route("/pages/{id}", get(handlers::front::page))
        .route(
            rest_route,
            get(handlers::homepage::list_homepages).post(handlers::homepage::create_homepage),
        )
        .route(
            &format!("{rest_route}/{{id}}"),
            axum::routing::put(handlers::homepage::update_homepage),
        )
        .route("/admin/notices", get(handlers::admin::list_notices))
}
